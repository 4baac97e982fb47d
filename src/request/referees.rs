use serde::Deserialize;

use super::PaginationConditions;

/// Registers a referee under the referrer owning `code`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRefereeRequest {
    #[serde(rename = "referenceID")]
    pub reference_id: String,
    pub code: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRefereeRequest {
    #[serde(default)]
    pub projects: Vec<String>,
    pub id: Option<i32>,
    #[serde(rename = "referenceID")]
    pub reference_id: Option<String>,
    #[serde(rename = "referrerReferenceID")]
    pub referrer_reference_id: Option<String>,
    #[serde(rename = "referrerID")]
    pub referrer_id: Option<i32>,
    #[serde(default)]
    pub pagination_conditions: PaginationConditions,
}

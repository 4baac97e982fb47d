use serde::Deserialize;

use super::PaginationConditions;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReferrerRequest {
    #[serde(rename = "referenceID")]
    pub reference_id: String,
    /// A random 8-character code is generated when absent.
    pub code: Option<String>,
    #[serde(rename = "campaignIDs", default)]
    pub campaign_ids: Vec<i32>,
    pub email: Option<String>,
}

/// `campaign_ids`, when present, replaces the referrer's campaign links.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReferrerRequest {
    #[serde(rename = "campaignIDs")]
    pub campaign_ids: Option<Vec<i32>>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetReferrerRequest {
    #[serde(default)]
    pub projects: Vec<String>,
    pub id: Option<i32>,
    #[serde(rename = "referenceID")]
    pub reference_id: Option<String>,
    pub code: Option<String>,
    #[serde(default)]
    pub pagination_conditions: PaginationConditions,
}

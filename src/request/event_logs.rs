use serde::Deserialize;

use super::PaginationConditions;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventLogRequest {
    pub event_key: String,
    #[serde(rename = "referenceID")]
    pub reference_id: String,
    pub amount: Option<f64>,
    pub data: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEventLogRequest {
    #[serde(default)]
    pub projects: Vec<String>,
    pub id: Option<i32>,
    pub event_key: Option<String>,
    #[serde(rename = "referenceID")]
    pub reference_id: Option<String>,
    pub status: Option<String>,
    /// Logs without a reward have no `reward_id`.
    #[serde(rename = "rewardID")]
    pub reward_id: Option<i32>,
    #[serde(default)]
    pub pagination_conditions: PaginationConditions,
}

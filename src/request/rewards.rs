use serde::Deserialize;

use super::PaginationConditions;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRewardRequest {
    #[serde(default)]
    pub projects: Vec<String>,
    pub id: Option<i32>,
    #[serde(rename = "campaignID")]
    pub campaign_id: Option<i32>,
    #[serde(rename = "refereeID")]
    pub referee_id: Option<i32>,
    #[serde(rename = "refereeReferenceID")]
    pub referee_reference_id: Option<String>,
    #[serde(rename = "referrerID")]
    pub referrer_id: Option<i32>,
    #[serde(rename = "referrerReferenceID")]
    pub referrer_reference_id: Option<String>,
    pub referrer_code: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub pagination_conditions: PaginationConditions,
}

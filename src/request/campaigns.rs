use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::PaginationConditions;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    pub name: String,
    /// e.g. "flat_fee", "percentage"
    pub reward_type: String,
    pub reward_value: f64,
    pub reward_cap: Option<f64>,
    pub invitee_reward_type: Option<String>,
    pub invitee_reward_value: Option<f64>,
    pub invitee_reward_cap: Option<f64>,
    pub budget: Option<f64>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_default: bool,
    /// "one_time", "forever", "months_per_customer" or "count_per_customer"
    pub campaign_type_per_customer: String,
    pub validity_months_per_customer: Option<i32>,
    pub max_occurrences_per_customer: Option<i64>,
    pub reward_cap_per_customer: Option<f64>,
    #[serde(default)]
    pub event_keys: Vec<String>,
}

/// Partial campaign update. `event_keys`, when present, replaces the
/// campaign's event links.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignRequest {
    pub name: Option<String>,
    pub reward_type: Option<String>,
    pub reward_value: Option<f64>,
    pub reward_cap: Option<f64>,
    pub invitee_reward_type: Option<String>,
    pub invitee_reward_value: Option<f64>,
    pub invitee_reward_cap: Option<f64>,
    pub budget: Option<f64>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub is_default: Option<bool>,
    pub campaign_type_per_customer: Option<String>,
    pub validity_months_per_customer: Option<i32>,
    pub max_occurrences_per_customer: Option<i64>,
    pub reward_cap_per_customer: Option<f64>,
    pub event_keys: Option<Vec<String>>,
}

/// Filters for `campaigns` listings. Date bounds are inclusive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCampaignsRequest {
    #[serde(default)]
    pub projects: Vec<String>,
    pub id: Option<i32>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub is_default: Option<bool>,
    pub start_date_min: Option<DateTime<Utc>>,
    pub start_date_max: Option<DateTime<Utc>>,
    pub end_date_min: Option<DateTime<Utc>>,
    pub end_date_max: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pagination_conditions: PaginationConditions,
}

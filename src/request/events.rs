use serde::Deserialize;

use super::PaginationConditions;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub key: String,
    pub name: String,
    /// e.g. "simple", "payment"
    #[serde(rename = "eventType")]
    pub event_type: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Filters for `events` listings. Every filter is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEventsRequest {
    #[serde(default)]
    pub projects: Vec<String>,
    pub id: Option<i32>,
    pub key: Option<String>,
    pub name: Option<String>,
    pub event_type: Option<String>,
    #[serde(default)]
    pub pagination_conditions: PaginationConditions,
}

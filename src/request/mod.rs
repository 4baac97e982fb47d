pub mod campaigns;
pub mod event_logs;
pub mod events;
pub mod referees;
pub mod referrers;
pub mod rewards;

pub use campaigns::{CreateCampaignRequest, GetCampaignsRequest, UpdateCampaignRequest};
pub use event_logs::{CreateEventLogRequest, GetEventLogRequest};
pub use events::{CreateEventRequest, GetEventsRequest, UpdateEventRequest};
pub use referees::{CreateRefereeRequest, GetRefereeRequest};
pub use referrers::{CreateReferrerRequest, GetReferrerRequest, UpdateReferrerRequest};
pub use rewards::GetRewardRequest;

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sea_orm::Order;
use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// Sort direction as it appears on the wire (`"ASC"` / `"DESC"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[default]
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// Paging, sorting and date-window options shared by every list request.
///
/// Each field is independent; `None` means "no constraint from this
/// dimension". `S` is the sort field: a raw `String` as deserialized, or an
/// entity column once [`PaginationConditions::resolve`] has checked it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaginationConditions<S = String> {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort_by: Option<S>,
    pub order: Option<SortOrder>,
    pub greater_than_id: Option<i32>,
    pub less_than_id: Option<i32>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub updated_after: Option<DateTime<Utc>>,
    pub updated_before: Option<DateTime<Utc>>,
}

// Column enums are not `Default`, so no bound on `S`.
impl<S> Default for PaginationConditions<S> {
    fn default() -> Self {
        Self {
            limit: None,
            offset: None,
            sort_by: None,
            order: None,
            greater_than_id: None,
            less_than_id: None,
            created_after: None,
            created_before: None,
            updated_after: None,
            updated_before: None,
        }
    }
}

impl PaginationConditions {
    /// Check `sort_by` against the column set `C` and return the typed form.
    ///
    /// Only known columns can reach an `ORDER BY`; anything else is rejected
    /// here instead of being passed through to the database.
    pub fn resolve<C: FromStr>(&self) -> Result<PaginationConditions<C>, RequestError> {
        let sort_by = match &self.sort_by {
            Some(name) => Some(
                name.parse::<C>()
                    .map_err(|_| RequestError::UnknownSortField(name.clone()))?,
            ),
            None => None,
        };

        Ok(PaginationConditions {
            limit: self.limit,
            offset: self.offset,
            sort_by,
            order: self.order,
            greater_than_id: self.greater_than_id,
            less_than_id: self.less_than_id,
            created_after: self.created_after,
            created_before: self.created_before,
            updated_after: self.updated_after,
            updated_before: self.updated_before,
        })
    }
}

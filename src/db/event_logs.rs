use sea_orm::*;
use tracing::info;

use super::{fetch, paginate};
use crate::error::{Error, RequestError};
use crate::models::event_logs;
use crate::request::{CreateEventLogRequest, GetEventLogRequest};

/// Build the listing query for `request` without executing it.
pub fn event_logs_query(
    request: &GetEventLogRequest,
) -> Result<Select<event_logs::Entity>, RequestError> {
    let mut query = event_logs::Entity::find();

    if !request.projects.is_empty() {
        query = query.filter(event_logs::Column::Project.is_in(request.projects.clone()));
    }
    if let Some(id) = request.id {
        query = query.filter(event_logs::Column::Id.eq(id));
    }
    if let Some(event_key) = &request.event_key {
        query = query.filter(event_logs::Column::EventKey.eq(event_key.as_str()));
    }
    if let Some(reference_id) = &request.reference_id {
        query = query.filter(event_logs::Column::ReferenceId.eq(reference_id.as_str()));
    }
    if let Some(status) = &request.status {
        query = query.filter(event_logs::Column::Status.eq(status.as_str()));
    }
    if let Some(reward_id) = request.reward_id {
        query = query.filter(event_logs::Column::RewardId.eq(reward_id));
    }

    paginate(query, &request.pagination_conditions)
}

pub async fn find_event_logs(
    db: &DatabaseConnection,
    request: &GetEventLogRequest,
) -> Result<Vec<event_logs::Model>, Error> {
    fetch(db, event_logs_query(request)?).await
}

pub async fn get_event_log_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<event_logs::Model>, DbErr> {
    event_logs::Entity::find_by_id(id).one(db).await
}

/// Record an event occurrence. The log starts out `pending` with no reward.
pub async fn insert_event_log(
    db: &DatabaseConnection,
    project: &str,
    input: CreateEventLogRequest,
) -> Result<event_logs::Model, DbErr> {
    let now = chrono::Utc::now();
    let new_log = event_logs::ActiveModel {
        project: Set(project.to_string()),
        event_key: Set(input.event_key),
        reference_id: Set(input.reference_id),
        amount: Set(input.amount),
        data: Set(input.data),
        status: Set(event_logs::PENDING.to_string()),
        reward_id: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let log = new_log.insert(db).await?;
    info!(id = log.id, event_key = %log.event_key, project, "Recorded event log");
    Ok(log)
}

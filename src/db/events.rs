use sea_orm::*;
use tracing::info;

use super::{fetch, paginate};
use crate::error::{Error, RequestError};
use crate::models::events;
use crate::request::{CreateEventRequest, GetEventsRequest, UpdateEventRequest};

/// Build the listing query for `request` without executing it.
pub fn events_query(request: &GetEventsRequest) -> Result<Select<events::Entity>, RequestError> {
    let mut query = events::Entity::find();

    if !request.projects.is_empty() {
        query = query.filter(events::Column::Project.is_in(request.projects.clone()));
    }
    if let Some(id) = request.id {
        query = query.filter(events::Column::Id.eq(id));
    }
    if let Some(key) = &request.key {
        query = query.filter(events::Column::Key.eq(key.as_str()));
    }
    if let Some(name) = &request.name {
        query = query.filter(events::Column::Name.eq(name.as_str()));
    }
    if let Some(event_type) = &request.event_type {
        query = query.filter(events::Column::EventType.eq(event_type.as_str()));
    }

    paginate(query, &request.pagination_conditions)
}

/// Fetch the events matching `request`.
pub async fn find_events(
    db: &DatabaseConnection,
    request: &GetEventsRequest,
) -> Result<Vec<events::Model>, Error> {
    fetch(db, events_query(request)?).await
}

/// Fetch a single event by ID.
pub async fn get_event_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<events::Model>, DbErr> {
    events::Entity::find_by_id(id).one(db).await
}

/// Insert a new event into `project`. Keys are unique per project.
pub async fn insert_event(
    db: &DatabaseConnection,
    project: &str,
    input: CreateEventRequest,
) -> Result<events::Model, DbErr> {
    let txn = db.begin().await?;

    let existing = events::Entity::find()
        .filter(events::Column::Project.eq(project))
        .filter(events::Column::Key.eq(input.key.as_str()))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(DbErr::Custom(format!(
            "Event key `{}` already exists in project {project}",
            input.key
        )));
    }

    let now = chrono::Utc::now();
    let new_event = events::ActiveModel {
        project: Set(project.to_string()),
        key: Set(input.key),
        name: Set(input.name),
        event_type: Set(input.event_type),
        description: Set(input.description),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let event = new_event.insert(&txn).await?;
    txn.commit().await?;
    info!(id = event.id, key = %event.key, project, "Created event");
    Ok(event)
}

/// Update an existing event.
pub async fn update_event(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateEventRequest,
) -> Result<events::Model, DbErr> {
    let event = events::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Event not found".to_string()))?;

    let mut active: events::ActiveModel = event.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(description) = input.description {
        active.description = Set(Some(description));
    }
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await
}

/// IDs of the events in `project` with the given keys. Fails if any key is
/// unknown.
pub(crate) async fn event_ids_for_keys<C: ConnectionTrait>(
    db: &C,
    project: &str,
    keys: &[String],
) -> Result<Vec<i32>, DbErr> {
    if keys.is_empty() {
        return Ok(Vec::new());
    }

    let found = events::Entity::find()
        .filter(events::Column::Project.eq(project))
        .filter(events::Column::Key.is_in(keys.to_vec()))
        .all(db)
        .await?;

    let missing: Vec<&str> = keys
        .iter()
        .filter(|key| !found.iter().any(|event| &event.key == *key))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        return Err(DbErr::RecordNotFound(format!(
            "Events not found: {}",
            missing.join(", ")
        )));
    }

    Ok(found.into_iter().map(|event| event.id).collect())
}

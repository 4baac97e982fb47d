use sea_orm::*;
use tracing::info;

use super::events::event_ids_for_keys;
use super::{fetch, paginate};
use crate::error::{Error, RequestError};
use crate::models::{campaign_events, campaigns};
use crate::request::{CreateCampaignRequest, GetCampaignsRequest, UpdateCampaignRequest};

/// Build the listing query for `request` without executing it.
pub fn campaigns_query(
    request: &GetCampaignsRequest,
) -> Result<Select<campaigns::Entity>, RequestError> {
    let mut query = campaigns::Entity::find();

    if !request.projects.is_empty() {
        query = query.filter(campaigns::Column::Project.is_in(request.projects.clone()));
    }
    if let Some(id) = request.id {
        query = query.filter(campaigns::Column::Id.eq(id));
    }
    if let Some(name) = &request.name {
        query = query.filter(campaigns::Column::Name.eq(name.as_str()));
    }
    if let Some(status) = &request.status {
        query = query.filter(campaigns::Column::Status.eq(status.as_str()));
    }
    if let Some(is_default) = request.is_default {
        query = query.filter(campaigns::Column::IsDefault.eq(is_default));
    }
    if let Some(min) = request.start_date_min {
        query = query.filter(campaigns::Column::StartDate.gte(min));
    }
    if let Some(max) = request.start_date_max {
        query = query.filter(campaigns::Column::StartDate.lte(max));
    }
    if let Some(min) = request.end_date_min {
        query = query.filter(campaigns::Column::EndDate.gte(min));
    }
    if let Some(max) = request.end_date_max {
        query = query.filter(campaigns::Column::EndDate.lte(max));
    }

    paginate(query, &request.pagination_conditions)
}

pub async fn find_campaigns(
    db: &DatabaseConnection,
    request: &GetCampaignsRequest,
) -> Result<Vec<campaigns::Model>, Error> {
    fetch(db, campaigns_query(request)?).await
}

pub async fn get_campaign_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<campaigns::Model>, DbErr> {
    campaigns::Entity::find_by_id(id).one(db).await
}

/// Event IDs linked to a campaign, ascending.
pub async fn campaign_event_ids(
    db: &DatabaseConnection,
    campaign_id: i32,
) -> Result<Vec<i32>, DbErr> {
    let links = campaign_events::Entity::find()
        .filter(campaign_events::Column::CampaignId.eq(campaign_id))
        .order_by_asc(campaign_events::Column::EventId)
        .all(db)
        .await?;

    Ok(links.into_iter().map(|link| link.event_id).collect())
}

/// Insert a campaign into `project` and link it to `input.event_keys`.
///
/// Every event key must exist in the project; the whole insert is rolled
/// back otherwise.
pub async fn insert_campaign(
    db: &DatabaseConnection,
    project: &str,
    input: CreateCampaignRequest,
) -> Result<campaigns::Model, DbErr> {
    let now = chrono::Utc::now();
    let txn = db.begin().await?;

    let new_campaign = campaigns::ActiveModel {
        project: Set(project.to_string()),
        name: Set(input.name),
        reward_type: Set(input.reward_type),
        reward_value: Set(input.reward_value),
        reward_cap: Set(input.reward_cap),
        invitee_reward_type: Set(input.invitee_reward_type),
        invitee_reward_value: Set(input.invitee_reward_value),
        invitee_reward_cap: Set(input.invitee_reward_cap),
        budget: Set(input.budget),
        description: Set(input.description),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        status: Set(campaigns::DEFAULT_STATUS.to_string()),
        is_default: Set(input.is_default),
        campaign_type_per_customer: Set(input.campaign_type_per_customer),
        validity_months_per_customer: Set(input.validity_months_per_customer),
        max_occurrences_per_customer: Set(input.max_occurrences_per_customer),
        reward_cap_per_customer: Set(input.reward_cap_per_customer),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let campaign = new_campaign.insert(&txn).await?;

    let event_ids = event_ids_for_keys(&txn, project, &input.event_keys).await?;
    link_events(&txn, campaign.id, event_ids).await?;

    txn.commit().await?;
    info!(id = campaign.id, project, "Created campaign");
    Ok(campaign)
}

/// Update a campaign. `event_keys`, when given, replaces its event links.
pub async fn update_campaign(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateCampaignRequest,
) -> Result<campaigns::Model, DbErr> {
    let txn = db.begin().await?;

    let campaign = campaigns::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(DbErr::RecordNotFound("Campaign not found".to_string()))?;
    let project = campaign.project.clone();

    let mut active: campaigns::ActiveModel = campaign.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(reward_type) = input.reward_type {
        active.reward_type = Set(reward_type);
    }
    if let Some(reward_value) = input.reward_value {
        active.reward_value = Set(reward_value);
    }
    if let Some(reward_cap) = input.reward_cap {
        active.reward_cap = Set(Some(reward_cap));
    }
    if let Some(invitee_reward_type) = input.invitee_reward_type {
        active.invitee_reward_type = Set(Some(invitee_reward_type));
    }
    if let Some(invitee_reward_value) = input.invitee_reward_value {
        active.invitee_reward_value = Set(Some(invitee_reward_value));
    }
    if let Some(invitee_reward_cap) = input.invitee_reward_cap {
        active.invitee_reward_cap = Set(Some(invitee_reward_cap));
    }
    if let Some(budget) = input.budget {
        active.budget = Set(Some(budget));
    }
    if let Some(description) = input.description {
        active.description = Set(Some(description));
    }
    if let Some(start_date) = input.start_date {
        active.start_date = Set(Some(start_date));
    }
    if let Some(end_date) = input.end_date {
        active.end_date = Set(Some(end_date));
    }
    if let Some(status) = input.status {
        active.status = Set(status);
    }
    if let Some(is_default) = input.is_default {
        active.is_default = Set(is_default);
    }
    if let Some(campaign_type) = input.campaign_type_per_customer {
        active.campaign_type_per_customer = Set(campaign_type);
    }
    if let Some(months) = input.validity_months_per_customer {
        active.validity_months_per_customer = Set(Some(months));
    }
    if let Some(occurrences) = input.max_occurrences_per_customer {
        active.max_occurrences_per_customer = Set(Some(occurrences));
    }
    if let Some(cap) = input.reward_cap_per_customer {
        active.reward_cap_per_customer = Set(Some(cap));
    }
    active.updated_at = Set(chrono::Utc::now());
    let updated = active.update(&txn).await?;

    if let Some(event_keys) = input.event_keys {
        let event_ids = event_ids_for_keys(&txn, &project, &event_keys).await?;
        campaign_events::Entity::delete_many()
            .filter(campaign_events::Column::CampaignId.eq(id))
            .exec(&txn)
            .await?;
        link_events(&txn, id, event_ids).await?;
    }

    txn.commit().await?;
    Ok(updated)
}

async fn link_events<C: ConnectionTrait>(
    db: &C,
    campaign_id: i32,
    mut event_ids: Vec<i32>,
) -> Result<(), DbErr> {
    event_ids.sort_unstable();
    event_ids.dedup();
    if event_ids.is_empty() {
        return Ok(());
    }

    let links = event_ids
        .into_iter()
        .map(|event_id| campaign_events::ActiveModel {
            campaign_id: Set(campaign_id),
            event_id: Set(event_id),
        });
    campaign_events::Entity::insert_many(links)
        .exec_without_returning(db)
        .await?;

    Ok(())
}

use sea_orm::*;

use super::referees::referee_ids_where;
use super::referrers::referrer_ids_where;
use super::{fetch, paginate};
use crate::error::{Error, RequestError};
use crate::models::{referees, referrers, rewards};
use crate::request::GetRewardRequest;

/// Build the listing query for `request` without executing it.
///
/// Reference-id and code filters match referees/referrers of the reward's
/// own project.
pub fn rewards_query(request: &GetRewardRequest) -> Result<Select<rewards::Entity>, RequestError> {
    let mut query = rewards::Entity::find();
    let project = (rewards::Entity, rewards::Column::Project);

    if !request.projects.is_empty() {
        query = query.filter(rewards::Column::Project.is_in(request.projects.clone()));
    }
    if let Some(id) = request.id {
        query = query.filter(rewards::Column::Id.eq(id));
    }
    if let Some(campaign_id) = request.campaign_id {
        query = query.filter(rewards::Column::CampaignId.eq(campaign_id));
    }
    if let Some(referee_id) = request.referee_id {
        query = query.filter(rewards::Column::RefereeId.eq(referee_id));
    }
    if let Some(reference_id) = &request.referee_reference_id {
        query = query.filter(rewards::Column::RefereeId.in_subquery(referee_ids_where(
            referees::Column::ReferenceId,
            reference_id,
            project,
        )));
    }
    if let Some(referrer_id) = request.referrer_id {
        query = query.filter(rewards::Column::ReferrerId.eq(referrer_id));
    }
    if let Some(reference_id) = &request.referrer_reference_id {
        query = query.filter(rewards::Column::ReferrerId.in_subquery(referrer_ids_where(
            referrers::Column::ReferenceId,
            reference_id,
            project,
        )));
    }
    if let Some(code) = &request.referrer_code {
        query = query.filter(rewards::Column::ReferrerId.in_subquery(referrer_ids_where(
            referrers::Column::Code,
            code,
            project,
        )));
    }
    if let Some(status) = &request.status {
        query = query.filter(rewards::Column::Status.eq(status.as_str()));
    }

    paginate(query, &request.pagination_conditions)
}

pub async fn find_rewards(
    db: &DatabaseConnection,
    request: &GetRewardRequest,
) -> Result<Vec<rewards::Model>, Error> {
    fetch(db, rewards_query(request)?).await
}

pub async fn get_reward_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<rewards::Model>, DbErr> {
    rewards::Entity::find_by_id(id).one(db).await
}

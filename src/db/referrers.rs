use sea_orm::sea_query::{Expr, IntoColumnRef, Query, SelectStatement};
use sea_orm::*;
use tracing::info;
use uuid::Uuid;

use super::{fetch, paginate};
use crate::error::{Error, RequestError};
use crate::models::{campaigns, referrer_campaigns, referrers};
use crate::request::{CreateReferrerRequest, GetReferrerRequest, UpdateReferrerRequest};

/// Build the listing query for `request` without executing it.
pub fn referrers_query(
    request: &GetReferrerRequest,
) -> Result<Select<referrers::Entity>, RequestError> {
    let mut query = referrers::Entity::find();

    if !request.projects.is_empty() {
        query = query.filter(referrers::Column::Project.is_in(request.projects.clone()));
    }
    if let Some(id) = request.id {
        query = query.filter(referrers::Column::Id.eq(id));
    }
    if let Some(reference_id) = &request.reference_id {
        query = query.filter(referrers::Column::ReferenceId.eq(reference_id.as_str()));
    }
    if let Some(code) = &request.code {
        query = query.filter(referrers::Column::Code.eq(code.as_str()));
    }

    paginate(query, &request.pagination_conditions)
}

/// `SELECT referrers.id ... WHERE <column> = value` restricted to the
/// project held in `outer_project`.
pub(crate) fn referrer_ids_where(
    column: referrers::Column,
    value: &str,
    outer_project: impl IntoColumnRef,
) -> SelectStatement {
    Query::select()
        .column((referrers::Entity, referrers::Column::Id))
        .from(referrers::Entity)
        .and_where(column.eq(value))
        .and_where(Expr::col((referrers::Entity, referrers::Column::Project)).equals(outer_project))
        .to_owned()
}

pub async fn find_referrers(
    db: &DatabaseConnection,
    request: &GetReferrerRequest,
) -> Result<Vec<referrers::Model>, Error> {
    fetch(db, referrers_query(request)?).await
}

pub async fn get_referrer_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<referrers::Model>, DbErr> {
    referrers::Entity::find_by_id(id).one(db).await
}

/// Look up the referrer owning `code` in `project`.
pub async fn get_referrer_by_code<C: ConnectionTrait>(
    db: &C,
    project: &str,
    code: &str,
) -> Result<Option<referrers::Model>, DbErr> {
    referrers::Entity::find()
        .filter(referrers::Column::Project.eq(project))
        .filter(referrers::Column::Code.eq(code))
        .one(db)
        .await
}

/// Campaign IDs the referrer is enrolled in, ascending.
pub async fn referrer_campaign_ids(
    db: &DatabaseConnection,
    referrer_id: i32,
) -> Result<Vec<i32>, DbErr> {
    let links = referrer_campaigns::Entity::find()
        .filter(referrer_campaigns::Column::ReferrerId.eq(referrer_id))
        .order_by_asc(referrer_campaigns::Column::CampaignId)
        .all(db)
        .await?;

    Ok(links.into_iter().map(|link| link.campaign_id).collect())
}

/// Insert a new referrer and enroll it in the requested campaigns.
///
/// Codes are unique per project and every campaign must belong to `project`.
pub async fn insert_referrer(
    db: &DatabaseConnection,
    project: &str,
    input: CreateReferrerRequest,
) -> Result<referrers::Model, DbErr> {
    let now = chrono::Utc::now();
    let txn = db.begin().await?;

    let code = input.code.unwrap_or_else(generate_code);
    if get_referrer_by_code(&txn, project, &code).await?.is_some() {
        return Err(DbErr::Custom(format!(
            "Referrer code `{code}` already exists in project {project}"
        )));
    }

    let new_referrer = referrers::ActiveModel {
        project: Set(project.to_string()),
        reference_id: Set(input.reference_id),
        code: Set(code),
        email: Set(input.email),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let referrer = new_referrer.insert(&txn).await?;
    link_campaigns(&txn, project, referrer.id, input.campaign_ids).await?;

    txn.commit().await?;
    info!(id = referrer.id, code = %referrer.code, project, "Created referrer");
    Ok(referrer)
}

/// Update a referrer. `campaign_ids`, when given, replaces its enrollments.
pub async fn update_referrer(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateReferrerRequest,
) -> Result<referrers::Model, DbErr> {
    let txn = db.begin().await?;

    let referrer = referrers::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(DbErr::RecordNotFound("Referrer not found".to_string()))?;
    let project = referrer.project.clone();

    let mut active: referrers::ActiveModel = referrer.into();
    if let Some(email) = input.email {
        active.email = Set(Some(email));
    }
    active.updated_at = Set(chrono::Utc::now());
    let updated = active.update(&txn).await?;

    if let Some(campaign_ids) = input.campaign_ids {
        referrer_campaigns::Entity::delete_many()
            .filter(referrer_campaigns::Column::ReferrerId.eq(id))
            .exec(&txn)
            .await?;
        link_campaigns(&txn, &project, id, campaign_ids).await?;
    }

    txn.commit().await?;
    Ok(updated)
}

async fn link_campaigns<C: ConnectionTrait>(
    db: &C,
    project: &str,
    referrer_id: i32,
    mut campaign_ids: Vec<i32>,
) -> Result<(), DbErr> {
    campaign_ids.sort_unstable();
    campaign_ids.dedup();
    if campaign_ids.is_empty() {
        return Ok(());
    }

    let found: Vec<i32> = campaigns::Entity::find()
        .filter(campaigns::Column::Project.eq(project))
        .filter(campaigns::Column::Id.is_in(campaign_ids.clone()))
        .all(db)
        .await?
        .into_iter()
        .map(|campaign| campaign.id)
        .collect();
    let missing: Vec<String> = campaign_ids
        .iter()
        .filter(|id| !found.contains(id))
        .map(|id| id.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DbErr::RecordNotFound(format!(
            "Campaigns not found: {}",
            missing.join(", ")
        )));
    }

    let links = campaign_ids
        .into_iter()
        .map(|campaign_id| referrer_campaigns::ActiveModel {
            referrer_id: Set(referrer_id),
            campaign_id: Set(campaign_id),
        });
    referrer_campaigns::Entity::insert_many(links)
        .exec_without_returning(db)
        .await?;

    Ok(())
}

fn generate_code() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}

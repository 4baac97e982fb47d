use sea_orm::sea_query::{Expr, IntoColumnRef, Query, SelectStatement};
use sea_orm::*;
use tracing::info;

use super::referrers::{get_referrer_by_code, referrer_ids_where};
use super::{fetch, paginate};
use crate::error::{Error, RequestError};
use crate::models::{referees, referrers};
use crate::request::{CreateRefereeRequest, GetRefereeRequest};

/// Build the listing query for `request` without executing it.
pub fn referees_query(request: &GetRefereeRequest) -> Result<Select<referees::Entity>, RequestError> {
    let mut query = referees::Entity::find();

    if !request.projects.is_empty() {
        query = query.filter(referees::Column::Project.is_in(request.projects.clone()));
    }
    if let Some(id) = request.id {
        query = query.filter(referees::Column::Id.eq(id));
    }
    if let Some(reference_id) = &request.reference_id {
        query = query.filter(referees::Column::ReferenceId.eq(reference_id.as_str()));
    }
    if let Some(reference_id) = &request.referrer_reference_id {
        query = query.filter(referees::Column::ReferrerId.in_subquery(referrer_ids_where(
            referrers::Column::ReferenceId,
            reference_id,
            (referees::Entity, referees::Column::Project),
        )));
    }
    if let Some(referrer_id) = request.referrer_id {
        query = query.filter(referees::Column::ReferrerId.eq(referrer_id));
    }

    paginate(query, &request.pagination_conditions)
}

/// `SELECT referees.id ... WHERE <column> = value` restricted to the
/// project held in `outer_project`.
pub(crate) fn referee_ids_where(
    column: referees::Column,
    value: &str,
    outer_project: impl IntoColumnRef,
) -> SelectStatement {
    Query::select()
        .column((referees::Entity, referees::Column::Id))
        .from(referees::Entity)
        .and_where(column.eq(value))
        .and_where(Expr::col((referees::Entity, referees::Column::Project)).equals(outer_project))
        .to_owned()
}

pub async fn find_referees(
    db: &DatabaseConnection,
    request: &GetRefereeRequest,
) -> Result<Vec<referees::Model>, Error> {
    fetch(db, referees_query(request)?).await
}

pub async fn get_referee_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<referees::Model>, DbErr> {
    referees::Entity::find_by_id(id).one(db).await
}

/// Register a referee under the referrer that owns `input.code`.
pub async fn insert_referee(
    db: &DatabaseConnection,
    project: &str,
    input: CreateRefereeRequest,
) -> Result<referees::Model, DbErr> {
    let referrer = get_referrer_by_code(db, project, &input.code)
        .await?
        .ok_or(DbErr::RecordNotFound("Referrer not found".to_string()))?;

    let now = chrono::Utc::now();
    let new_referee = referees::ActiveModel {
        project: Set(project.to_string()),
        reference_id: Set(input.reference_id),
        referrer_id: Set(referrer.id),
        email: Set(input.email),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let referee = new_referee.insert(db).await?;
    info!(id = referee.id, referrer_id = referrer.id, project, "Created referee");
    Ok(referee)
}

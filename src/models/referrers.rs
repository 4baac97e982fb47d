use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pagination::PaginatedColumns;

/// SeaORM entity for the `referrers` table.
///
/// `(project, reference_id)` identifies the customer in the caller's system;
/// `code`, unique within a project (checked on insert), is what referees
/// present when signing up.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "referrers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project: String,
    pub reference_id: String,
    pub code: String,
    pub email: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::referees::Entity")]
    Referees,
    #[sea_orm(has_many = "super::referrer_campaigns::Entity")]
    ReferrerCampaigns,
}

impl Related<super::referees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Referees.def()
    }
}

impl Related<super::referrer_campaigns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReferrerCampaigns.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl PaginatedColumns for Column {
    fn id() -> Self {
        Column::Id
    }

    fn created_at() -> Self {
        Column::CreatedAt
    }

    fn updated_at() -> Self {
        Column::UpdatedAt
    }
}

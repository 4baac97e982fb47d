use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pagination::PaginatedColumns;

/// SeaORM entity for the `events` table.
///
/// `key` is unique within a project (checked on insert) and is what event
/// logs and campaigns refer to.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project: String,
    pub key: String,
    pub name: String,
    pub event_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campaign_events::Entity")]
    CampaignEvents,
}

impl Related<super::campaign_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignEvents.def()
    }
}

impl Related<super::campaigns::Entity> for Entity {
    fn to() -> RelationDef {
        super::campaign_events::Relation::Campaign.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::campaign_events::Relation::Event.def().rev())
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

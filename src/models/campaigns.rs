use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pagination::PaginatedColumns;

/// SeaORM entity for the `campaigns` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "campaigns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project: String,
    pub name: String,
    pub reward_type: String,
    #[sea_orm(column_type = "Double")]
    pub reward_value: f64,
    #[sea_orm(column_type = "Double", nullable)]
    pub reward_cap: Option<f64>,
    pub invitee_reward_type: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub invitee_reward_value: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub invitee_reward_cap: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub budget: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub start_date: Option<DateTimeUtc>,
    pub end_date: Option<DateTimeUtc>,
    pub status: String,
    pub is_default: bool,
    pub campaign_type_per_customer: String,
    pub validity_months_per_customer: Option<i32>,
    pub max_occurrences_per_customer: Option<i64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub reward_cap_per_customer: Option<f64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

/// Status given to campaigns created without one.
pub const DEFAULT_STATUS: &str = "active";

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campaign_events::Entity")]
    CampaignEvents,
    #[sea_orm(has_many = "super::referrer_campaigns::Entity")]
    ReferrerCampaigns,
    #[sea_orm(has_many = "super::rewards::Entity")]
    Rewards,
}

impl Related<super::campaign_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignEvents.def()
    }
}

impl Related<super::referrer_campaigns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReferrerCampaigns.def()
    }
}

impl Related<super::rewards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rewards.def()
    }
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        super::campaign_events::Relation::Event.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::campaign_events::Relation::Campaign.def().rev())
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

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pagination::PaginatedColumns;

/// SeaORM entity for the `rewards` table.
///
/// A reward belongs to a campaign and is owed to either the referrer or the
/// referee (or both, for two-sided campaigns).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rewards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project: String,
    pub campaign_id: i32,
    pub referrer_id: Option<i32>,
    pub referee_id: Option<i32>,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campaigns::Entity",
        from = "Column::CampaignId",
        to = "super::campaigns::Column::Id"
    )]
    Campaign,
    #[sea_orm(
        belongs_to = "super::referrers::Entity",
        from = "Column::ReferrerId",
        to = "super::referrers::Column::Id"
    )]
    Referrer,
    #[sea_orm(
        belongs_to = "super::referees::Entity",
        from = "Column::RefereeId",
        to = "super::referees::Column::Id"
    )]
    Referee,
}

impl Related<super::campaigns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl Related<super::referrers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Referrer.def()
    }
}

impl Related<super::referees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Referee.def()
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

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pagination::PaginatedColumns;

/// SeaORM entity for the `event_logs` table: one row per reported event
/// occurrence.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project: String,
    pub event_key: String,
    pub reference_id: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub amount: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub data: Option<String>,
    pub status: String,
    pub reward_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

/// Status of a freshly recorded log, before any reward processing.
pub const PENDING: &str = "pending";

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rewards::Entity",
        from = "Column::RewardId",
        to = "super::rewards::Column::Id"
    )]
    Reward,
}

impl Related<super::rewards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reward.def()
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

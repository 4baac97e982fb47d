use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pagination::PaginatedColumns;

/// SeaORM entity for the `referees` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "referees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project: String,
    pub reference_id: String,
    pub referrer_id: i32,
    pub email: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::referrers::Entity",
        from = "Column::ReferrerId",
        to = "super::referrers::Column::Id"
    )]
    Referrer,
}

impl Related<super::referrers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Referrer.def()
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

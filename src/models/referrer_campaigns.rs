use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Link table between referrers and the campaigns they take part in.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "referrer_campaigns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub referrer_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub campaign_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::referrers::Entity",
        from = "Column::ReferrerId",
        to = "super::referrers::Column::Id",
        on_delete = "Cascade"
    )]
    Referrer,
    #[sea_orm(
        belongs_to = "super::campaigns::Entity",
        from = "Column::CampaignId",
        to = "super::campaigns::Column::Id",
        on_delete = "Cascade"
    )]
    Campaign,
}

impl Related<super::referrers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Referrer.def()
    }
}

impl Related<super::campaigns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

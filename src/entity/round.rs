use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::Table;

/// `players` is a head count, not a relation; players point at their round
/// through `player.round_id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "round")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub number: i32,
    pub players: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player::Entity")]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Table for Entity {
    const RESOURCE: &'static str = "round";

    fn id_column() -> Column {
        Column::Id
    }
}

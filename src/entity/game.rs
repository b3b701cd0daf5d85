use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::Table;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player::Entity")]
    Players,
    #[sea_orm(has_many = "super::deck::Entity")]
    Decks,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

impl Related<super::deck::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Decks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Table for Entity {
    const RESOURCE: &'static str = "game";

    fn id_column() -> Column {
        Column::Id
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::Table;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "deck")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub shuffled: bool,
    pub game_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game::Entity",
        from = "Column::GameId",
        to = "super::game::Column::Id"
    )]
    Game,
    #[sea_orm(has_many = "super::card::Entity")]
    Cards,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cards.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Table for Entity {
    const RESOURCE: &'static str = "deck";

    fn id_column() -> Column {
        Column::Id
    }
}

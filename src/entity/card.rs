use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::Table;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "card")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub suit: Option<String>,
    pub rank: Option<String>,
    pub value: i32,
    pub deck_id: Option<i32>,
    pub is_drawn: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::deck::Entity",
        from = "Column::DeckId",
        to = "super::deck::Column::Id"
    )]
    Deck,
}

impl Related<super::deck::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deck.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Table for Entity {
    const RESOURCE: &'static str = "card";

    fn id_column() -> Column {
        Column::Id
    }
}

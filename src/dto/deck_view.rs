use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DbErr, ModelTrait, QueryOrder};
use serde::Serialize;

use crate::entity::{card, deck};

/// A deck with its cards inlined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckView {
    pub id: i32,
    pub cards: Vec<card::Model>,
    pub shuffled: bool,
    pub game_id: Option<i32>,
}

impl DeckView {
    pub fn new(deck: deck::Model, cards: Vec<card::Model>) -> Self {
        Self {
            id: deck.id,
            cards,
            shuffled: deck.shuffled,
            game_id: deck.game_id,
        }
    }

    pub async fn load<C: ConnectionTrait>(db: &C, deck: deck::Model) -> Result<Self, DbErr> {
        let cards = deck
            .find_related(card::Entity)
            .order_by_asc(card::Column::Id)
            .all(db)
            .await?;
        Ok(Self::new(deck, cards))
    }

    pub fn assemble(decks: Vec<deck::Model>, cards: Vec<card::Model>) -> Vec<Self> {
        let mut cards_by_deck: HashMap<i32, Vec<card::Model>> = HashMap::new();
        for c in cards {
            if let Some(deck_id) = c.deck_id {
                cards_by_deck.entry(deck_id).or_default().push(c);
            }
        }

        decks
            .into_iter()
            .map(|d| {
                let cards = cards_by_deck.remove(&d.id).unwrap_or_default();
                Self::new(d, cards)
            })
            .collect()
    }
}

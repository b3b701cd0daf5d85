use sea_orm::ActiveValue::Set;

use crate::dto::payload::Payload;
use crate::entity::card;
use crate::errors::AppError;
use crate::store::Patch;

#[derive(Debug, Clone, PartialEq)]
pub struct NewCard {
    pub suit: Option<String>,
    pub rank: Option<String>,
    pub value: i32,
    pub deck_id: Option<i32>,
    pub is_drawn: bool,
}

impl NewCard {
    pub fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        Ok(Self {
            suit: payload.required("suit")?,
            rank: payload.required("rank")?,
            value: payload.required("value")?,
            deck_id: payload.required("deck_id")?,
            is_drawn: payload.required::<Option<bool>>("is_drawn")?.unwrap_or(false),
        })
    }
}

impl From<NewCard> for card::ActiveModel {
    fn from(new: NewCard) -> Self {
        card::ActiveModel {
            suit: Set(new.suit),
            rank: Set(new.rank),
            value: Set(new.value),
            deck_id: Set(new.deck_id),
            is_drawn: Set(new.is_drawn),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPatch {
    pub suit: Option<Option<String>>,
    pub rank: Option<Option<String>>,
    pub value: Option<i32>,
    pub deck_id: Option<Option<i32>>,
    pub is_drawn: Option<bool>,
}

impl CardPatch {
    pub const FIELDS: &'static [&'static str] = &["suit", "rank", "value", "deck_id", "is_drawn"];

    pub fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        payload.only(Self::FIELDS)?;
        Ok(Self {
            suit: payload.optional("suit")?,
            rank: payload.optional("rank")?,
            value: payload.optional("value")?,
            deck_id: payload.optional("deck_id")?,
            is_drawn: payload.optional("is_drawn")?,
        })
    }
}

impl Patch<card::ActiveModel> for CardPatch {
    fn apply(self, active: &mut card::ActiveModel) {
        if let Some(suit) = self.suit {
            active.suit = Set(suit);
        }
        if let Some(rank) = self.rank {
            active.rank = Set(rank);
        }
        if let Some(value) = self.value {
            active.value = Set(value);
        }
        if let Some(deck_id) = self.deck_id {
            active.deck_id = Set(deck_id);
        }
        if let Some(is_drawn) = self.is_drawn {
            active.is_drawn = Set(is_drawn);
        }
    }
}

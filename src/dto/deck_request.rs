use sea_orm::ActiveValue::Set;
use serde_json::Value;

use crate::dto::payload::Payload;
use crate::entity::deck;
use crate::errors::AppError;
use crate::store::Patch;

/// A new deck. `card_ids` are existing cards moved into the deck.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDeck {
    pub card_ids: Vec<i32>,
    pub shuffled: bool,
    pub game_id: Option<i32>,
}

impl NewDeck {
    pub fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        let Some(Value::Array(cards)) = payload.get("cards") else {
            return Err(AppError::invalid_shape("cards must be a list"));
        };

        let card_ids = cards
            .iter()
            .map(|card| {
                card.as_i64()
                    .and_then(|id| i32::try_from(id).ok())
                    .ok_or_else(|| AppError::invalid_shape("cards must be a list of card ids"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            card_ids,
            shuffled: payload
                .optional::<Option<bool>>("shuffled")?
                .flatten()
                .unwrap_or(false),
            game_id: payload.optional::<Option<i32>>("game_id")?.flatten(),
        })
    }

    pub fn active_model(&self) -> deck::ActiveModel {
        deck::ActiveModel {
            shuffled: Set(self.shuffled),
            game_id: Set(self.game_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeckPatch {
    pub shuffled: Option<bool>,
    pub game_id: Option<Option<i32>>,
}

impl DeckPatch {
    pub const FIELDS: &'static [&'static str] = &["shuffled", "game_id"];

    pub fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        payload.only(Self::FIELDS)?;
        Ok(Self {
            shuffled: payload.optional("shuffled")?,
            game_id: payload.optional("game_id")?,
        })
    }
}

impl Patch<deck::ActiveModel> for DeckPatch {
    fn apply(self, active: &mut deck::ActiveModel) {
        if let Some(shuffled) = self.shuffled {
            active.shuffled = Set(shuffled);
        }
        if let Some(game_id) = self.game_id {
            active.game_id = Set(game_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cards_must_be_an_array() {
        for body in [
            json!({ "cards": "not-a-list", "shuffled": false, "game_id": 1 }),
            json!({ "shuffled": false }),
        ] {
            let payload = Payload::from_json(body).unwrap();
            match NewDeck::from_payload(&payload) {
                Err(AppError::InvalidShape { message }) => assert_eq!(message, "cards must be a list"),
                other => panic!("expected InvalidShape, got {other:?}"),
            }
        }
    }

    #[test]
    fn cards_must_hold_ids() {
        let payload = Payload::from_json(json!({ "cards": [{ "suit": "clubs" }] })).unwrap();
        assert!(matches!(
            NewDeck::from_payload(&payload),
            Err(AppError::InvalidShape { .. })
        ));
    }

    #[test]
    fn shuffled_and_game_id_are_optional() {
        let payload = Payload::from_json(json!({ "cards": [] })).unwrap();
        let new = NewDeck::from_payload(&payload).unwrap();
        assert_eq!(
            new,
            NewDeck {
                card_ids: vec![],
                shuffled: false,
                game_id: None,
            }
        );
    }
}

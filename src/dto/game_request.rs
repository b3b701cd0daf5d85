use sea_orm::ActiveValue::Set;

use crate::dto::payload::Payload;
use crate::entity::game;
use crate::errors::AppError;
use crate::store::Patch;

/// A new game. `players` and `deck` must be present; their ids (or `null`
/// for none) name existing rows moved into the game.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGame {
    pub name: String,
    pub player_ids: Vec<i32>,
    pub deck_ids: Vec<i32>,
}

impl NewGame {
    pub fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        Ok(Self {
            name: payload.required("name")?,
            player_ids: payload
                .required::<Option<Vec<i32>>>("players")?
                .unwrap_or_default(),
            deck_ids: payload
                .required::<Option<Vec<i32>>>("deck")?
                .unwrap_or_default(),
        })
    }

    pub fn active_model(&self) -> game::ActiveModel {
        game::ActiveModel {
            name: Set(self.name.clone()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamePatch {
    pub name: Option<String>,
}

impl GamePatch {
    pub const FIELDS: &'static [&'static str] = &["name"];

    pub fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        payload.only(Self::FIELDS)?;
        Ok(Self {
            name: payload.optional("name")?,
        })
    }
}

impl Patch<game::ActiveModel> for GamePatch {
    fn apply(self, active: &mut game::ActiveModel) {
        if let Some(name) = self.name {
            active.name = Set(name);
        }
    }
}

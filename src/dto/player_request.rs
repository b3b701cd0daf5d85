use sea_orm::ActiveValue::Set;

use crate::dto::payload::Payload;
use crate::entity::player;
use crate::errors::AppError;
use crate::store::Patch;

#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayer {
    pub name: String,
    pub score: Option<i32>,
    pub is_winner: bool,
    pub round_id: Option<i32>,
    pub game_id: Option<i32>,
}

impl NewPlayer {
    pub fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        Ok(Self {
            name: payload.required("name")?,
            score: payload.required("score")?,
            is_winner: payload.required::<Option<bool>>("is_winner")?.unwrap_or(false),
            round_id: payload.required("round_id")?,
            game_id: payload.required("game_id")?,
        })
    }
}

impl From<NewPlayer> for player::ActiveModel {
    fn from(new: NewPlayer) -> Self {
        player::ActiveModel {
            name: Set(new.name),
            score: Set(new.score),
            is_winner: Set(new.is_winner),
            round_id: Set(new.round_id),
            game_id: Set(new.game_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub score: Option<Option<i32>>,
    pub is_winner: Option<bool>,
    pub round_id: Option<Option<i32>>,
    pub game_id: Option<Option<i32>>,
}

impl PlayerPatch {
    pub const FIELDS: &'static [&'static str] = &["name", "score", "is_winner", "round_id", "game_id"];

    pub fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        payload.only(Self::FIELDS)?;
        Ok(Self {
            name: payload.optional("name")?,
            score: payload.optional("score")?,
            is_winner: payload.optional("is_winner")?,
            round_id: payload.optional("round_id")?,
            game_id: payload.optional("game_id")?,
        })
    }
}

impl Patch<player::ActiveModel> for PlayerPatch {
    fn apply(self, active: &mut player::ActiveModel) {
        if let Some(name) = self.name {
            active.name = Set(name);
        }
        if let Some(score) = self.score {
            active.score = Set(score);
        }
        if let Some(is_winner) = self.is_winner {
            active.is_winner = Set(is_winner);
        }
        if let Some(round_id) = self.round_id {
            active.round_id = Set(round_id);
        }
        if let Some(game_id) = self.game_id {
            active.game_id = Set(game_id);
        }
    }
}

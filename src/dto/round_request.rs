use sea_orm::ActiveValue::Set;

use crate::dto::payload::Payload;
use crate::entity::round;
use crate::errors::AppError;
use crate::store::Patch;

#[derive(Debug, Clone, PartialEq)]
pub struct NewRound {
    pub number: i32,
    pub players: Option<i32>,
}

impl NewRound {
    pub fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        Ok(Self {
            number: payload.required("number")?,
            players: payload.required("players")?,
        })
    }
}

impl From<NewRound> for round::ActiveModel {
    fn from(new: NewRound) -> Self {
        round::ActiveModel {
            number: Set(new.number),
            players: Set(new.players),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundPatch {
    pub number: Option<i32>,
    pub players: Option<Option<i32>>,
}

impl RoundPatch {
    pub const FIELDS: &'static [&'static str] = &["number", "players"];

    pub fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        payload.only(Self::FIELDS)?;
        Ok(Self {
            number: payload.optional("number")?,
            players: payload.optional("players")?,
        })
    }
}

impl Patch<round::ActiveModel> for RoundPatch {
    fn apply(self, active: &mut round::ActiveModel) {
        if let Some(number) = self.number {
            active.number = Set(number);
        }
        if let Some(players) = self.players {
            active.players = Set(players);
        }
    }
}

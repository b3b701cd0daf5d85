use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DbErr, ModelTrait, QueryOrder};
use serde::Serialize;

use crate::entity::{deck, game, player};

/// A game with its players and decks inlined. Nested decks are flat and
/// carry no cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    pub id: i32,
    pub name: String,
    pub players: Vec<player::Model>,
    #[serde(rename = "deck")]
    pub decks: Vec<deck::Model>,
}

impl GameView {
    pub fn new(game: game::Model, players: Vec<player::Model>, decks: Vec<deck::Model>) -> Self {
        Self {
            id: game.id,
            name: game.name,
            players,
            decks,
        }
    }

    pub async fn load<C: ConnectionTrait>(db: &C, game: game::Model) -> Result<Self, DbErr> {
        let players = game
            .find_related(player::Entity)
            .order_by_asc(player::Column::Id)
            .all(db)
            .await?;
        let decks = game
            .find_related(deck::Entity)
            .order_by_asc(deck::Column::Id)
            .all(db)
            .await?;
        Ok(Self::new(game, players, decks))
    }

    /// Group already-fetched rows under their games. Children whose `game_id`
    /// matches no game are dropped.
    pub fn assemble(
        games: Vec<game::Model>,
        players: Vec<player::Model>,
        decks: Vec<deck::Model>,
    ) -> Vec<Self> {
        let mut players_by_game: HashMap<i32, Vec<player::Model>> = HashMap::new();
        for p in players {
            if let Some(game_id) = p.game_id {
                players_by_game.entry(game_id).or_default().push(p);
            }
        }

        let mut decks_by_game: HashMap<i32, Vec<deck::Model>> = HashMap::new();
        for d in decks {
            if let Some(game_id) = d.game_id {
                decks_by_game.entry(game_id).or_default().push(d);
            }
        }

        games
            .into_iter()
            .map(|g| {
                let players = players_by_game.remove(&g.id).unwrap_or_default();
                let decks = decks_by_game.remove(&g.id).unwrap_or_default();
                Self::new(g, players, decks)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player(id: i32, game_id: Option<i32>) -> player::Model {
        player::Model {
            id,
            name: format!("p{id}"),
            score: None,
            is_winner: false,
            round_id: None,
            game_id,
        }
    }

    #[test]
    fn assemble_groups_children_by_game() {
        let games = vec![
            game::Model { id: 1, name: "a".into() },
            game::Model { id: 2, name: "b".into() },
        ];
        let players = vec![player(1, Some(1)), player(2, Some(2)), player(3, Some(1)), player(4, None)];
        let decks = vec![deck::Model { id: 5, shuffled: true, game_id: Some(2) }];

        let views = GameView::assemble(games, players, decks);

        assert_eq!(views.len(), 2);
        let ids: Vec<i32> = views[0].players.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(views[0].decks.is_empty());
        assert_eq!(views[1].players.len(), 1);
        assert_eq!(views[1].decks.len(), 1);
    }

    #[test]
    fn decks_serialize_under_singular_key() {
        let view = GameView::new(game::Model { id: 1, name: "a".into() }, vec![], vec![]);
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({ "id": 1, "name": "a", "players": [], "deck": [] })
        );
    }
}

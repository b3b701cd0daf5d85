use actix_web::{delete, get, patch, post, web, HttpResponse};
use sea_orm::{ActiveModelTrait, TransactionTrait};
use serde_json::Value;
use tracing::info;

use super::{deleted, found};
use crate::config::AppConfig;
use crate::dto::game_request::{GamePatch, NewGame};
use crate::dto::{GameView, Payload};
use crate::entity::{deck, game, player};
use crate::errors::AppError;
use crate::store::{attach, Store};

/// Create a game and move the listed players and decks into it.
#[post("/game")]
pub async fn create_game(
    store: web::Data<Store>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let payload = Payload::from_json(body.into_inner())?;
    let new_game = NewGame::from_payload(&payload)?;

    let txn = store.connection().begin().await?;
    let game = new_game.active_model().insert(&txn).await?;
    attach::<player::Entity, _>(&txn, player::Column::GameId, game.id, &new_game.player_ids).await?;
    attach::<deck::Entity, _>(&txn, deck::Column::GameId, game.id, &new_game.deck_ids).await?;
    let view = GameView::load(&txn, game).await?;
    txn.commit().await?;

    info!(
        game_id = view.id,
        players = view.players.len(),
        decks = view.decks.len(),
        "game created"
    );

    Ok(HttpResponse::Ok().json(view))
}

#[get("/game")]
pub async fn get_games(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let games = store.get_all::<game::Entity>().await?;
    let players = store.get_all::<player::Entity>().await?;
    let decks = store.get_all::<deck::Entity>().await?;

    Ok(HttpResponse::Ok().json(GameView::assemble(games, players, decks)))
}

#[get("/game/{id}")]
pub async fn get_game(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let view = match store.get_by_id::<game::Entity>(id).await? {
        Some(game) => Some(GameView::load(store.connection(), game).await?),
        None => None,
    };
    found::<game::Entity, _>(view, id, &config)
}

#[patch("/game/{id}")]
pub async fn update_game(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload = Payload::from_json(body.into_inner())?;
    let patch = GamePatch::from_payload(&payload)?;

    let view = match store.update_fields::<game::Entity, _>(id, patch).await? {
        Some(game) => Some(GameView::load(store.connection(), game).await?),
        None => None,
    };
    found::<game::Entity, _>(view, id, &config)
}

/// Players and decks of a deleted game keep their `game_id`.
#[delete("/game/{id}")]
pub async fn delete_game(
    store: web::Data<Store>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let removed = store.delete_by_id::<game::Entity>(id).await?;
    info!(game_id = id, removed, "game deleted");
    Ok(deleted(id))
}

use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::{deleted, found};
use crate::config::AppConfig;
use crate::dto::player_request::{NewPlayer, PlayerPatch};
use crate::dto::Payload;
use crate::entity::player;
use crate::errors::AppError;
use crate::store::Store;

#[post("/player")]
pub async fn create_player(
    store: web::Data<Store>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let payload = Payload::from_json(body.into_inner())?;
    let new_player = NewPlayer::from_payload(&payload)?;

    let player = store.create(player::ActiveModel::from(new_player)).await?;
    info!(player_id = player.id, "player created");

    Ok(HttpResponse::Ok().json(player))
}

#[get("/player")]
pub async fn get_players(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let players = store.get_all::<player::Entity>().await?;
    Ok(HttpResponse::Ok().json(players))
}

#[get("/player/{id}")]
pub async fn get_player(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let player = store.get_by_id::<player::Entity>(id).await?;
    found::<player::Entity, _>(player, id, &config)
}

/// Partial update restricted to the player's writable columns.
#[patch("/player/{id}")]
pub async fn update_player(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload = Payload::from_json(body.into_inner())?;
    let patch = PlayerPatch::from_payload(&payload)?;

    let player = store.update_fields::<player::Entity, _>(id, patch).await?;
    found::<player::Entity, _>(player, id, &config)
}

#[delete("/player/{id}")]
pub async fn delete_player(
    store: web::Data<Store>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let removed = store.delete_by_id::<player::Entity>(id).await?;
    info!(player_id = id, removed, "player deleted");
    Ok(deleted(id))
}

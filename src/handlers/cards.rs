use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::{deleted, found};
use crate::config::AppConfig;
use crate::dto::card_request::{NewCard, CardPatch};
use crate::dto::Payload;
use crate::entity::card;
use crate::errors::AppError;
use crate::store::Store;

/// `deck_id` is stored as given; the deck need not exist.
#[post("/card")]
pub async fn create_card(
    store: web::Data<Store>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let payload = Payload::from_json(body.into_inner())?;
    let new_card = NewCard::from_payload(&payload)?;

    let card = store.create(card::ActiveModel::from(new_card)).await?;
    info!(card_id = card.id, "card created");

    Ok(HttpResponse::Ok().json(card))
}

#[get("/card")]
pub async fn get_cards(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let cards = store.get_all::<card::Entity>().await?;
    Ok(HttpResponse::Ok().json(cards))
}

#[get("/card/{id}")]
pub async fn get_card(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let card = store.get_by_id::<card::Entity>(id).await?;
    found::<card::Entity, _>(card, id, &config)
}

#[patch("/card/{id}")]
pub async fn update_card(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload = Payload::from_json(body.into_inner())?;
    let patch = CardPatch::from_payload(&payload)?;

    let card = store.update_fields::<card::Entity, _>(id, patch).await?;
    found::<card::Entity, _>(card, id, &config)
}

#[delete("/card/{id}")]
pub async fn delete_card(
    store: web::Data<Store>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let removed = store.delete_by_id::<card::Entity>(id).await?;
    info!(card_id = id, removed, "card deleted");
    Ok(deleted(id))
}

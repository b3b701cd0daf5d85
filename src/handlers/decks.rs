use actix_web::{delete, get, patch, post, web, HttpResponse};
use sea_orm::{ActiveModelTrait, TransactionTrait};
use serde_json::Value;
use tracing::info;

use super::{deleted, found};
use crate::config::AppConfig;
use crate::dto::deck_request::{DeckPatch, NewDeck};
use crate::dto::{DeckView, Payload};
use crate::entity::{card, deck};
use crate::errors::AppError;
use crate::store::{attach, Store};

#[post("/deck")]
pub async fn create_deck(
    store: web::Data<Store>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let payload = Payload::from_json(body.into_inner())?;
    let new_deck = NewDeck::from_payload(&payload)?;

    let txn = store.connection().begin().await?;
    let deck = new_deck.active_model().insert(&txn).await?;
    attach::<card::Entity, _>(&txn, card::Column::DeckId, deck.id, &new_deck.card_ids).await?;
    let view = DeckView::load(&txn, deck).await?;
    txn.commit().await?;

    info!(deck_id = view.id, cards = view.cards.len(), "deck created");

    Ok(HttpResponse::Ok().json(view))
}

#[get("/deck")]
pub async fn get_decks(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let decks = store.get_all::<deck::Entity>().await?;
    let cards = store.get_all::<card::Entity>().await?;

    Ok(HttpResponse::Ok().json(DeckView::assemble(decks, cards)))
}

#[get("/deck/{id}")]
pub async fn get_deck(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let view = match store.get_by_id::<deck::Entity>(id).await? {
        Some(deck) => Some(DeckView::load(store.connection(), deck).await?),
        None => None,
    };
    found::<deck::Entity, _>(view, id, &config)
}

#[patch("/deck/{id}")]
pub async fn update_deck(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload = Payload::from_json(body.into_inner())?;
    let patch = DeckPatch::from_payload(&payload)?;

    let view = match store.update_fields::<deck::Entity, _>(id, patch).await? {
        Some(deck) => Some(DeckView::load(store.connection(), deck).await?),
        None => None,
    };
    found::<deck::Entity, _>(view, id, &config)
}

/// Cards of a deleted deck keep their `deck_id`.
#[delete("/deck/{id}")]
pub async fn delete_deck(
    store: web::Data<Store>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let removed = store.delete_by_id::<deck::Entity>(id).await?;
    info!(deck_id = id, removed, "deck deleted");
    Ok(deleted(id))
}

use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::{deleted, found};
use crate::config::AppConfig;
use crate::dto::round_request::{NewRound, RoundPatch};
use crate::dto::Payload;
use crate::entity::round;
use crate::errors::AppError;
use crate::store::Store;

#[post("/round")]
pub async fn create_round(
    store: web::Data<Store>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let payload = Payload::from_json(body.into_inner())?;
    let new_round = NewRound::from_payload(&payload)?;

    let round = store.create(round::ActiveModel::from(new_round)).await?;
    info!(round_id = round.id, "round created");

    Ok(HttpResponse::Ok().json(round))
}

#[get("/round")]
pub async fn get_rounds(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let rounds = store.get_all::<round::Entity>().await?;
    Ok(HttpResponse::Ok().json(rounds))
}

#[get("/round/{id}")]
pub async fn get_round(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let round = store.get_by_id::<round::Entity>(id).await?;
    found::<round::Entity, _>(round, id, &config)
}

#[patch("/round/{id}")]
pub async fn update_round(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload = Payload::from_json(body.into_inner())?;
    let patch = RoundPatch::from_payload(&payload)?;

    let round = store.update_fields::<round::Entity, _>(id, patch).await?;
    found::<round::Entity, _>(round, id, &config)
}

#[delete("/round/{id}")]
pub async fn delete_round(
    store: web::Data<Store>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let removed = store.delete_by_id::<round::Entity>(id).await?;
    info!(round_id = id, removed, "round deleted");
    Ok(deleted(id))
}

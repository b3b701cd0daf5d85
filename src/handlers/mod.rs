pub mod cards;
pub mod decks;
pub mod games;
pub mod players;
pub mod rounds;

use actix_web::{get, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::store::Table;

#[get("/")]
pub async fn hello() -> impl Responder {
    "Hello world!"
}

/// Respond with a looked-up entity. A missing row is `200 {}` unless the
/// service runs with strict not-found handling.
pub(crate) fn found<E: Table, T: Serialize>(
    entity: Option<T>,
    id: i32,
    config: &AppConfig,
) -> Result<HttpResponse, AppError> {
    match entity {
        Some(entity) => Ok(HttpResponse::Ok().json(entity)),
        None if config.strict_not_found => Err(AppError::NotFound {
            resource: E::RESOURCE,
            id,
        }),
        None => Ok(HttpResponse::Ok().json(json!({}))),
    }
}

/// Deletes echo the requested id whether or not a row existed.
pub(crate) fn deleted(id: i32) -> HttpResponse {
    HttpResponse::Ok().json(id.to_string())
}

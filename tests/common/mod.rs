#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use midnight_backend::{connect_and_migrate, AppConfig, Store};
use serde_json::Value;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

pub fn init_tracing_for_tests() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,midnight_backend=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration pointing at a private in-memory SQLite database. One pooled
/// connection keeps every query on the same database.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::for_database("sqlite::memory:");
    config.max_connections = Some(1);
    config
}

/// A freshly migrated, empty store for a single test
pub async fn test_store(config: &AppConfig) -> Store {
    init_tracing_for_tests();
    connect_and_migrate(config)
        .await
        .expect("in-memory database should connect and migrate")
}

/// Call the service and decode the body as JSON (`Null` when it is not JSON).
pub async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(app, req).await;
    let status = res.status();
    let body = test::read_body(res).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub fn post(uri: &str, body: Value) -> TestRequest {
    TestRequest::post().uri(uri).set_json(body)
}

pub fn patch(uri: &str, body: Value) -> TestRequest {
    TestRequest::patch().uri(uri).set_json(body)
}

pub fn get(uri: &str) -> TestRequest {
    TestRequest::get().uri(uri)
}

pub fn delete(uri: &str) -> TestRequest {
    TestRequest::delete().uri(uri)
}

pub fn id_of(entity: &Value) -> i64 {
    entity["id"].as_i64().expect("entity should carry a numeric id")
}

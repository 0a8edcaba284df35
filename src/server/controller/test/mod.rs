use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router, state::AppState};

mod people;
mod sitemap;

/// Sends a request through the full application stack and decodes the JSON body.
///
/// Bodies that are empty or not JSON (e.g. extractor rejections) decode to `Value::Null`.
async fn send(db: &DatabaseConnection, method: Method, uri: &str) -> (StatusCode, Value) {
    let app = router::app(AppState::new(db.clone()));

    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

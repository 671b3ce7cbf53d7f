#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use doghouse_api::auth::jwt::{generate_access_token, JwtConfig};
use doghouse_api::config::ServerConfig;
use doghouse_api::router::build_app_router;
use doghouse_api::state::AppState;
use doghouse_core::breeds::BreedCatalog;
use doghouse_core::roles::WORKER_GROUP;
use doghouse_core::types::DbId;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        breeds_path: manifest_dir.join("../../resources/dog_breeds.json"),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and the bundled breed catalog.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let breeds = BreedCatalog::load(&config.breeds_path).expect("bundled breed catalog");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        breeds: Arc::new(breeds),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn token_for(user_id: DbId, groups: &[&str]) -> String {
    let groups: Vec<String> = groups.iter().map(|g| g.to_string()).collect();
    generate_access_token(user_id, &groups, &test_config().jwt).expect("token generation")
}

pub fn worker_token(user_id: DbId) -> String {
    token_for(user_id, &[WORKER_GROUP])
}

pub fn user_token(user_id: DbId) -> String {
    token_for(user_id, &["volunteers"])
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

/// POST a body that is sent verbatim, for requests that are not valid JSON.
pub async fn post_raw_auth(app: Router, uri: &str, body: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A payload that passes every validation rule.
pub fn pluto() -> serde_json::Value {
    serde_json::json!({
        "name": "Pluto",
        "breed": "Great Dane",
        "sex": "M",
        "birth_date": "2019-04-02",
        "entry_date": "2020-01-15",
        "neutered": true,
        "description": "Loves long walks.",
        "estimated_adult_size": "XL",
        "picture": "https://i.imgur.com/pluto.png",
    })
}

/// Create a dog through the API as a worker and return its id.
pub async fn create_dog(pool: &PgPool, body: serde_json::Value) -> DbId {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/dogs", body, &worker_token(999)).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

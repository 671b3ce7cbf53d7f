//! Liveness report for load balancers and operators.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use doghouse_db::repositories::DogRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the catalog table answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Dogs currently in the catalog; absent when the database is down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dog_count: Option<i64>,
    /// Breeds loaded from `BREEDS_PATH` at startup.
    pub breed_count: usize,
}

/// GET /health
///
/// Answers 200 while the dog catalog is readable and 503 otherwise, so a
/// load balancer can drain an instance that lost its database.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let dog_count = match DogRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not read the dog catalog");
            None
        }
    };
    let db_healthy = dog_count.is_some();

    let (code, status) = if db_healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        dog_count,
        breed_count: state.breeds.len(),
    };
    (code, Json(report))
}

/// Routes mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

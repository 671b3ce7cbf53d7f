//! Handlers for the caller's favourite dogs.
//!
//! The user is always taken from the bearer token; no route accepts a user
//! id, so callers can only see and change their own favourites.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use doghouse_core::favourites::{
    add_favourite, get_favourite, list_favourites, remove_favourite, RawDogId,
};
use doghouse_core::types::DbId;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::stores::PgFavouriteStore;

#[derive(Debug, Serialize)]
pub struct FavouriteStatus {
    pub dog_id: DbId,
    pub favourited: bool,
}

/// GET /api/v1/favourite-dogs
pub async fn list(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let store = PgFavouriteStore::new(&state.pool);
    let dogs = list_favourites(&store, user.user_id).await?;

    Ok(Json(DataResponse { data: dogs }))
}

/// POST /api/v1/favourite-dogs
///
/// The body is read as raw JSON so that a missing, null or malformed
/// `dog_id` (or a body that is not an object at all) maps to `MISSING_ID` /
/// `INVALID_ID` rather than a deserialization failure.
pub async fn add(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<impl IntoResponse> {
    let store = PgFavouriteStore::new(&state.pool);
    let dog_id = add_favourite(&store, user.user_id, RawDogId::Json(body.get("dog_id"))).await?;

    tracing::info!(dog_id, user_id = user.user_id, "Dog added to favourites");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: FavouriteStatus {
                dog_id,
                favourited: true,
            },
        }),
    ))
}

/// GET /api/v1/favourite-dogs/{dog_id}
pub async fn get(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    PathParam(raw_dog_id): PathParam<String>,
) -> AppResult<impl IntoResponse> {
    let store = PgFavouriteStore::new(&state.pool);
    let dog = get_favourite(&store, user.user_id, RawDogId::Segment(&raw_dog_id)).await?;

    Ok(Json(DataResponse { data: dog }))
}

/// DELETE /api/v1/favourite-dogs/{dog_id}
pub async fn remove(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    PathParam(raw_dog_id): PathParam<String>,
) -> AppResult<StatusCode> {
    let store = PgFavouriteStore::new(&state.pool);
    let dog_id = remove_favourite(&store, user.user_id, RawDogId::Segment(&raw_dog_id)).await?;

    tracing::info!(dog_id, user_id = user.user_id, "Dog removed from favourites");

    Ok(StatusCode::NO_CONTENT)
}

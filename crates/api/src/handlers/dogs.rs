//! Handlers for the dog catalog.
//!
//! Reads are public. Create, update and delete require a doghouse worker
//! and run the full field validation before touching the database.
//!
//! Write handlers hold the body and path as raw extractions and only look at
//! them after [`authorize`], so a non-worker gets 403 whatever they sent.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use doghouse_core::dog::{validate_dog_now, DogPayload};
use doghouse_core::dog_query::{compose, DogFilters};
use doghouse_core::error::CoreError;
use doghouse_core::favourites::RawDogId;
use doghouse_core::roles::DogOperation;
use doghouse_core::types::DbId;
use doghouse_db::repositories::DogRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::middleware::rbac::{authorize, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

fn dog_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Dog", id })
}

fn dog_id(raw: &str) -> AppResult<DbId> {
    Ok(RawDogId::Segment(raw).parse()?)
}

fn dog_payload(body: AppResult<JsonBody<Value>>) -> AppResult<DogPayload> {
    let JsonBody(body) = body?;
    Ok(DogPayload::from_value(&body)?)
}

/// GET /api/v1/dogs
///
/// List dogs, optionally filtered by breed, size and birth year range.
pub async fn list_dogs(
    State(state): State<AppState>,
    Query(filters): Query<DogFilters>,
) -> AppResult<impl IntoResponse> {
    let query = compose(&filters)?;
    let dogs = DogRepo::list(&state.pool, &query).await?;

    Ok(Json(DataResponse { data: dogs }))
}

/// GET /api/v1/dogs/{id}
pub async fn get_dog(
    State(state): State<AppState>,
    PathParam(raw_id): PathParam<String>,
) -> AppResult<impl IntoResponse> {
    let id = dog_id(&raw_id)?;
    let dog = DogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| dog_not_found(id))?;

    Ok(Json(DataResponse { data: dog }))
}

/// POST /api/v1/dogs
pub async fn create_dog(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    body: AppResult<JsonBody<Value>>,
) -> AppResult<impl IntoResponse> {
    authorize(&user, DogOperation::Create)?;
    let payload = dog_payload(body)?;
    let valid = validate_dog_now(&payload, &state.breeds)?;

    let dog = DogRepo::create(&state.pool, &valid).await?;

    tracing::info!(dog_id = dog.id, user_id = user.user_id, breed = %dog.breed, "Dog created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: dog })))
}

/// PUT /api/v1/dogs/{id}
///
/// Full replacement; omitted optional fields fall back to their defaults.
pub async fn update_dog(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    PathParam(raw_id): PathParam<String>,
    body: AppResult<JsonBody<Value>>,
) -> AppResult<impl IntoResponse> {
    authorize(&user, DogOperation::Update)?;
    let id = dog_id(&raw_id)?;
    let payload = dog_payload(body)?;
    let valid = validate_dog_now(&payload, &state.breeds)?;

    let dog = DogRepo::update(&state.pool, id, &valid)
        .await?
        .ok_or_else(|| dog_not_found(id))?;

    tracing::info!(dog_id = id, user_id = user.user_id, "Dog updated");

    Ok(Json(DataResponse { data: dog }))
}

/// DELETE /api/v1/dogs/{id}
///
/// Removes the dog together with every user's favourite relation to it.
pub async fn delete_dog(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    PathParam(raw_id): PathParam<String>,
) -> AppResult<StatusCode> {
    authorize(&user, DogOperation::Destroy)?;
    let id = dog_id(&raw_id)?;

    if !DogRepo::delete(&state.pool, id).await? {
        return Err(dog_not_found(id));
    }

    tracing::info!(dog_id = id, user_id = user.user_id, "Dog deleted");

    Ok(StatusCode::NO_CONTENT)
}

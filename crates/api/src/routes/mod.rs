pub mod dogs;
pub mod favourites;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dogs                          list (public), create (worker)
/// /dogs/{id}                     get (public), update, delete (worker)
///
/// /favourite-dogs                list, add (requires auth)
/// /favourite-dogs/{dog_id}       get, remove (requires auth)
///
/// /role                          caller's role (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dogs", dogs::router())
        .nest("/favourite-dogs", favourites::router())
        .route("/role", get(handlers::role::get_role))
}

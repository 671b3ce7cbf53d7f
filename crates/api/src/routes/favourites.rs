use axum::routing::get;
use axum::Router;

use crate::handlers::favourites;
use crate::state::AppState;

/// Favourite routes mounted at `/favourite-dogs`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> add
/// GET    /{dog_id}    -> get
/// DELETE /{dog_id}    -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(favourites::list).post(favourites::add))
        .route(
            "/{dog_id}",
            get(favourites::get).delete(favourites::remove),
        )
}

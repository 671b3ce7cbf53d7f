//! Role-based access control.
//!
//! Dog catalog reads are public and need no extractor. Writes take a
//! [`RequireAuth`] and pass the caller through [`authorize`], which rejects
//! non-workers with 403 before the payload is looked at.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use doghouse_core::error::CoreError;
use doghouse_core::roles::{permits, DogOperation};

use super::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Requires any authenticated caller.
///
/// Functionally equivalent to [`AuthUser`] but named explicitly so route
/// handlers read as "this route requires authentication".
///
/// ```ignore
/// async fn any_authed(RequireAuth(user): RequireAuth) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}

/// Reject `user` with 403 Forbidden unless their role permits `operation`.
pub fn authorize(user: &AuthUser, operation: DogOperation) -> AppResult<()> {
    if permits(Some(user.role()), operation) {
        Ok(())
    } else {
        tracing::debug!(user_id = user.user_id, ?operation, "Dog operation denied");
        Err(AppError::Core(CoreError::Forbidden(
            "Doghouse worker role required".into(),
        )))
    }
}

//! Handler reporting the caller's permission tier.

use axum::Json;
use doghouse_core::roles::Role;
use serde::Serialize;

use crate::middleware::rbac::RequireAuth;

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role: Role,
}

/// GET /api/v1/role
///
/// `{"role": "doghouse-worker"}` for workers, `{"role": "user"}` otherwise.
pub async fn get_role(RequireAuth(user): RequireAuth) -> Json<RoleResponse> {
    Json(RoleResponse { role: user.role() })
}

//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the caller from a JWT Bearer token.
//! - [`rbac::RequireAuth`] -- Requires any authenticated caller.
//! - [`rbac::authorize`] -- Checks a caller against a dog catalog operation.

pub mod auth;
pub mod rbac;

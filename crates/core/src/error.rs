use serde::Serialize;

use crate::types::DbId;

/// A single field-level rule violation on a dog payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Every rule violation found on a candidate record, not just the first.
    #[error("Validation failed on {} field(s)", .0.len())]
    InvalidFields(Vec<FieldViolation>),

    #[error("Dog {dog_id} is already in favourites")]
    AlreadyFavourited { dog_id: DbId },

    #[error("Dog {dog_id} is not in favourites")]
    NotFavourited { dog_id: DbId },

    #[error("Missing dog id")]
    MissingId,

    #[error("Invalid dog id: {0}")]
    InvalidId(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

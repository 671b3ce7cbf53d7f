//! Favourite relation model.

use doghouse_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `favourite_dogs` table. Unique per (user_id, dog_id).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FavouriteDog {
    pub id: DbId,
    pub user_id: DbId,
    pub dog_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

//! Dog model.

use chrono::NaiveDate;
use doghouse_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `dogs` table.
///
/// `sex` and `estimated_adult_size` hold the short codes (`"M"`, `"XL"`);
/// the table's CHECK constraints keep them within the enumerations.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dog {
    pub id: DbId,
    pub name: String,
    pub breed: String,
    pub sex: String,
    pub birth_date: NaiveDate,
    pub entry_date: NaiveDate,
    pub neutered: bool,
    pub description: String,
    pub estimated_adult_size: String,
    pub picture: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

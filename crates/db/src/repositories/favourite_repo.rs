//! Repository for the `favourite_dogs` table.
//!
//! Every query is keyed by `user_id`; callers can only ever see or touch
//! their own relations.

use doghouse_core::types::DbId;
use sqlx::PgPool;

use crate::models::dog::Dog;
use crate::models::favourite::FavouriteDog;

/// `dogs` columns qualified with the `d` alias used in joins.
const DOG_COLUMNS: &str = "\
    d.id, d.name, d.breed, d.sex, d.birth_date, d.entry_date, d.neutered, \
    d.description, d.estimated_adult_size, d.picture, d.created_at, d.updated_at";

/// Column list for `favourite_dogs` queries.
const COLUMNS: &str = "id, user_id, dog_id, created_at, updated_at";

pub struct FavouriteRepo;

impl FavouriteRepo {
    pub async fn exists(pool: &PgPool, user_id: DbId, dog_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM favourite_dogs WHERE user_id = $1 AND dog_id = $2)",
        )
        .bind(user_id)
        .bind(dog_id)
        .fetch_one(pool)
        .await
    }

    /// Insert a relation.
    ///
    /// Returns `None` when the (user, dog) pair already exists. A missing dog
    /// surfaces as a foreign-key violation (`23503`).
    pub async fn insert(
        pool: &PgPool,
        user_id: DbId,
        dog_id: DbId,
    ) -> Result<Option<FavouriteDog>, sqlx::Error> {
        let query = format!(
            "INSERT INTO favourite_dogs (user_id, dog_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, dog_id) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FavouriteDog>(&query)
            .bind(user_id)
            .bind(dog_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a relation. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, dog_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favourite_dogs WHERE user_id = $1 AND dog_id = $2")
            .bind(user_id)
            .bind(dog_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Dogs favourited by `user_id`, in the order they were added.
    pub async fn list_dogs_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Dog>, sqlx::Error> {
        let query = format!(
            "SELECT {DOG_COLUMNS} FROM favourite_dogs f \
             JOIN dogs d ON d.id = f.dog_id \
             WHERE f.user_id = $1 \
             ORDER BY f.created_at, f.id"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// A single dog, only if `user_id` has favourited it.
    pub async fn find_dog_for_user(
        pool: &PgPool,
        user_id: DbId,
        dog_id: DbId,
    ) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!(
            "SELECT {DOG_COLUMNS} FROM favourite_dogs f \
             JOIN dogs d ON d.id = f.dog_id \
             WHERE f.user_id = $1 AND f.dog_id = $2"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(user_id)
            .bind(dog_id)
            .fetch_optional(pool)
            .await
    }
}

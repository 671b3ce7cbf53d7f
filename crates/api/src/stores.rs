//! Postgres-backed implementation of the favourites storage seam.

use doghouse_core::favourites::{FavouriteStore, InsertOutcome};
use doghouse_core::types::DbId;
use doghouse_db::models::dog::Dog;
use doghouse_db::repositories::{DogRepo, FavouriteRepo};
use sqlx::PgPool;

use crate::error::AppError;

/// PostgreSQL foreign key violation.
const FK_VIOLATION: &str = "23503";

/// Adapts [`DogRepo`] and [`FavouriteRepo`] to [`FavouriteStore`].
pub struct PgFavouriteStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PgFavouriteStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

impl FavouriteStore for PgFavouriteStore<'_> {
    type Dog = Dog;
    type Error = AppError;

    async fn dog_exists(&self, dog_id: DbId) -> Result<bool, AppError> {
        Ok(DogRepo::exists(self.pool, dog_id).await?)
    }

    async fn favourite_exists(&self, user_id: DbId, dog_id: DbId) -> Result<bool, AppError> {
        Ok(FavouriteRepo::exists(self.pool, user_id, dog_id).await?)
    }

    async fn insert_favourite(
        &self,
        user_id: DbId,
        dog_id: DbId,
    ) -> Result<InsertOutcome, AppError> {
        match FavouriteRepo::insert(self.pool, user_id, dog_id).await {
            Ok(Some(_)) => Ok(InsertOutcome::Inserted),
            Ok(None) => Ok(InsertOutcome::Duplicate),
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some(FK_VIOLATION) => {
                Ok(InsertOutcome::DogMissing)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_favourite(&self, user_id: DbId, dog_id: DbId) -> Result<bool, AppError> {
        Ok(FavouriteRepo::delete(self.pool, user_id, dog_id).await?)
    }

    async fn list_favourite_dogs(&self, user_id: DbId) -> Result<Vec<Dog>, AppError> {
        Ok(FavouriteRepo::list_dogs_for_user(self.pool, user_id).await?)
    }

    async fn find_favourite_dog(
        &self,
        user_id: DbId,
        dog_id: DbId,
    ) -> Result<Option<Dog>, AppError> {
        Ok(FavouriteRepo::find_dog_for_user(self.pool, user_id, dog_id).await?)
    }
}

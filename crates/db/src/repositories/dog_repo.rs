//! Repository for the `dogs` table.

use doghouse_core::dog::ValidDog;
use doghouse_core::dog_query::DogQuery;
use doghouse_core::types::DbId;
use sqlx::PgPool;

use crate::models::dog::Dog;

/// Column list for `dogs` queries.
const COLUMNS: &str = "\
    id, name, breed, sex, birth_date, entry_date, neutered, description, \
    estimated_adult_size, picture, created_at, updated_at";

/// Provides CRUD operations for dogs.
pub struct DogRepo;

impl DogRepo {
    /// Insert a validated dog, returning the created row.
    pub async fn create(pool: &PgPool, dog: &ValidDog) -> Result<Dog, sqlx::Error> {
        let query = format!(
            "INSERT INTO dogs \
                 (name, breed, sex, birth_date, entry_date, neutered, description, \
                  estimated_adult_size, picture) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(&dog.name)
            .bind(&dog.breed)
            .bind(dog.sex.as_str())
            .bind(dog.birth_date)
            .bind(dog.entry_date)
            .bind(dog.neutered)
            .bind(&dog.description)
            .bind(dog.estimated_adult_size.as_str())
            .bind(&dog.picture)
            .fetch_one(pool)
            .await
    }

    /// Find a dog by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE id = $1");
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a dog exists without fetching the row.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM dogs WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Total number of dogs in the catalog.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dogs")
            .fetch_one(pool)
            .await
    }

    /// List dogs matching every constraint in `filter`, ordered by ID.
    ///
    /// Birth-date bounds compare on the calendar year only.
    pub async fn list(pool: &PgPool, filter: &DogQuery) -> Result<Vec<Dog>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 0;

        if filter.breed.is_some() {
            param_idx += 1;
            conditions.push(format!("breed = ${param_idx}"));
        }
        if filter.estimated_adult_size.is_some() {
            param_idx += 1;
            conditions.push(format!("estimated_adult_size = ${param_idx}"));
        }
        if filter.min_birth_year.is_some() {
            param_idx += 1;
            conditions.push(format!(
                "EXTRACT(YEAR FROM birth_date)::int >= ${param_idx}"
            ));
        }
        if filter.max_birth_year.is_some() {
            param_idx += 1;
            conditions.push(format!(
                "EXTRACT(YEAR FROM birth_date)::int <= ${param_idx}"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {COLUMNS} FROM dogs {where_clause} ORDER BY id");
        let mut q = sqlx::query_as::<_, Dog>(&query);

        if let Some(ref breed) = filter.breed {
            q = q.bind(breed);
        }
        if let Some(ref size) = filter.estimated_adult_size {
            q = q.bind(size);
        }
        if let Some(min) = filter.min_birth_year {
            q = q.bind(min);
        }
        if let Some(max) = filter.max_birth_year {
            q = q.bind(max);
        }

        q.fetch_all(pool).await
    }

    /// Replace every field of a dog. Returns `None` if no row has `id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dog: &ValidDog,
    ) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!(
            "UPDATE dogs SET \
                 name = $2, breed = $3, sex = $4, birth_date = $5, entry_date = $6, \
                 neutered = $7, description = $8, estimated_adult_size = $9, picture = $10 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .bind(&dog.name)
            .bind(&dog.breed)
            .bind(dog.sex.as_str())
            .bind(dog.birth_date)
            .bind(dog.entry_date)
            .bind(dog.neutered)
            .bind(&dog.description)
            .bind(dog.estimated_adult_size.as_str())
            .bind(&dog.picture)
            .fetch_optional(pool)
            .await
    }

    /// Delete a dog. Its favourite relations go with it (`ON DELETE CASCADE`).
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

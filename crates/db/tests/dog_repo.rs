//! Integration tests for the dog catalog repository.

use chrono::NaiveDate;
use doghouse_core::dog::{AdultSize, Sex, ValidDog};
use doghouse_core::dog_query::{compose, DogFilters, DogQuery};
use doghouse_db::repositories::DogRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_dog(name: &str, breed: &str, size: AdultSize, birth: NaiveDate) -> ValidDog {
    ValidDog {
        name: name.to_string(),
        breed: breed.to_string(),
        sex: Sex::Female,
        birth_date: birth,
        entry_date: birth,
        neutered: false,
        description: "Friendly".to_string(),
        estimated_adult_size: size,
        picture: "https://i.imgur.com/dog.jpg".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: PgPool) {
    doghouse_db::health_check(&pool).await.unwrap();

    let created = DogRepo::create(
        &pool,
        &new_dog("Pluto", "Great Dane", AdultSize::ExtraLarge, date(2019, 4, 2)),
    )
    .await
    .unwrap();
    assert_eq!(created.sex, "F");
    assert_eq!(created.estimated_adult_size, "XL");

    let found = DogRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Pluto");
    assert!(DogRepo::exists(&pool, created.id).await.unwrap());
    assert!(!DogRepo::exists(&pool, created.id + 1000).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_unfiltered_returns_all(pool: PgPool) {
    for name in ["Pluto", "Goku", "Rex"] {
        DogRepo::create(&pool, &new_dog(name, "Akita", AdultSize::Medium, date(2020, 1, 1)))
            .await
            .unwrap();
    }
    let all = DogRepo::list(&pool, &DogQuery::default()).await.unwrap();
    let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Pluto", "Goku", "Rex"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_birth_year(pool: PgPool) {
    for year in [2011, 2013, 2018, 2020] {
        DogRepo::create(
            &pool,
            &new_dog(&format!("Dog{year}"), "Akita", AdultSize::Medium, date(year, 6, 1)),
        )
        .await
        .unwrap();
    }

    let query = compose(&DogFilters {
        birth_date_gte: Some("2013".into()),
        birth_date_lte: Some("2019".into()),
        ..Default::default()
    })
    .unwrap();
    let dogs = DogRepo::list(&pool, &query).await.unwrap();
    let names: Vec<&str> = dogs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Dog2013", "Dog2018"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_combines_exact_filters(pool: PgPool) {
    let born = date(2016, 1, 1);
    DogRepo::create(&pool, &new_dog("Big", "Great Dane", AdultSize::ExtraLarge, born))
        .await
        .unwrap();
    DogRepo::create(&pool, &new_dog("Mid", "Great Dane", AdultSize::Large, born))
        .await
        .unwrap();
    DogRepo::create(&pool, &new_dog("Other", "Akita", AdultSize::ExtraLarge, born))
        .await
        .unwrap();

    let query = DogQuery {
        breed: Some("Great Dane".into()),
        estimated_adult_size: Some("XL".into()),
        ..Default::default()
    };
    let dogs = DogRepo::list(&pool, &query).await.unwrap();
    assert_eq!(dogs.len(), 1);
    assert_eq!(dogs[0].name, "Big");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_fields(pool: PgPool) {
    let created = DogRepo::create(
        &pool,
        &new_dog("Pluto", "Akita", AdultSize::Small, date(2020, 1, 1)),
    )
    .await
    .unwrap();

    let mut changed = new_dog("Pluto", "Akita", AdultSize::Large, date(2020, 1, 1));
    changed.neutered = true;
    let updated = DogRepo::update(&pool, created.id, &changed)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.estimated_adult_size, "L");
    assert!(updated.neutered);
    assert!(updated.updated_at >= created.updated_at);

    let missing = DogRepo::update(&pool, created.id + 1000, &changed).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_check_constraint_rejects_bad_size(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO dogs (breed, sex, birth_date, entry_date, estimated_adult_size, picture) \
         VALUES ('Akita', 'M', '2020-01-01', '2020-01-01', 'XXL', 'https://i.imgur.com/a.jpg')",
    )
    .execute(&pool)
    .await;
    let err = result.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete(pool: PgPool) {
    let created = DogRepo::create(
        &pool,
        &new_dog("Pluto", "Akita", AdultSize::Small, date(2020, 1, 1)),
    )
    .await
    .unwrap();
    assert!(DogRepo::delete(&pool, created.id).await.unwrap());
    assert!(!DogRepo::delete(&pool, created.id).await.unwrap());
    assert!(DogRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_tracks_creates_and_deletes(pool: PgPool) {
    assert_eq!(DogRepo::count(&pool).await.unwrap(), 0);

    let first = DogRepo::create(&pool, &new_dog("Rex", "Akita", AdultSize::Large, date(2018, 1, 1)))
        .await
        .unwrap();
    DogRepo::create(&pool, &new_dog("Luna", "Akita", AdultSize::Small, date(2019, 1, 1)))
        .await
        .unwrap();
    assert_eq!(DogRepo::count(&pool).await.unwrap(), 2);

    DogRepo::delete(&pool, first.id).await.unwrap();
    assert_eq!(DogRepo::count(&pool).await.unwrap(), 1);
}

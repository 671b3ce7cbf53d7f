//! Schema-wide conventions every migration must follow.

use sqlx::PgPool;

async fn public_tables(pool: &PgPool) -> Vec<String> {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(pool)
    .await
    .unwrap();
    rows.into_iter().map(|(t,)| t).collect()
}

async fn column_type(pool: &PgPool, table: &str, column: &str) -> Option<String> {
    let row: Option<(String,)> = sqlx::query_as(
        "SELECT data_type
         FROM information_schema.columns
         WHERE table_schema = 'public' AND table_name = $1 AND column_name = $2",
    )
    .bind(table)
    .bind(column)
    .fetch_optional(pool)
    .await
    .unwrap();
    row.map(|(t,)| t)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expected_tables_exist(pool: PgPool) {
    assert_eq!(public_tables(&pool).await, vec!["dogs", "favourite_dogs"]);
}

/// Every table's `id` is a bigint surrogate key.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_ids_are_bigint(pool: PgPool) {
    for table in public_tables(&pool).await {
        let data_type = column_type(&pool, &table, "id")
            .await
            .unwrap_or_else(|| panic!("Table {table} is missing column id"));
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// Every table has `created_at` and `updated_at` as timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_timestamps(pool: PgPool) {
    for table in public_tables(&pool).await {
        for col in ["created_at", "updated_at"] {
            let data_type = column_type(&pool, &table, col)
                .await
                .unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {table}.{col} should be timestamptz, got {data_type}"
            );
        }
    }
}

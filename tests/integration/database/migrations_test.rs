//! Database migration tests

use crate::common::{create_test_pool, run_migrations};

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn test_migrations_run_successfully() {
    let pool = create_test_pool().await;
    let result = run_migrations(&pool).await;
    assert!(result.is_ok(), "Migrations should run successfully");
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn test_tables_exist() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await.unwrap();

    for table in ["users", "posts"] {
        let result = sqlx::query(&format!("SELECT 1 FROM {} LIMIT 1", table))
            .execute(&pool)
            .await;
        assert!(result.is_ok(), "{} table should exist", table);
    }
}

// src/db/categories.rs

use sqlx::SqlitePool;

use crate::models::category::Category;

/// Labels inserted into an empty store, in id order.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

pub async fn list(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn count(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await
}

#[cfg(test)]
pub async fn insert(pool: &SqlitePool, category_type: &str) -> sqlx::Result<i64> {
    let id = sqlx::query("INSERT INTO categories (type) VALUES (?1)")
        .bind(category_type)
        .execute(pool)
        .await?
        .last_insert_rowid();

    Ok(id)
}

/// Inserts [`DEFAULT_CATEGORIES`] when the table is empty.
/// Returns how many rows were written.
pub async fn seed_defaults(pool: &SqlitePool) -> sqlx::Result<usize> {
    if count(pool).await? > 0 {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for label in DEFAULT_CATEGORIES {
        sqlx::query("INSERT INTO categories (type) VALUES (?1)")
            .bind(label)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    Ok(DEFAULT_CATEGORIES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_schema, test_pool};

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let pool = test_pool().await;
        init_schema(&pool).await.unwrap();

        assert_eq!(seed_defaults(&pool).await.unwrap(), 6);
        assert_eq!(seed_defaults(&pool).await.unwrap(), 0);

        let categories = list(&pool).await.unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[3].id, 4);
        assert_eq!(categories[3].category_type, "History");
    }

    #[tokio::test]
    async fn seeding_skips_populated_table() {
        let pool = test_pool().await;
        init_schema(&pool).await.unwrap();
        insert(&pool, "Music").await.unwrap();

        assert_eq!(seed_defaults(&pool).await.unwrap(), 0);
        assert_eq!(count(&pool).await.unwrap(), 1);
    }
}

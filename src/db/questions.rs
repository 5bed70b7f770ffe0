// src/db/questions.rs

use sqlx::{SqlitePool, types::Json};

use crate::models::question::{CreateQuestionRequest, Question};

pub async fn list(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

#[cfg(test)]
pub async fn find(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &SqlitePool, new: &CreateQuestionRequest) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO questions (question, answer, category, difficulty)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&new.question)
    .bind(&new.answer)
    .bind(&new.category)
    .bind(new.difficulty)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Returns whether a row was removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Case-insensitive substring match on the question text, ordered by id.
///
/// SQLite's `LIKE` and `LOWER` only fold ASCII, so the match runs on
/// Unicode-lowercased text here instead.
pub async fn search(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    let needle = term.to_lowercase();

    Ok(list(pool)
        .await?
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect())
}

pub async fn by_category(pool: &SqlitePool, category: &str) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE category = ?1
        ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(pool)
    .await
}

/// Picks one question uniformly at random, optionally restricted to a
/// category and skipping the given ids. `None` when nothing is eligible.
///
/// The excluded ids travel as a single JSON array parameter, so the list
/// length is not bounded by SQLite's bind variable limit.
pub async fn random_pick(
    pool: &SqlitePool,
    category: Option<&str>,
    excluded: &[i64],
) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE (?1 IS NULL OR category = ?1)
          AND id NOT IN (SELECT value FROM json_each(?2))
        ORDER BY RANDOM()
        LIMIT 1
        "#,
    )
    .bind(category)
    .bind(Json(excluded))
    .fetch_optional(pool)
    .await
}

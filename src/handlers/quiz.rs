// src/handlers/quiz.rs

use axum::{Json, extract::State};
use sqlx::SqlitePool;

use crate::{
    db,
    error::{AppError, ErrorBody},
    models::quiz::{QuizRequest, QuizResponse},
    utils::extract::AppJson,
};

/// Serves the next quiz question.
///
/// * Restricts to `quiz_category.id` when a category is given.
/// * Skips every id in `previous_questions`.
/// * Picks uniformly at random among what is left; 404 once nothing is.
///
/// A `quiz_category` without an `id` is rejected as unprocessable.
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "A random unseen question", body = QuizResponse),
        (status = 404, description = "No eligible question left", body = ErrorBody),
        (status = 422, description = "Malformed quiz request, or store failure", body = ErrorBody)
    )
)]
pub async fn next_question(
    State(pool): State<SqlitePool>,
    AppJson(req): AppJson<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let category = req.category_filter();
    let excluded = req.excluded_ids();

    let question = db::questions::random_pick(&pool, category.as_deref(), excluded)
        .await
        .map_err(|e| {
            tracing::error!("Failed to pick quiz question: {:?}", e);
            AppError::Unprocessable(e.to_string())
        })?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No questions left (category: {:?}, seen: {})",
                category,
                excluded.len()
            ))
        })?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

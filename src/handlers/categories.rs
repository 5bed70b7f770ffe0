// src/handlers/categories.rs

use axum::{Json, extract::State};
use sqlx::SqlitePool;

use crate::{
    db,
    error::{AppError, ErrorBody},
    models::{
        category::{self, CategoriesResponse},
        question::FilteredQuestionsResponse,
    },
    utils::extract::AppPath,
};

/// Lists every category as an `id -> type` map.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 404, description = "No categories exist", body = ErrorBody),
        (status = 422, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = db::categories::list(&pool).await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        AppError::Unprocessable(e.to_string())
    })?;

    if categories.is_empty() {
        return Err(AppError::NotFound("No categories found".to_string()));
    }

    let categories = category::to_map(categories);

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// Lists every question of one category, unpaginated.
///
/// The category is not checked against the categories table; an unknown id
/// simply has no questions.
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    tag = "categories",
    params(("category_id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Questions in the category", body = FilteredQuestionsResponse),
        (status = 404, description = "Category has no questions", body = ErrorBody)
    )
)]
pub async fn questions_by_category(
    State(pool): State<SqlitePool>,
    AppPath(category_id): AppPath<i64>,
) -> Result<Json<FilteredQuestionsResponse>, AppError> {
    let category = category_id.to_string();
    let questions = db::questions::by_category(&pool, &category).await?;

    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions in category {}",
            category
        )));
    }

    Ok(Json(FilteredQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: Some(category),
    }))
}

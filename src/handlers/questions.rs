// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Query, State},
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    db,
    error::{AppError, ErrorBody},
    models::{
        category,
        question::{
            CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse,
            FilteredQuestionsResponse, QuestionListResponse, SearchRequest,
        },
    },
    utils::{
        extract::{AppJson, AppPath},
        pagination::{PageParams, paginate},
    },
};

/// Lists one page of questions together with the category map.
///
/// * `total_questions` counts the whole bank, not the page.
/// * A page past the end is an empty list, not an error.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(PageParams),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 404, description = "The bank is empty", body = ErrorBody),
        (status = 422, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionListResponse>, AppError> {
    let questions = db::questions::list(&pool).await.map_err(|e| {
        tracing::error!("Failed to list questions: {:?}", e);
        AppError::Unprocessable(e.to_string())
    })?;

    let categories = db::categories::list(&pool).await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        AppError::Unprocessable(e.to_string())
    })?;

    if questions.is_empty() {
        return Err(AppError::NotFound("No questions found".to_string()));
    }

    let total_questions = questions.len();

    Ok(Json(QuestionListResponse {
        success: true,
        questions: paginate(questions, params.page()),
        total_questions,
        current_category: None,
        categories: category::to_map(categories),
    }))
}

/// Deletes a question by ID and returns the first page of what is left.
///
/// A missing question answers 422, like any other failure here.
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    tag = "questions",
    params(
        ("question_id" = i64, Path, description = "Question id"),
        PageParams
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 422, description = "No such question, or store failure", body = ErrorBody)
    )
)]
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    AppPath(question_id): AppPath<i64>,
    Query(params): Query<PageParams>,
) -> Result<Json<DeleteQuestionResponse>, AppError> {
    let unprocessable = |e: sqlx::Error| {
        tracing::error!("Failed to delete question {}: {:?}", question_id, e);
        AppError::Unprocessable(e.to_string())
    };

    let removed = db::questions::delete(&pool, question_id)
        .await
        .map_err(unprocessable)?;

    if !removed {
        return Err(AppError::Unprocessable(format!(
            "Question {} not found",
            question_id
        )));
    }

    let remaining = db::questions::list(&pool).await.map_err(unprocessable)?;
    let total_questions = remaining.len();

    tracing::info!("Deleted question {}", question_id);

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: question_id,
        questions: paginate(remaining, params.page()),
        total_questions,
    }))
}

/// Creates a new question and returns the first page of the bank.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    params(PageParams),
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 400, description = "Malformed JSON", body = ErrorBody),
        (status = 422, description = "Invalid fields, or store failure", body = ErrorBody)
    )
)]
pub async fn create_question(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
    AppJson(payload): AppJson<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(validation_errors.into());
    }

    let unprocessable = |e: sqlx::Error| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::Unprocessable(e.to_string())
    };

    let created = db::questions::insert(&pool, &payload)
        .await
        .map_err(unprocessable)?;

    let questions = db::questions::list(&pool).await.map_err(unprocessable)?;
    let total_questions = questions.len();

    tracing::info!("Created question {}", created);

    Ok(Json(CreateQuestionResponse {
        success: true,
        created,
        questions: paginate(questions, params.page()),
        total_questions,
    }))
}

/// Finds questions whose text contains the search term, ignoring case.
#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "questions",
    params(PageParams),
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching questions", body = FilteredQuestionsResponse),
        (status = 404, description = "Nothing matched", body = ErrorBody)
    )
)]
pub async fn search_questions(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
    AppJson(payload): AppJson<SearchRequest>,
) -> Result<Json<FilteredQuestionsResponse>, AppError> {
    let matches = db::questions::search(&pool, &payload.search_term).await?;

    if matches.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions match '{}'",
            payload.search_term
        )));
    }

    let total_questions = matches.len();

    Ok(Json(FilteredQuestionsResponse {
        success: true,
        questions: paginate(matches, params.page()),
        total_questions,
        current_category: None,
    }))
}

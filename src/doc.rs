// src/doc.rs

use axum::Json;
use utoipa::OpenApi;

use crate::{
    error::ErrorBody,
    handlers::{categories, health, health::HealthResponse, questions, quiz},
    models::{
        category::{CategoriesResponse, Category},
        question::{
            CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse,
            FilteredQuestionsResponse, Question, QuestionListResponse, SearchRequest,
        },
        quiz::{QuizCategory, QuizRequest, QuizResponse},
    },
};

/// OpenAPI document for the trivia API, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        description = "Question bank, categories and quiz rounds."
    ),
    paths(
        categories::list_categories,
        categories::questions_by_category,
        questions::list_questions,
        questions::create_question,
        questions::delete_question,
        questions::search_questions,
        quiz::next_question,
        health::health,
    ),
    components(schemas(
        Category,
        CategoriesResponse,
        Question,
        QuestionListResponse,
        FilteredQuestionsResponse,
        CreateQuestionRequest,
        CreateQuestionResponse,
        DeleteQuestionResponse,
        SearchRequest,
        QuizCategory,
        QuizRequest,
        QuizResponse,
        HealthResponse,
        ErrorBody,
    )),
    tags(
        (name = "categories", description = "Category listing and per-category questions"),
        (name = "questions", description = "Question bank management and search"),
        (name = "quizzes", description = "Quiz rounds"),
        (name = "health", description = "Health checks")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

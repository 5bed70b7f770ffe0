// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    doc,
    error::panic_response,
    handlers::{self, categories, health, questions, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges the category, question and quiz routes.
/// * Applies global middleware (Trace, CORS, panic recovery).
/// * Injects global state (Database Pool).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let category_routes = Router::new()
        .route("/", get(categories::list_categories))
        .route(
            "/{category_id}/questions",
            get(categories::questions_by_category),
        );

    let question_routes = Router::new()
        .route(
            "/",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/search", post(questions::search_questions))
        .route("/{question_id}", delete(questions::delete_question));

    Router::new()
        .nest("/categories", category_routes)
        .nest("/questions", question_routes)
        .route("/quizzes", post(quiz::next_question))
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(doc::openapi_json))
        .fallback(handlers::not_found)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CatchPanicLayer::custom(panic_response)),
        )
        .with_state(state)
}

// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::{deserialize_number_from_string, deserialize_string_from_number};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::category::CategoryMap;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Question {
    pub id: i64,

    /// The text content of the question.
    pub question: String,

    pub answer: String,

    /// Id of the owning category, stored as text.
    /// Not checked against the categories table.
    pub category: String,

    pub difficulty: i64,
}

/// DTO for creating a new question.
///
/// `category` may be sent as a string or a number, `difficulty` as a number
/// or a numeric string.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,
    #[validate(length(min = 1, max = 1000))]
    pub answer: String,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    #[validate(length(min = 1, max = 20))]
    #[schema(value_type = String)]
    pub category: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Paginated listing of the whole question bank.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

/// Questions matching a search term or a category.
#[derive(Debug, Serialize, ToSchema)]
pub struct FilteredQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use utoipa::ToSchema;

use crate::models::question::Question;

/// Category the player picked. Only `id` is used for filtering.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i64,
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

/// DTO for requesting the next quiz question.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// Category filter as stored on questions, if one was picked.
    pub fn category_filter(&self) -> Option<String> {
        self.quiz_category.as_ref().map(|c| c.id.to_string())
    }

    /// Ids already asked this round. An empty list means none.
    pub fn excluded_ids(&self) -> &[i64] {
        self.previous_questions.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
}

// src/models/category.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i64,

    /// Display label, e.g. "Science".
    /// Mapped from the column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

/// Category id to label, serialized as a JSON object keyed by id.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn to_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    pub total_categories: usize,
}

// src/handlers/mod.rs

pub mod categories;
pub mod health;
pub mod questions;
pub mod quiz;

use crate::error::AppError;

/// Fallback for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound("no route matched".to_string())
}

// src/utils/pagination.rs

use serde::Deserialize;
use utoipa::IntoParams;

/// Fixed page size for every paginated listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// `?page=N` query string. Kept as raw text so that a malformed value falls
/// back to the first page instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number, defaults to 1.
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Returns the window `[(page-1)*10, page*10)` of `items`.
/// Pages below 1 or past the end yield an empty list.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    let Some(index) = page.checked_sub(1).and_then(|i| usize::try_from(i).ok()) else {
        return Vec::new();
    };
    let start = index.saturating_mul(QUESTIONS_PER_PAGE);

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

use axum::{
    Json,
    extract::{Query, State},
};

use crate::errors::AppError;
use crate::models::search::{SearchQuery, SearchResponse};
use crate::models::student::StudentSummary;
use crate::services::search;
use crate::state::AppState;

/// Search for a student by name
///
/// Exact full-name match first, then a substring match over first name,
/// last name and email.
#[utoipa::path(
    get,
    path = "/search",
    params(SearchQuery),
    responses(
        (status = 200, body = SearchResponse),
    ),
    tag = "search",
)]
pub async fn search_student(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    if params.query.trim().is_empty() {
        return Err(AppError::BadRequest(String::from("query must not be empty")));
    }

    let outcome = search::search_by_name(&state.db, &params.query).await?;

    Ok(Json(SearchResponse {
        success: outcome.success,
        message: outcome.message,
        student: outcome.student.map(StudentSummary::from),
        matches: outcome.matches,
    }))
}

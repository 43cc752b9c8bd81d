use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    InternalServerError(String),
    Unauthorized,
    Forbidden,
    NotFound,
    BadRequest(String),
    Conflict(String),
    DuplicateEnrollment,
    CapacityExceeded,
    TooManyRequests(u64),
    Validation(validator::ValidationErrors),
}

pub fn internal_error<E: std::fmt::Display>(err: E) -> AppError {
    tracing::error!("Internal error: {}", err);
    AppError::InternalServerError(err.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, err_msg) = match self {
            Self::InternalServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal Server Error: {}", message),
            ),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, String::from("Unauthorized")),
            Self::Forbidden => (StatusCode::FORBIDDEN, String::from("Access denied")),
            Self::NotFound => (StatusCode::NOT_FOUND, String::from("Not found")),
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                format!("Bad request error: {message}"),
            ),
            Self::Conflict(message) => (StatusCode::CONFLICT, format!("Conflict: {message}")),
            Self::DuplicateEnrollment => (
                StatusCode::CONFLICT,
                String::from("Student is already enrolled in this course"),
            ),
            Self::CapacityExceeded => (
                StatusCode::CONFLICT,
                String::from("Course has no available spots"),
            ),
            Self::TooManyRequests(retry_secs) => (
                StatusCode::TOO_MANY_REQUESTS,
                format!("Too many attempts, try again in {retry_secs} seconds"),
            ),
            Self::Validation(errors) => {
                let body = Json(json!({
                    "message": "Validation failed",
                    "errors": errors,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
        };
        (status, Json(json!({ "message": err_msg }))).into_response()
    }
}

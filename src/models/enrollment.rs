use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::entities::enrollment;
use crate::entities::sea_orm_active_enums::EnrollmentStatus;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct EnrollRequest {
    pub course_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateEnrollmentRequest {
    pub status: EnrollmentStatus,
    /// Required when transitioning to COMPLETED
    #[validate(custom(function = "validate_grade"))]
    pub grade: Option<Decimal>,
}

pub fn validate_grade(grade: &Decimal) -> Result<(), ValidationError> {
    if *grade < Decimal::ZERO || *grade > Decimal::from(5) {
        return Err(ValidationError::new("grade_out_of_range")
            .with_message("grade must be between 0.00 and 5.00".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub status: EnrollmentStatus,
    pub grade: Option<Decimal>,
    pub enrolled_at: DateTime<Utc>,
    pub message: String,
}

impl EnrollmentResponse {
    pub fn from_model(m: enrollment::Model, message: impl Into<String>) -> Self {
        Self {
            id: m.id,
            student_id: m.student_id,
            course_id: m.course_id,
            status: m.status,
            grade: m.grade,
            enrolled_at: m.enrolled_at,
            message: message.into(),
        }
    }
}

impl IntoResponse for EnrollmentResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

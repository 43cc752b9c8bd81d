use axum::{
    Extension, Json,
    extract::{Path, State},
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extractors::validation::ValidJson;
use crate::models::enrollment::{EnrollRequest, EnrollmentResponse, UpdateEnrollmentRequest};
use crate::services::authz::Caller;
use crate::services::enrollment;
use crate::state::AppState;

/// Enroll the calling student into a course
///
/// Fails with 409 when the student is already enrolled or the course has no
/// available spots.
#[utoipa::path(
    post,
    path = "/enrollments",
    request_body = EnrollRequest,
    responses(
        (status = 201, body = EnrollmentResponse),
        (status = 403, description = "Only students can enroll"),
        (status = 404, description = "Course not found"),
        (status = 409, description = "Already enrolled or course is full"),
    ),
    security(("bearer_auth" = [])),
    tag = "enrollments",
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
    ValidJson(payload): ValidJson<EnrollRequest>,
) -> Result<EnrollmentResponse, AppError> {
    let caller = Caller::load(&state.db, user_id).await?;

    if !caller.is_student() {
        info!("Non-student {} attempted to enroll", user_id);
        return Err(AppError::Forbidden);
    }

    let profile = caller.profile()?;

    let enrollment =
        enrollment::enroll_student(&state.db, profile.id, payload.course_id).await?;

    Ok(EnrollmentResponse::from_model(
        enrollment,
        "Successfully enrolled in course",
    ))
}

/// Transition an enrollment's status
///
/// COMPLETED requires a grade; teachers and admins only.
#[utoipa::path(
    patch,
    path = "/enrollments/{id}",
    params(("id" = Uuid, Path, description = "Enrollment id")),
    request_body = UpdateEnrollmentRequest,
    responses(
        (status = 200, body = EnrollmentResponse),
        (status = 400, description = "Missing or invalid grade"),
        (status = 403, description = "Teachers and admins only"),
        (status = 404, description = "Enrollment not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "enrollments",
)]
pub async fn update_enrollment(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
    Path(id): Path<Uuid>,
    ValidJson(payload): ValidJson<UpdateEnrollmentRequest>,
) -> Result<Json<EnrollmentResponse>, AppError> {
    let caller = Caller::load(&state.db, user_id).await?;

    if !(caller.is_teacher() || caller.is_admin()) {
        return Err(AppError::Forbidden);
    }

    let updated =
        enrollment::update_status(&state.db, id, payload.status, payload.grade).await?;

    Ok(Json(EnrollmentResponse::from_model(
        updated,
        "Enrollment updated",
    )))
}

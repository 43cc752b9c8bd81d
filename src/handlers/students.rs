use axum::{
    Json,
    extract::{Path, State},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::prelude::{Course, Enrollment, Skill, Student};
use crate::entities::{enrollment, skill, student};
use crate::errors::{AppError, internal_error};
use crate::models::student::{EnrollmentInfo, SkillInfo, StudentDetailResponse, StudentSummary};
use crate::state::AppState;

/// List students
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, body = [StudentSummary]),
    ),
    tag = "students",
)]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentSummary>>, AppError> {
    let students = Student::find()
        .order_by_asc(student::Column::LastName)
        .order_by_asc(student::Column::FirstName)
        .all(&state.db)
        .await
        .map_err(internal_error)?;

    Ok(Json(students.into_iter().map(StudentSummary::from).collect()))
}

/// Student detail
///
/// Profile data plus skills and enrollments with course titles.
#[utoipa::path(
    get,
    path = "/students/{id}",
    params(("id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 200, body = StudentDetailResponse),
        (status = 404, description = "Student not found"),
    ),
    tag = "students",
)]
pub async fn student_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StudentDetailResponse>, AppError> {
    let student_record = Student::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(internal_error)?
        .ok_or(AppError::NotFound)?;

    let skills = Skill::find()
        .filter(skill::Column::StudentId.eq(id))
        .order_by_asc(skill::Column::Name)
        .all(&state.db)
        .await
        .map_err(internal_error)?;

    let enrollments = Enrollment::find()
        .filter(enrollment::Column::StudentId.eq(id))
        .order_by_desc(enrollment::Column::EnrolledAt)
        .find_also_related(Course)
        .all(&state.db)
        .await
        .map_err(internal_error)?;

    let enrollments = enrollments
        .into_iter()
        .map(|(e, c)| {
            let (course_title, course_slug) = c
                .map(|c| (c.title, c.slug))
                .unwrap_or_default();
            EnrollmentInfo {
                id: e.id,
                course_id: e.course_id,
                course_title,
                course_slug,
                status: e.status,
                grade: e.grade,
                enrolled_at: e.enrolled_at,
            }
        })
        .collect();

    let phone = student_record.phone.clone();
    let bio = student_record.bio.clone();

    Ok(Json(StudentDetailResponse {
        student: StudentSummary::from(student_record),
        phone,
        bio,
        skills: skills.into_iter().map(SkillInfo::from).collect(),
        enrollments,
    }))
}

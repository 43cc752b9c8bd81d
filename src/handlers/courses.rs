use axum::{
    Json,
    extract::{Path, State},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::prelude::{Course, Enrollment, Instructor, Student};
use crate::entities::sea_orm_active_enums::EnrollmentStatus;
use crate::entities::{course, enrollment};
use crate::errors::{AppError, internal_error};
use crate::models::course::{CourseDetailResponse, CourseSummary, EnrolleeSummary};
use crate::services::enrollment::{active_enrollment_count, available_spots};
use crate::state::AppState;

/// List active courses
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, body = [CourseSummary]),
    ),
    tag = "courses",
)]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseSummary>>, AppError> {
    let courses = Course::find()
        .filter(course::Column::IsActive.eq(true))
        .order_by_asc(course::Column::Title)
        .find_also_related(Instructor)
        .all(&state.db)
        .await
        .map_err(internal_error)?;

    Ok(Json(
        courses
            .into_iter()
            .map(|(c, i)| CourseSummary::from_course(c, i))
            .collect(),
    ))
}

/// Course detail by slug
///
/// Includes the ACTIVE enrollee list, the enrolled count and the remaining
/// spots (never negative).
#[utoipa::path(
    get,
    path = "/courses/{slug}",
    params(("slug" = String, Path, description = "Course slug")),
    responses(
        (status = 200, body = CourseDetailResponse),
        (status = 404, description = "Course not found"),
    ),
    tag = "courses",
)]
pub async fn course_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CourseDetailResponse>, AppError> {
    let (course_record, instructor) = Course::find()
        .filter(course::Column::Slug.eq(&slug))
        .filter(course::Column::IsActive.eq(true))
        .find_also_related(Instructor)
        .one(&state.db)
        .await
        .map_err(internal_error)?
        .ok_or(AppError::NotFound)?;

    let enrolled_count = active_enrollment_count(&state.db, course_record.id)
        .await
        .map_err(internal_error)?;

    let enrollees = Enrollment::find()
        .filter(enrollment::Column::CourseId.eq(course_record.id))
        .filter(enrollment::Column::Status.eq(EnrollmentStatus::Active))
        .order_by_desc(enrollment::Column::EnrolledAt)
        .find_also_related(Student)
        .all(&state.db)
        .await
        .map_err(internal_error)?;

    let students = enrollees
        .into_iter()
        .filter_map(|(e, s)| {
            s.map(|s| EnrolleeSummary {
                student_id: s.id,
                full_name: s.full_name(),
                email: s.email,
                enrolled_at: e.enrolled_at,
            })
        })
        .collect();

    let spots = available_spots(course_record.max_students, enrolled_count);

    Ok(Json(CourseDetailResponse {
        course: CourseSummary::from_course(course_record, instructor),
        enrolled_count,
        available_spots: spots,
        students,
    }))
}

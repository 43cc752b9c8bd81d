use axum::{Json, extract::State};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::entities::prelude::{Course, Instructor, Student};
use crate::entities::course;
use crate::errors::{AppError, internal_error};
use crate::models::course::CourseSummary;
use crate::models::dashboard::HomeSummary;
use crate::state::AppState;

/// Health check endpoint
///
/// Returns server health status. Used by load balancers and monitoring systems.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = String),
    ),
    tag = "general",
)]
pub async fn health() -> &'static str {
    "everything OK"
}

/// Home page summary
///
/// Aggregate counters plus the three most recently created active courses.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, body = HomeSummary),
    ),
    tag = "general",
)]
pub async fn home(State(state): State<AppState>) -> Result<Json<HomeSummary>, AppError> {
    let total_students = Student::find()
        .count(&state.db)
        .await
        .map_err(internal_error)?;

    let total_courses = Course::find()
        .filter(course::Column::IsActive.eq(true))
        .count(&state.db)
        .await
        .map_err(internal_error)?;

    let total_instructors = Instructor::find()
        .count(&state.db)
        .await
        .map_err(internal_error)?;

    let recent_courses = Course::find()
        .filter(course::Column::IsActive.eq(true))
        .order_by_desc(course::Column::CreatedAt)
        .limit(3)
        .find_also_related(Instructor)
        .all(&state.db)
        .await
        .map_err(internal_error)?
        .into_iter()
        .map(|(c, i)| CourseSummary::from_course(c, i))
        .collect();

    Ok(Json(HomeSummary {
        total_students,
        total_courses,
        total_instructors,
        recent_courses,
    }))
}

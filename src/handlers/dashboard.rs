use axum::{Extension, Json, extract::State};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::info;
use uuid::Uuid;

use crate::entities::prelude::{Course, Enrollment, Instructor, Student};
use crate::entities::{course, enrollment, instructor};
use crate::errors::{AppError, internal_error};
use crate::models::course::CourseSummary;
use crate::models::dashboard::{AdminDashboard, StudentDashboard, TeacherDashboard};
use crate::models::student::{EnrollmentInfo, StudentSummary};
use crate::services::authz::Caller;
use crate::state::AppState;

/// Student dashboard
///
/// Profile plus the student's enrollments. Requires the STUDENT role.
#[utoipa::path(
    get,
    path = "/dashboard/student",
    responses(
        (status = 200, body = StudentDashboard),
        (status = 403, description = "Caller is not a student"),
    ),
    security(("bearer_auth" = [])),
    tag = "dashboard",
)]
pub async fn student_dashboard(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
) -> Result<Json<StudentDashboard>, AppError> {
    let caller = Caller::load(&state.db, user_id).await?;

    if !caller.is_student() {
        info!("Access to student dashboard denied for user {}", user_id);
        return Err(AppError::Forbidden);
    }

    let profile = caller.profile()?.clone();

    let enrollments = Enrollment::find()
        .filter(enrollment::Column::StudentId.eq(profile.id))
        .order_by_desc(enrollment::Column::EnrolledAt)
        .find_also_related(Course)
        .all(&state.db)
        .await
        .map_err(internal_error)?
        .into_iter()
        .map(|(e, c)| {
            let (course_title, course_slug) = c.map(|c| (c.title, c.slug)).unwrap_or_default();
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

    Ok(Json(StudentDashboard {
        student: StudentSummary::from(profile),
        enrollments,
    }))
}

/// Teacher dashboard
///
/// Profile plus the courses taught by the instructor record sharing the
/// caller's email. Requires the TEACHER role.
#[utoipa::path(
    get,
    path = "/dashboard/teacher",
    responses(
        (status = 200, body = TeacherDashboard),
        (status = 403, description = "Caller is not a teacher"),
    ),
    security(("bearer_auth" = [])),
    tag = "dashboard",
)]
pub async fn teacher_dashboard(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
) -> Result<Json<TeacherDashboard>, AppError> {
    let caller = Caller::load(&state.db, user_id).await?;

    if !caller.is_teacher() {
        info!("Access to teacher dashboard denied for user {}", user_id);
        return Err(AppError::Forbidden);
    }

    let profile = caller.profile()?.clone();

    // Courses are attached to instructors, and instructors are matched to
    // identities by email.
    let instructor_record = Instructor::find()
        .filter(instructor::Column::Email.eq(&caller.user.email))
        .one(&state.db)
        .await
        .map_err(internal_error)?;

    let courses = match instructor_record {
        Some(instr) => Course::find()
            .filter(course::Column::InstructorId.eq(instr.id))
            .order_by_asc(course::Column::Title)
            .all(&state.db)
            .await
            .map_err(internal_error)?
            .into_iter()
            .map(|c| CourseSummary::from_course(c, Some(instr.clone())))
            .collect(),
        None => Vec::new(),
    };

    Ok(Json(TeacherDashboard {
        teacher: StudentSummary::from(profile),
        courses,
    }))
}

/// Admin dashboard
///
/// Entity totals. Requires the ADMIN role or a staff/superuser identity.
#[utoipa::path(
    get,
    path = "/dashboard/admin",
    responses(
        (status = 200, body = AdminDashboard),
        (status = 403, description = "Caller is not an admin"),
    ),
    security(("bearer_auth" = [])),
    tag = "dashboard",
)]
pub async fn admin_dashboard(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
) -> Result<Json<AdminDashboard>, AppError> {
    let caller = Caller::load(&state.db, user_id).await?;

    if !caller.is_admin() {
        info!("Access to admin dashboard denied for user {}", user_id);
        return Err(AppError::Forbidden);
    }

    let total_students = Student::find()
        .count(&state.db)
        .await
        .map_err(internal_error)?;
    let total_instructors = Instructor::find()
        .count(&state.db)
        .await
        .map_err(internal_error)?;
    let total_courses = Course::find()
        .count(&state.db)
        .await
        .map_err(internal_error)?;
    let total_enrollments = Enrollment::find()
        .count(&state.db)
        .await
        .map_err(internal_error)?;

    Ok(Json(AdminDashboard {
        total_students,
        total_instructors,
        total_courses,
        total_enrollments,
    }))
}

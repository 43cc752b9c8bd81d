use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, SqlErr, TransactionTrait,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::entities::prelude::{Course, Enrollment};
use crate::entities::sea_orm_active_enums::EnrollmentStatus;
use crate::entities::{course, enrollment};
use crate::errors::{AppError, internal_error};

/// Remaining ACTIVE seats on a course, clamped so callers never see a
/// negative number even if the course was over-filled out of band.
pub fn available_spots(max_students: i32, active_count: u64) -> u64 {
    (max_students.max(0) as u64).saturating_sub(active_count)
}

/// Count of ACTIVE enrollments for a course.
pub async fn active_enrollment_count<C: sea_orm::ConnectionTrait>(
    db: &C,
    course_id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    Enrollment::find()
        .filter(enrollment::Column::CourseId.eq(course_id))
        .filter(enrollment::Column::Status.eq(EnrollmentStatus::Active))
        .count(db)
        .await
}

/// Create an ACTIVE enrollment for (student, course).
///
/// Duplicate check, capacity check and insert all run inside one transaction;
/// the unique index on (student_id, course_id) backstops the duplicate check
/// so two racing requests cannot both commit. SQLite transactions are
/// serializable; on Postgres the capacity recheck happens in the same
/// transaction as the insert.
pub async fn enroll_student(
    db: &DatabaseConnection,
    student_id: Uuid,
    course_id: Uuid,
) -> Result<enrollment::Model, AppError> {
    let txn = db.begin().await.map_err(internal_error)?;

    let course_record: course::Model = Course::find_by_id(course_id)
        .filter(course::Column::IsActive.eq(true))
        .one(&txn)
        .await
        .map_err(internal_error)?
        .ok_or(AppError::NotFound)?;

    let already_enrolled = Enrollment::find()
        .filter(enrollment::Column::StudentId.eq(student_id))
        .filter(enrollment::Column::CourseId.eq(course_id))
        .count(&txn)
        .await
        .map_err(internal_error)?
        > 0;

    if already_enrolled {
        info!(
            "Duplicate enrollment rejected: student {} course {}",
            student_id, course_id
        );
        return Err(AppError::DuplicateEnrollment);
    }

    let active_count = active_enrollment_count(&txn, course_id)
        .await
        .map_err(internal_error)?;

    if active_count >= course_record.max_students.max(0) as u64 {
        info!(
            "Capacity exceeded for course {} ({}/{})",
            course_record.slug, active_count, course_record.max_students
        );
        return Err(AppError::CapacityExceeded);
    }

    let new_enrollment = enrollment::ActiveModel {
        id: Set(Uuid::new_v4()),
        student_id: Set(student_id),
        course_id: Set(course_id),
        status: Set(EnrollmentStatus::Active),
        grade: Set(None),
        enrolled_at: Set(Utc::now()),
    };

    let inserted = new_enrollment.insert(&txn).await.map_err(|e| {
        // A racing request may have won the insert between our check and now.
        if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            return AppError::DuplicateEnrollment;
        }
        error!("Failed to insert enrollment: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    txn.commit().await.map_err(internal_error)?;

    info!(
        "Student {} enrolled in course {} (enrollment {})",
        student_id, course_id, inserted.id
    );

    Ok(inserted)
}

/// Transition an enrollment to COMPLETED (grade required) or CANCELLED.
pub async fn update_status(
    db: &DatabaseConnection,
    enrollment_id: Uuid,
    status: EnrollmentStatus,
    grade: Option<Decimal>,
) -> Result<enrollment::Model, AppError> {
    let record = Enrollment::find_by_id(enrollment_id)
        .one(db)
        .await
        .map_err(internal_error)?
        .ok_or(AppError::NotFound)?;

    if status == EnrollmentStatus::Completed && grade.is_none() {
        return Err(AppError::BadRequest(String::from(
            "A grade is required to complete an enrollment",
        )));
    }

    let mut active: enrollment::ActiveModel = record.into();
    active.status = Set(status);
    if let Some(grade) = grade {
        active.grade = Set(Some(grade));
    }

    active.update(db).await.map_err(internal_error)
}

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use campus_backend::entities::sea_orm_active_enums::EnrollmentStatus;
use campus_backend::entities::{course, enrollment, student};

/// Demo enrollments: (student index, course index, status, grade).
pub async fn seed_enrollments(
    db: &DatabaseConnection,
    students: &[student::Model],
    courses: &[course::Model],
) -> Result<usize> {
    let data: [(usize, usize, EnrollmentStatus, Option<Decimal>); 9] = [
        (0, 0, EnrollmentStatus::Active, None),
        (0, 1, EnrollmentStatus::Active, None),
        (1, 0, EnrollmentStatus::Active, None),
        (1, 2, EnrollmentStatus::Active, None),
        (2, 0, EnrollmentStatus::Active, None),
        (2, 4, EnrollmentStatus::Completed, Some(Decimal::new(50, 1))),
        (3, 3, EnrollmentStatus::Active, None),
        (4, 2, EnrollmentStatus::Active, None),
        (4, 4, EnrollmentStatus::Active, None),
    ];

    let now = Utc::now();
    let mut count = 0usize;

    for (student_idx, course_idx, status, grade) in data {
        let (Some(student_record), Some(course_record)) =
            (students.get(student_idx), courses.get(course_idx))
        else {
            continue;
        };

        let model = enrollment::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student_record.id),
            course_id: Set(course_record.id),
            status: Set(status),
            grade: Set(grade),
            enrolled_at: Set(now),
        };
        model.insert(db).await?;
        count += 1;
    }

    Ok(count)
}

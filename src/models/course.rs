use rust_decimal::Decimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::CourseLevel;
use crate::entities::{course, instructor};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InstructorSummary {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub specialization: String,
    pub degree: String,
}

impl From<instructor::Model> for InstructorSummary {
    fn from(m: instructor::Model) -> Self {
        let full_name = m.full_name();
        Self {
            id: m.id,
            full_name,
            email: m.email,
            specialization: m.specialization,
            degree: m.degree,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub duration: i32,
    pub level: CourseLevel,
    pub max_students: i32,
    pub price: Decimal,
    pub instructor: Option<InstructorSummary>,
}

impl CourseSummary {
    pub fn from_course(course: course::Model, instructor: Option<instructor::Model>) -> Self {
        Self {
            id: course.id,
            title: course.title,
            slug: course.slug,
            description: course.description,
            duration: course.duration,
            level: course.level,
            max_students: course.max_students,
            price: course.price,
            instructor: instructor.map(InstructorSummary::from),
        }
    }
}

/// Enrollment as seen from the course side
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnrolleeSummary {
    pub student_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub enrolled_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseDetailResponse {
    pub course: CourseSummary,
    pub enrolled_count: u64,
    /// Remaining ACTIVE seats, clamped so it is never reported negative
    pub available_spots: u64,
    pub students: Vec<EnrolleeSummary>,
}

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::{EnrollmentStatus, Faculty, Role};
use crate::entities::{skill, student};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub faculty: Faculty,
    pub year: i32,
    pub gpa: Decimal,
    pub role: Role,
    pub is_active: bool,
}

impl From<student::Model> for StudentSummary {
    fn from(m: student::Model) -> Self {
        let full_name = m.full_name();
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            full_name,
            email: m.email,
            birth_date: m.birth_date,
            faculty: m.faculty,
            year: m.year,
            gpa: m.gpa,
            role: m.role,
            is_active: m.is_active,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SkillInfo {
    pub name: String,
    pub level: i32,
}

impl From<skill::Model> for SkillInfo {
    fn from(m: skill::Model) -> Self {
        Self {
            name: m.name,
            level: m.level,
        }
    }
}

/// Enrollment as seen from the student side
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentInfo {
    pub id: Uuid,
    pub course_id: Uuid,
    pub course_title: String,
    pub course_slug: String,
    pub status: EnrollmentStatus,
    pub grade: Option<Decimal>,
    pub enrolled_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentDetailResponse {
    pub student: StudentSummary,
    pub phone: String,
    pub bio: String,
    pub skills: Vec<SkillInfo>,
    pub enrollments: Vec<EnrollmentInfo>,
}

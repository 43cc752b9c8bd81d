use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::course::CourseSummary;
use crate::models::student::{EnrollmentInfo, StudentSummary};

/// Home page aggregate counters
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomeSummary {
    pub total_students: u64,
    pub total_courses: u64,
    pub total_instructors: u64,
    pub recent_courses: Vec<CourseSummary>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentDashboard {
    pub student: StudentSummary,
    pub enrollments: Vec<EnrollmentInfo>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TeacherDashboard {
    pub teacher: StudentSummary,
    /// Courses taught by the instructor record sharing the caller's email
    pub courses: Vec<CourseSummary>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminDashboard {
    pub total_students: u64,
    pub total_instructors: u64,
    pub total_courses: u64,
    pub total_enrollments: u64,
}

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod general;
pub mod profile;
pub mod search;
pub mod students;

pub mod admin;
pub mod catalog;
pub mod enrollments;
pub mod students;

pub use admin::seed_admin;
pub use catalog::{seed_courses, seed_instructors};
pub use enrollments::seed_enrollments;
pub use students::{StudentSeedConfig, seed_students};

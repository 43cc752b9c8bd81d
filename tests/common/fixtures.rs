#![allow(dead_code, unused_imports)]

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use campus_backend::entities::sea_orm_active_enums::{
    CourseLevel, EnrollmentStatus, Faculty, Role,
};
use campus_backend::entities::{course, enrollment, instructor, skill, student, user};
use campus_backend::utils::jwt_token::generate_access_token;

use super::TEST_JWT_SECRET;

/// Test user fixture
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String, // Plain text for testing
}

/// Creates an identity record without any profile
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    password: &str,
) -> TestUser {
    create_user_with_flags(db, username, email, password, false, false).await
}

/// Creates a staff identity (no profile needed for admin access)
pub async fn create_staff_user(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    password: &str,
) -> TestUser {
    create_user_with_flags(db, username, email, password, true, false).await
}

async fn create_user_with_flags(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    password: &str,
    is_staff: bool,
    is_superuser: bool,
) -> TestUser {
    let user_id = Uuid::new_v4();
    let now = Utc::now();

    let user_model = user::ActiveModel {
        id: Set(user_id),
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        first_name: Set(format!("{username} First")),
        last_name: Set(format!("{username} Last")),
        password_hash: Set(hash_password(password)),
        is_staff: Set(is_staff),
        is_superuser: Set(is_superuser),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };
    user_model
        .insert(db)
        .await
        .expect("Failed to create test user");

    TestUser {
        id: user_id,
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Creates an identity plus a linked student profile with the given role
pub async fn create_user_with_profile(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    password: &str,
    role: Role,
) -> (TestUser, student::Model) {
    let test_user = create_test_user(db, username, email, password).await;
    let now = Utc::now();

    let profile = student::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(Some(test_user.id)),
        first_name: Set(format!("{username} First")),
        last_name: Set(format!("{username} Last")),
        email: Set(email.to_string()),
        birth_date: Set(None),
        faculty: Set(Faculty::Cs),
        year: Set(1),
        gpa: Set(Decimal::ZERO),
        role: Set(role),
        phone: Set(String::new()),
        bio: Set(String::new()),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let profile = profile
        .insert(db)
        .await
        .expect("Failed to create student profile");

    (test_user, profile)
}

/// Creates a standalone student record (no identity), defaulting to the
/// STUDENT role
pub async fn create_student(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> student::Model {
    let now = Utc::now();
    let model = student::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(None),
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        email: Set(email.to_string()),
        birth_date: Set(None),
        faculty: Set(Faculty::Cs),
        year: Set(2),
        gpa: Set(Decimal::new(40, 1)),
        role: Set(Role::Student),
        phone: Set(String::new()),
        bio: Set(String::new()),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };
    model.insert(db).await.expect("Failed to create student")
}

pub async fn create_instructor(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> instructor::Model {
    let model = instructor::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(None),
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        email: Set(email.to_string()),
        specialization: Set(String::from("Software Engineering")),
        degree: Set(String::new()),
        bio: Set(String::new()),
        is_active: Set(true),
        created_at: Set(Utc::now()),
    };
    model.insert(db).await.expect("Failed to create instructor")
}

pub async fn create_course(
    db: &DatabaseConnection,
    title: &str,
    slug: &str,
    instructor_id: Option<Uuid>,
    max_students: i32,
) -> course::Model {
    let now = Utc::now();
    let model = course::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        slug: Set(slug.to_string()),
        description: Set(format!("Description of {title}")),
        duration: Set(36),
        instructor_id: Set(instructor_id),
        level: Set(CourseLevel::Beginner),
        max_students: Set(max_students),
        price: Set(Decimal::ZERO),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };
    model.insert(db).await.expect("Failed to create course")
}

pub async fn create_inactive_course(
    db: &DatabaseConnection,
    title: &str,
    slug: &str,
) -> course::Model {
    let now = Utc::now();
    let model = course::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        slug: Set(slug.to_string()),
        description: Set(String::from("Archived course")),
        duration: Set(12),
        instructor_id: Set(None),
        level: Set(CourseLevel::Beginner),
        max_students: Set(20),
        price: Set(Decimal::ZERO),
        is_active: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };
    model.insert(db).await.expect("Failed to create course")
}

pub async fn create_enrollment(
    db: &DatabaseConnection,
    student_id: Uuid,
    course_id: Uuid,
    status: EnrollmentStatus,
) -> enrollment::Model {
    let model = enrollment::ActiveModel {
        id: Set(Uuid::new_v4()),
        student_id: Set(student_id),
        course_id: Set(course_id),
        status: Set(status),
        grade: Set(None),
        enrolled_at: Set(Utc::now()),
    };
    model.insert(db).await.expect("Failed to create enrollment")
}

pub async fn create_skill(
    db: &DatabaseConnection,
    student_id: Uuid,
    name: &str,
    level: i32,
) -> skill::Model {
    let model = skill::ActiveModel {
        id: Set(Uuid::new_v4()),
        student_id: Set(student_id),
        name: Set(name.to_string()),
        level: Set(level),
    };
    model.insert(db).await.expect("Failed to create skill")
}

/// Bearer token for a user id, signed with the test secret
pub fn access_token_for(user_id: Uuid) -> String {
    generate_access_token(user_id, TEST_JWT_SECRET, 3600)
        .expect("Failed to generate access token")
}

/// Hash a password using Argon2 (for test fixtures)
fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .expect("Failed to hash password")
}

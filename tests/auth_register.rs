#[allow(unused_imports)]
mod common;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::json;

use campus_backend::entities::prelude::{Student, User};
use campus_backend::entities::sea_orm_active_enums::Role;
use campus_backend::entities::student;
use campus_backend::models::auth::RegisterResponse;

use common::{ErrorResponse, TestContext, create_test_user, post_json};

#[tokio::test]
async fn register_happy_path() {
    let ctx = TestContext::new().await;
    let app = ctx.app();

    let (status, body): (u16, RegisterResponse) = post_json(
        &app,
        "/auth/register",
        json!({
            "username": "testuser",
            "email": "test@example.com",
            "password": "SecurePass123!",
            "first_name": "Test",
            "last_name": "User"
        }),
    )
    .await;

    assert_eq!(status, 201);
    assert!(
        body.message.contains("registered successfully"),
        "Expected success message, got: {}",
        body.message
    );

    let user_record = User::find_by_id(body.user_id)
        .one(&ctx.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user_record.username, "testuser");
    assert_eq!(user_record.email, "test@example.com");
    assert!(!user_record.is_staff);
}

#[tokio::test]
async fn register_creates_student_profile_with_synced_fields() {
    let ctx = TestContext::new().await;
    let app = ctx.app();

    let (status, body): (u16, RegisterResponse) = post_json(
        &app,
        "/auth/register",
        json!({
            "username": "jdoe",
            "email": "jdoe@university.edu",
            "password": "SecurePass123!",
            "first_name": "John",
            "last_name": "Doe"
        }),
    )
    .await;

    assert_eq!(status, 201);

    let profile = Student::find_by_id(body.student_id)
        .one(&ctx.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(profile.user_id, Some(body.user_id));
    assert_eq!(profile.role, Role::Student);
    assert_eq!(profile.first_name, "John");
    assert_eq!(profile.last_name, "Doe");
    assert_eq!(profile.email, "jdoe@university.edu");
}

#[tokio::test]
async fn register_duplicate_email_returns_conflict() {
    let ctx = TestContext::new().await;
    create_test_user(&ctx.db, "existing", "test@example.com", "password123").await;

    let app = ctx.app();

    let (status, body): (u16, ErrorResponse) = post_json(
        &app,
        "/auth/register",
        json!({
            "username": "newuser",
            "email": "test@example.com",  // Duplicate
            "password": "SecurePass123!",
            "first_name": "New",
            "last_name": "User"
        }),
    )
    .await;

    assert_eq!(status, 409, "Expected conflict, got: {}", body.message);
    assert!(
        body.message.to_lowercase().contains("email"),
        "Expected email-specific message, got: {}",
        body.message
    );
}

#[tokio::test]
async fn register_duplicate_username_returns_conflict() {
    let ctx = TestContext::new().await;
    create_test_user(&ctx.db, "existinguser", "first@example.com", "password123").await;

    let app = ctx.app();

    let (status, body): (u16, ErrorResponse) = post_json(
        &app,
        "/auth/register",
        json!({
            "username": "existinguser",
            "email": "different@example.com",
            "password": "SecurePass123!",
            "first_name": "New",
            "last_name": "User"
        }),
    )
    .await;

    assert_eq!(status, 409);
    assert!(
        body.message.to_lowercase().contains("username"),
        "Expected username-specific message, got: {}",
        body.message
    );
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let ctx = TestContext::new().await;
    let app = ctx.app();

    let (status, _): (u16, serde_json::Value) = post_json(
        &app,
        "/auth/register",
        json!({
            "username": "testuser",
            "email": "not-an-email",
            "password": "SecurePass123!",
            "first_name": "Test",
            "last_name": "User"
        }),
    )
    .await;

    assert_eq!(status, 400);

    // Nothing should have been persisted
    let count = User::find().all(&ctx.db).await.unwrap().len();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn register_rejects_short_password() {
    let ctx = TestContext::new().await;
    let app = ctx.app();

    let (status, _): (u16, serde_json::Value) = post_json(
        &app,
        "/auth/register",
        json!({
            "username": "testuser",
            "email": "test@example.com",
            "password": "short",
            "first_name": "Test",
            "last_name": "User"
        }),
    )
    .await;

    assert_eq!(status, 400);
}

#[tokio::test]
async fn register_multiple_independent_users() {
    let ctx = TestContext::new().await;
    let app = ctx.app();

    let (status1, body1): (u16, RegisterResponse) = post_json(
        &app,
        "/auth/register",
        json!({
            "username": "user_one",
            "email": "one@example.com",
            "password": "SecurePass1!",
            "first_name": "User",
            "last_name": "One"
        }),
    )
    .await;

    let (status2, body2): (u16, RegisterResponse) = post_json(
        &app,
        "/auth/register",
        json!({
            "username": "user_two",
            "email": "two@example.com",
            "password": "SecurePass2!",
            "first_name": "User",
            "last_name": "Two"
        }),
    )
    .await;

    assert_eq!(status1, 201);
    assert_eq!(status2, 201);
    assert_ne!(body1.user_id, body2.user_id);

    let profiles = Student::find()
        .filter(student::Column::UserId.is_not_null())
        .all(&ctx.db)
        .await
        .unwrap();
    assert_eq!(profiles.len(), 2);
}

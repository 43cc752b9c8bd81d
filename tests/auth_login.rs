#[allow(unused_imports)]
mod common;

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde_json::json;

use campus_backend::entities::prelude::Session;
use campus_backend::entities::{session, user};
use campus_backend::models::auth::{LoginResponse, LogoutResponse, RefreshResponse};

use common::{ErrorResponse, TestContext, create_test_user, post_json};

#[tokio::test]
async fn login_with_username() {
    let ctx = TestContext::new().await;
    let user = create_test_user(&ctx.db, "anna", "anna@example.com", "password123").await;

    let app = ctx.app();

    let (status, body): (u16, LoginResponse) = post_json(
        &app,
        "/auth/login",
        json!({ "identifier": user.username, "password": user.password }),
    )
    .await;

    assert_eq!(status, 200);
    assert!(!body.tokens.access_token.is_empty());
    assert!(!body.tokens.refresh_token.is_empty());
    assert_eq!(body.tokens.expires_in, 3600);
}

#[tokio::test]
async fn login_with_email() {
    let ctx = TestContext::new().await;
    let user = create_test_user(&ctx.db, "anna", "anna@example.com", "password123").await;

    let app = ctx.app();

    let (status, _body): (u16, LoginResponse) = post_json(
        &app,
        "/auth/login",
        json!({ "identifier": user.email, "password": user.password }),
    )
    .await;

    assert_eq!(status, 200);
}

#[tokio::test]
async fn login_wrong_password_returns_401() {
    let ctx = TestContext::new().await;
    create_test_user(&ctx.db, "anna", "anna@example.com", "password123").await;

    let app = ctx.app();

    let (status, _body): (u16, ErrorResponse) = post_json(
        &app,
        "/auth/login",
        json!({ "identifier": "anna", "password": "wrong-password" }),
    )
    .await;

    assert_eq!(status, 401);
}

#[tokio::test]
async fn login_unknown_identifier_returns_401() {
    let ctx = TestContext::new().await;
    let app = ctx.app();

    let (status, _body): (u16, ErrorResponse) = post_json(
        &app,
        "/auth/login",
        json!({ "identifier": "nobody", "password": "password123" }),
    )
    .await;

    assert_eq!(status, 401);
}

#[tokio::test]
async fn login_deactivated_account_returns_401() {
    let ctx = TestContext::new().await;
    let user = create_test_user(&ctx.db, "anna", "anna@example.com", "password123").await;

    // Deactivate the account
    let record = user::Entity::find_by_id(user.id)
        .one(&ctx.db)
        .await
        .unwrap()
        .unwrap();
    let mut active: user::ActiveModel = record.into();
    active.is_active = Set(false);
    active.update(&ctx.db).await.unwrap();

    let app = ctx.app();

    let (status, _body): (u16, ErrorResponse) = post_json(
        &app,
        "/auth/login",
        json!({ "identifier": "anna", "password": "password123" }),
    )
    .await;

    assert_eq!(status, 401);
}

#[tokio::test]
async fn login_creates_session_record() {
    let ctx = TestContext::new().await;
    let user = create_test_user(&ctx.db, "anna", "anna@example.com", "password123").await;

    let app = ctx.app();

    let (status, _body): (u16, LoginResponse) = post_json(
        &app,
        "/auth/login",
        json!({ "identifier": "anna", "password": "password123" }),
    )
    .await;

    assert_eq!(status, 200);

    let session_count = Session::find()
        .filter(session::Column::UserId.eq(user.id))
        .count(&ctx.db)
        .await
        .unwrap();
    assert_eq!(session_count, 1);
}

#[tokio::test]
async fn refresh_rotates_the_token() {
    let ctx = TestContext::new().await;
    create_test_user(&ctx.db, "anna", "anna@example.com", "password123").await;

    let app = ctx.app();

    let (_, login): (u16, LoginResponse) = post_json(
        &app,
        "/auth/login",
        json!({ "identifier": "anna", "password": "password123" }),
    )
    .await;

    let (status, refreshed): (u16, RefreshResponse) = post_json(
        &app,
        "/auth/refresh",
        json!({ "refresh_token": login.tokens.refresh_token }),
    )
    .await;

    assert_eq!(status, 200);
    assert_ne!(refreshed.tokens.refresh_token, login.tokens.refresh_token);

    // The old refresh token must no longer be accepted
    let (status, _): (u16, ErrorResponse) = post_json(
        &app,
        "/auth/refresh",
        json!({ "refresh_token": login.tokens.refresh_token }),
    )
    .await;
    assert_eq!(status, 401);
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let ctx = TestContext::new().await;
    create_test_user(&ctx.db, "anna", "anna@example.com", "password123").await;

    let app = ctx.app();

    let (_, login): (u16, LoginResponse) = post_json(
        &app,
        "/auth/login",
        json!({ "identifier": "anna", "password": "password123" }),
    )
    .await;

    let (status, _): (u16, LogoutResponse) = post_json(
        &app,
        "/auth/logout",
        json!({ "refresh_token": login.tokens.refresh_token }),
    )
    .await;
    assert_eq!(status, 200);

    // The refresh token should be gone
    let (status, _): (u16, ErrorResponse) = post_json(
        &app,
        "/auth/refresh",
        json!({ "refresh_token": login.tokens.refresh_token }),
    )
    .await;
    assert_eq!(status, 401);
}

#[tokio::test]
async fn repeated_failed_logins_hit_the_rate_limit() {
    let ctx = TestContext::new().await;
    create_test_user(&ctx.db, "anna", "anna@example.com", "password123").await;

    let app = ctx.app();

    for _ in 0..5 {
        let (status, _): (u16, ErrorResponse) = post_json(
            &app,
            "/auth/login",
            json!({ "identifier": "anna", "password": "wrong-password" }),
        )
        .await;
        assert_eq!(status, 401);
    }

    // Sixth attempt is rejected before password verification
    let (status, body): (u16, ErrorResponse) = post_json(
        &app,
        "/auth/login",
        json!({ "identifier": "anna", "password": "password123" }),
    )
    .await;

    assert_eq!(status, 429, "Expected rate limit, got: {}", body.message);
}

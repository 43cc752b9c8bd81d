use axum::{Json, extract::State};

use crate::extractors::validation::ValidJson;
use crate::errors::AppError;
use crate::models::auth::{
    LoginRequest, LoginResponse, LogoutRequest, LogoutResponse, RefreshRequest, RefreshResponse,
    RegisterRequest, RegisterResponse,
};
use crate::services::auth::{login, register, session};
use crate::state::AppState;

/// Register a new user
///
/// Creates the identity and its student profile in one transaction.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, body = RegisterResponse),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Username or email already in use"),
    ),
    tag = "auth",
)]
pub async fn register(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<RegisterRequest>,
) -> Result<RegisterResponse, AppError> {
    register::register_user(&state, payload).await
}

/// Login with credentials
///
/// Authenticates by username or email, returns JWT access and refresh tokens.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 429, description = "Too many attempts"),
    ),
    tag = "auth",
)]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> Result<LoginResponse, AppError> {
    login::authenticate_user(&state, payload).await
}

/// Logout and invalidate session
#[utoipa::path(
    post,
    path = "/auth/logout",
    request_body = LogoutRequest,
    responses(
        (status = 200, body = LogoutResponse),
        (status = 401, description = "No refresh token supplied"),
    ),
    tag = "auth",
)]
pub async fn logout(
    State(state): State<AppState>,
    Json(payload): Json<LogoutRequest>,
) -> Result<LogoutResponse, AppError> {
    session::invalidate_session(&state, payload).await
}

/// Refresh access token
///
/// Exchange a valid refresh token for new access and refresh tokens.
#[utoipa::path(
    post,
    path = "/auth/refresh",
    request_body = RefreshRequest,
    responses(
        (status = 200, body = RefreshResponse),
        (status = 401, description = "Invalid or expired refresh token"),
    ),
    tag = "auth",
)]
pub async fn refresh(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<RefreshRequest>,
) -> Result<RefreshResponse, AppError> {
    session::refresh_session(&state, payload).await
}

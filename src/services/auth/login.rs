use argon2::{Argon2, PasswordHash, PasswordVerifier};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, Set};
use tokio::task;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    entities::prelude::User,
    entities::{session, user},
    errors::AppError,
    models::auth::{AuthTokens, LoginRequest, LoginResponse},
    services::auth::AuthDeps,
    utils::jwt_token::*,
};

/// Authenticate by username or email, the way the original login backend
/// resolved identifiers.
pub async fn authenticate_user<D: AuthDeps>(
    deps: &D,
    req: LoginRequest,
) -> Result<LoginResponse, AppError> {
    let LoginRequest {
        identifier,
        password,
    } = req;

    info!("Login attempt for identifier: {}", identifier);

    deps.rate_limiter()
        .check_login(&identifier)
        .map_err(AppError::TooManyRequests)?;

    let user_record: user::Model = User::find()
        .filter(
            Condition::any()
                .add(user::Column::Username.eq(&identifier))
                .add(user::Column::Email.eq(&identifier)),
        )
        .one(deps.db())
        .await
        .map_err(|e| {
            error!("Database error during user lookup: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?
        .ok_or_else(|| {
            info!("No user found for identifier: {}", &identifier);
            AppError::Unauthorized
        })?;

    if !user_record.is_active {
        info!("Deactivated account attempted login: {}", identifier);
        return Err(AppError::Unauthorized);
    }

    // Retain user_id before moving the record into spawn_blocking
    let user_id: Uuid = user_record.id;

    // Verify payload password against stored hash
    let verify_result: bool = task::spawn_blocking(move || {
        if let Ok(parsed_hash) = PasswordHash::new(&user_record.password_hash) {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok()
        } else {
            error!("Malformed password hash found for user ID: {}", user_id);
            false
        }
    })
    .await
    .map_err(|e| {
        error!("Thread pool error during password verification: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    if !verify_result {
        info!("Invalid password for identifier: {}", identifier);
        return Err(AppError::Unauthorized);
    }

    deps.rate_limiter().clear(&identifier);

    // Generate access token (JWT)
    let access_token =
        generate_access_token(user_id, &deps.jwt().secret, deps.jwt().access_token_expiry)?;

    // Generate refresh token (64-char random string)
    let refresh_token = generate_session_token();
    let refresh_token_hash = hash_token(&refresh_token);

    // Create session record
    let now = Utc::now();
    let expires_at = now + Duration::seconds(deps.jwt().refresh_token_expiry);

    let new_session = session::ActiveModel {
        session_token_hash: Set(refresh_token_hash),
        ip_address: Set(None),
        user_agent: Set(None),
        valid_from: Set(now),
        expires_at: Set(expires_at),
        last_refresh: Set(now),
        user_id: Set(user_id),
        ..Default::default()
    };

    new_session.insert(deps.db()).await.map_err(|e| {
        error!("Failed to create session: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(LoginResponse {
        tokens: AuthTokens {
            access_token,
            refresh_token,
            expires_in: deps.jwt().access_token_expiry,
        },
    })
}

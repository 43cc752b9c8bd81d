use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DbErr, Set, SqlErr, TransactionTrait};
use tokio::task;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::{
    entities::sea_orm_active_enums::{Faculty, Role},
    entities::{student, user},
    errors::AppError,
    models::auth::{RegisterRequest, RegisterResponse},
    services::auth::AuthDeps,
};

/// Register a new identity together with its STUDENT profile.
///
/// The user row and the profile row are inserted in one transaction so a
/// half-registered account can never be observed.
pub async fn register_user<D: AuthDeps>(
    deps: &D,
    req: RegisterRequest,
) -> Result<RegisterResponse, AppError> {
    let RegisterRequest {
        username,
        email,
        password,
        first_name,
        last_name,
    } = req;

    info!("Starting registration process for username: {}", username);

    debug!("Offloading password hashing to background thread...");

    let hashed_password = task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    })
    .await
    .map_err(|e| {
        error!("Thread pool error during password hashing: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?
    .map_err(|e| {
        error!("Failed to hash password: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    debug!("Password hashed successfully. Initiating database transaction.");

    let txn = deps.db().begin().await.map_err(|e| {
        error!("Failed to begin txn: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    let now = Utc::now();

    let new_user = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(username.clone()),
        email: Set(email.clone()),
        first_name: Set(first_name.clone()),
        last_name: Set(last_name.clone()),
        password_hash: Set(hashed_password),
        is_staff: Set(false),
        is_superuser: Set(false),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let inserted_user = new_user.insert(&txn).await.map_err(map_unique_violation)?;

    debug!(
        "User record created with ID: {}. Inserting Student profile...",
        inserted_user.id
    );

    // Profile fields start as copies of the identity; every later profile
    // save re-runs the reconciliation in services::profile.
    let new_student = student::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(Some(inserted_user.id)),
        first_name: Set(first_name),
        last_name: Set(last_name),
        email: Set(email),
        birth_date: Set(None),
        faculty: Set(Faculty::default()),
        year: Set(1),
        gpa: Set(Decimal::ZERO),
        role: Set(Role::Student),
        phone: Set(String::new()),
        bio: Set(String::new()),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let inserted_student = new_student.insert(&txn).await.map_err(map_unique_violation)?;

    txn.commit().await.map_err(|e| {
        error!("Failed to commit txn: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    info!("Successfully registered user ID: {}", inserted_user.id);

    Ok(RegisterResponse {
        user_id: inserted_user.id,
        student_id: inserted_student.id,
        message: String::from("User registered successfully!"),
    })
}

/// Turn a unique-constraint violation into a field-specific 409; everything
/// else stays a 500.
fn map_unique_violation(e: DbErr) -> AppError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        let detail_lower = detail.to_lowercase();
        if detail_lower.contains("username") {
            return AppError::Conflict(String::from("That username is already taken"));
        }
        if detail_lower.contains("email") {
            return AppError::Conflict(String::from("A user with that email already exists"));
        }
        return AppError::Conflict(String::from("Record already exists"));
    }
    error!("Failed to insert record: {:?}", e);
    AppError::InternalServerError(e.to_string())
}

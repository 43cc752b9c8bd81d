use axum::{Extension, Json, extract::State};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extractors::validation::ValidJson;
use crate::models::profile::{ProfileResponse, UpdateProfileRequest, UserSummary};
use crate::models::student::StudentSummary;
use crate::services::authz::Caller;
use crate::services::profile;
use crate::state::AppState;

/// Current user's profile
///
/// Creates a default student profile on first access.
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, body = ProfileResponse),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearer_auth" = [])),
    tag = "profile",
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let caller = Caller::load(&state.db, user_id).await?;
    let student = profile::get_or_create_profile(&state.db, &caller.user).await?;

    let phone = student.phone.clone();
    let bio = student.bio.clone();

    Ok(Json(ProfileResponse {
        user: UserSummary::from(caller.user),
        student: StudentSummary::from(student),
        phone,
        bio,
    }))
}

/// Edit the current user's profile
///
/// Applies identity and profile fields, then reconciles the shared
/// name/email fields between the two records.
#[utoipa::path(
    put,
    path = "/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, body = ProfileResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearer_auth" = [])),
    tag = "profile",
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
    ValidJson(payload): ValidJson<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let caller = Caller::load(&state.db, user_id).await?;
    let (user, student) = profile::save_profile(&state.db, caller.user, payload).await?;

    let phone = student.phone.clone();
    let bio = student.bio.clone();

    Ok(Json(ProfileResponse {
        user: UserSummary::from(user),
        student: StudentSummary::from(student),
        phone,
        bio,
    }))
}

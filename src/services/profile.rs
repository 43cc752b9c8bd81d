use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::entities::prelude::Student;
use crate::entities::sea_orm_active_enums::{Faculty, Role};
use crate::entities::{student, user};
use crate::errors::{AppError, internal_error};
use crate::models::profile::UpdateProfileRequest;

/// The name/email triple shared between an identity and its profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug)]
pub struct Reconciled {
    pub identity: SyncFields,
    pub profile: SyncFields,
    pub identity_changed: bool,
}

/// Reconcile the denormalized profile fields against the owning identity.
///
/// Policy (asymmetric on purpose, last writer wins on the identity side):
/// - identity -> profile: a non-blank identity field always overwrites the
///   profile copy;
/// - profile -> identity: a blank identity field is filled from the profile
///   and never overwritten otherwise.
pub fn reconcile_identity(identity: &SyncFields, profile: &SyncFields) -> Reconciled {
    let mut identity_out = identity.clone();
    let mut profile_out = profile.clone();
    let mut identity_changed = false;

    let pairs: [(&mut String, &mut String); 3] = [
        (&mut identity_out.first_name, &mut profile_out.first_name),
        (&mut identity_out.last_name, &mut profile_out.last_name),
        (&mut identity_out.email, &mut profile_out.email),
    ];

    for (identity_field, profile_field) in pairs {
        if identity_field.trim().is_empty() {
            if !profile_field.trim().is_empty() {
                *identity_field = profile_field.clone();
                identity_changed = true;
            }
        } else {
            *profile_field = identity_field.clone();
        }
    }

    Reconciled {
        identity: identity_out,
        profile: profile_out,
        identity_changed,
    }
}

fn sync_fields_of_user(user: &user::Model) -> SyncFields {
    SyncFields {
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        email: user.email.clone(),
    }
}

fn sync_fields_of_student(student: &student::Model) -> SyncFields {
    SyncFields {
        first_name: student.first_name.clone(),
        last_name: student.last_name.clone(),
        email: student.email.clone(),
    }
}

/// Fetch the caller's profile, creating a default STUDENT one from the
/// identity when none exists yet.
pub async fn get_or_create_profile(
    db: &DatabaseConnection,
    user: &user::Model,
) -> Result<student::Model, AppError> {
    if let Some(existing) = Student::find()
        .filter(student::Column::UserId.eq(user.id))
        .one(db)
        .await
        .map_err(internal_error)?
    {
        return Ok(existing);
    }

    info!("Creating student profile on first access for user {}", user.id);

    let now = Utc::now();
    let new_student = student::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(Some(user.id)),
        first_name: Set(user.first_name.clone()),
        last_name: Set(user.last_name.clone()),
        email: Set(user.email.clone()),
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

    new_student.insert(db).await.map_err(internal_error)
}

/// Apply a profile edit: identity fields to the user row, profile fields to
/// the student row, then reconcile the shared triple once, at this single
/// save boundary, and persist both rows in one transaction.
pub async fn save_profile(
    db: &DatabaseConnection,
    user: user::Model,
    req: UpdateProfileRequest,
) -> Result<(user::Model, student::Model), AppError> {
    let profile = get_or_create_profile(db, &user).await?;
    let now = Utc::now();

    let identity = SyncFields {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
    };
    // The profile's shared fields are derived, so the request never sets them
    // directly; reconciliation decides what they end up as.
    let reconciled = reconcile_identity(&identity, &sync_fields_of_student(&profile));

    let txn = db.begin().await.map_err(internal_error)?;

    let mut active_user: user::ActiveModel = user.into();
    active_user.first_name = Set(reconciled.identity.first_name);
    active_user.last_name = Set(reconciled.identity.last_name);
    active_user.email = Set(reconciled.identity.email);
    active_user.updated_at = Set(now);
    let saved_user = active_user.update(&txn).await.map_err(internal_error)?;

    let mut active_profile: student::ActiveModel = profile.into();
    active_profile.first_name = Set(reconciled.profile.first_name);
    active_profile.last_name = Set(reconciled.profile.last_name);
    active_profile.email = Set(reconciled.profile.email);
    if let Some(phone) = req.phone {
        active_profile.phone = Set(phone);
    }
    if let Some(bio) = req.bio {
        active_profile.bio = Set(bio);
    }
    if let Some(faculty) = req.faculty {
        active_profile.faculty = Set(faculty);
    }
    if let Some(year) = req.year {
        active_profile.year = Set(year);
    }
    if let Some(gpa) = req.gpa {
        active_profile.gpa = Set(gpa);
    }
    if let Some(birth_date) = req.birth_date {
        active_profile.birth_date = Set(Some(birth_date));
    }
    active_profile.updated_at = Set(now);
    let saved_profile = active_profile.update(&txn).await.map_err(internal_error)?;

    txn.commit().await.map_err(internal_error)?;

    Ok((saved_user, saved_profile))
}

/// Re-run the reconciliation for a profile saved outside the self-service
/// flow (admin edits, seeded data). Mirrors the original's save signal, but
/// as one explicit call instead of a side effect.
pub async fn sync_profile_with_identity(
    db: &DatabaseConnection,
    profile: student::Model,
) -> Result<student::Model, AppError> {
    let Some(user_id) = profile.user_id else {
        return Ok(profile);
    };

    let Some(user) = user::Entity::find_by_id(user_id)
        .one(db)
        .await
        .map_err(internal_error)?
    else {
        return Ok(profile);
    };

    let reconciled = reconcile_identity(&sync_fields_of_user(&user), &sync_fields_of_student(&profile));

    let txn = db.begin().await.map_err(internal_error)?;

    if reconciled.identity_changed {
        let mut active_user: user::ActiveModel = user.into();
        active_user.first_name = Set(reconciled.identity.first_name);
        active_user.last_name = Set(reconciled.identity.last_name);
        active_user.email = Set(reconciled.identity.email);
        active_user.updated_at = Set(Utc::now());
        active_user.update(&txn).await.map_err(internal_error)?;
    }

    let mut active_profile: student::ActiveModel = profile.into();
    active_profile.first_name = Set(reconciled.profile.first_name);
    active_profile.last_name = Set(reconciled.profile.last_name);
    active_profile.email = Set(reconciled.profile.email);
    let saved = active_profile.update(&txn).await.map_err(internal_error)?;

    txn.commit().await.map_err(internal_error)?;

    Ok(saved)
}

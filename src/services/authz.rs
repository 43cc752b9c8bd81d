use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::entities::prelude::{Student, User};
use crate::entities::sea_orm_active_enums::Role;
use crate::entities::{student, user};
use crate::errors::AppError;

/// The authenticated identity plus its student profile, if one exists.
/// All dashboard gating goes through the predicates below.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user: user::Model,
    pub profile: Option<student::Model>,
}

impl Caller {
    /// Load the caller for a middleware-verified user id.
    pub async fn load(db: &DatabaseConnection, user_id: Uuid) -> Result<Self, AppError> {
        let user = User::find_by_id(user_id)
            .one(db)
            .await
            .map_err(|e| {
                error!("Database error loading caller {}: {:?}", user_id, e);
                AppError::InternalServerError(e.to_string())
            })?
            .ok_or(AppError::Unauthorized)?;

        let profile = Student::find()
            .filter(student::Column::UserId.eq(user_id))
            .one(db)
            .await
            .map_err(|e| {
                error!("Database error loading profile for {}: {:?}", user_id, e);
                AppError::InternalServerError(e.to_string())
            })?;

        Ok(Self { user, profile })
    }

    pub fn is_student(&self) -> bool {
        matches!(self.profile.as_ref().map(|p| p.role), Some(Role::Student))
    }

    pub fn is_teacher(&self) -> bool {
        matches!(self.profile.as_ref().map(|p| p.role), Some(Role::Teacher))
    }

    /// Admins are either ADMIN-role profiles or staff/superuser identities;
    /// the latter need no profile at all.
    pub fn is_admin(&self) -> bool {
        self.user.is_staff
            || self.user.is_superuser
            || matches!(self.profile.as_ref().map(|p| p.role), Some(Role::Admin))
    }

    /// The caller's profile, or 403 when there is none.
    pub fn profile(&self) -> Result<&student::Model, AppError> {
        self.profile.as_ref().ok_or(AppError::Forbidden)
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::entities::sea_orm_active_enums::Faculty;
use crate::entities::user;
use crate::models::student::StudentSummary;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl From<user::Model> for UserSummary {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
            first_name: m.first_name,
            last_name: m.last_name,
            is_staff: m.is_staff,
            is_superuser: m.is_superuser,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub user: UserSummary,
    pub student: StudentSummary,
    pub phone: String,
    pub bio: String,
}

/// Combined identity + profile edit form. Identity fields are applied to the
/// user record, the rest to the student profile; the two are then reconciled
/// at this single save boundary.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100))]
    pub first_name: String,
    #[validate(length(max = 100))]
    pub last_name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
    pub faculty: Option<Faculty>,
    #[validate(range(min = 1, max = 6, message = "year must be between 1 and 6"))]
    pub year: Option<i32>,
    #[validate(custom(function = "validate_gpa"))]
    pub gpa: Option<Decimal>,
    pub birth_date: Option<NaiveDate>,
}

pub fn validate_gpa(gpa: &Decimal) -> Result<(), ValidationError> {
    if *gpa < Decimal::ZERO || *gpa > Decimal::from(5) {
        return Err(ValidationError::new("gpa_out_of_range")
            .with_message("gpa must be between 0.00 and 5.00".into()));
    }
    Ok(())
}

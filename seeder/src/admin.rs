use anyhow::Result;
use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use campus_backend::entities::user;

/// Create the staff superuser account (username `admin`) if it is missing.
/// Returns the plaintext password so it can be printed once.
pub async fn seed_admin(db: &DatabaseConnection) -> Result<Option<String>> {
    let existing = user::Entity::find()
        .filter(user::Column::Username.eq("admin"))
        .one(db)
        .await?;

    if existing.is_some() {
        println!("Admin user already exists, skipping");
        return Ok(None);
    }

    let password = String::from("admin123");

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("failed to hash admin password: {e}"))?
        .to_string();

    let now = Utc::now();
    let admin = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(String::from("admin")),
        email: Set(String::from("admin@fefu.ru")),
        first_name: Set(String::from("Админ")),
        last_name: Set(String::from("Администратор")),
        password_hash: Set(password_hash),
        is_staff: Set(true),
        is_superuser: Set(true),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };

    admin.insert(db).await?;

    Ok(Some(password))
}

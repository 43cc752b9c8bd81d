use sea_orm::DatabaseConnection;

use crate::{config::JwtConfig, rate_limit::RateLimiter, state::AppState};

pub mod login;
pub mod register;
pub mod session;

// Trait abstraction for auth functional modules dependency injection
pub trait AuthDeps: Send + Sync {
    fn db(&self) -> &DatabaseConnection;
    fn jwt(&self) -> &JwtConfig;
    fn rate_limiter(&self) -> &RateLimiter;
}

impl AuthDeps for AppState {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn jwt(&self) -> &JwtConfig {
        &self.jwt
    }

    fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }
}

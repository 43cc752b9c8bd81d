use sea_orm::DatabaseConnection;

use crate::config::JwtConfig;
use crate::rate_limit::RateLimiter;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt: JwtConfig,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtConfig) -> Self {
        Self {
            db,
            jwt,
            rate_limiter: RateLimiter::new(),
        }
    }
}

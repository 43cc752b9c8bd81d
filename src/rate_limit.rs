use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Tracks login attempts per identifier (username or email)
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Maps identifier to (attempt_count, window_start_time)
    attempts: Arc<Mutex<HashMap<String, (usize, DateTime<Utc>)>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Check whether a login attempt is allowed for the given identifier.
    /// Allows up to `MAX_ATTEMPTS` per `WINDOW_MINUTES`.
    ///
    /// Returns `Ok(())` if allowed, `Err(remaining_seconds)` if rate limited.
    pub fn check_login(&self, identifier: &str) -> Result<(), u64> {
        const MAX_ATTEMPTS: usize = 5;
        const WINDOW_MINUTES: i64 = 15;

        let mut attempts = self
            .attempts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let now = Utc::now();

        let entry = attempts.entry(identifier.to_lowercase()).or_insert((0, now));
        let window_start = entry.1;

        // Reset window if expired
        if now.signed_duration_since(window_start).num_minutes() >= WINDOW_MINUTES {
            *entry = (1, now);
            return Ok(());
        }

        // Check if limit exceeded
        if entry.0 >= MAX_ATTEMPTS {
            let elapsed_secs = now.signed_duration_since(window_start).num_seconds();
            let window_secs = WINDOW_MINUTES * 60;
            let remaining_secs = (window_secs - elapsed_secs).max(0) as u64;
            warn!(
                "Rate limit exceeded for identifier {}: {}/{} attempts",
                identifier, entry.0, MAX_ATTEMPTS
            );
            return Err(remaining_secs);
        }

        // Increment counter
        entry.0 += 1;
        Ok(())
    }

    /// Forget recorded attempts for an identifier (called after a successful login).
    pub fn clear(&self, identifier: &str) {
        let mut attempts = self
            .attempts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        attempts.remove(&identifier.to_lowercase());
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

//! Single-value user lookups.

use std::time::Duration;

use thiserror::Error;

use crate::model::User;
use crate::reactive::Mono;

/// Errors produced by user lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// The caller supplied an id outside the accepted range.
    #[error("{0}")]
    InvalidArgument(String),
}

/// Produces placeholder users, with or without a simulated fetch delay.
#[derive(Debug, Clone)]
pub struct UserService {
    fetch_delay: Duration,
}

impl UserService {
    /// Create a service whose delayed lookup takes `fetch_delay`.
    pub fn new(fetch_delay: Duration) -> Self {
        Self { fetch_delay }
    }

    /// Look up a user after the configured delay.
    pub fn get_user_by_id(&self, id: i32) -> Mono<User, UserError> {
        tracing::debug!(
            user_id = id,
            delay_ms = self.fetch_delay.as_millis() as u64,
            "Fetching user"
        );
        Mono::delayed(User::new(id, "John Doe", "john@example.com"), self.fetch_delay)
    }

    /// Look up a user without any delay.
    pub fn get_user_by_id_immediate(&self, id: i32) -> Mono<User, UserError> {
        Mono::just(User::new(id, "Jane Smith", "jane@example.com"))
    }

    /// Look up a user, failing for negative ids.
    pub fn get_user_by_id_with_error(&self, id: i32) -> Mono<User, UserError> {
        if id < 0 {
            tracing::warn!(user_id = id, "Rejected negative user id");
            return Mono::error(UserError::InvalidArgument(
                "User ID must be positive".to_string(),
            ));
        }
        Mono::just(User::new(id, "Valid User", "valid@example.com"))
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

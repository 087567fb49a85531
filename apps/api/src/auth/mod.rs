//! Accounts, login and MFA enrolment.
//!
//! Nothing here guards other routes: login looks up the account by username
//! and reports it, it does not check the password or issue a session.

pub mod handlers;
pub mod mfa;
pub mod models;
pub mod password;
pub mod users;

use sqlx::PgPool;

use crate::errors::AppError;
use models::User;

pub(crate) async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await
}

pub(crate) fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

/// Trims a required string field; blank counts as missing.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_rejects_blank() {
        assert_eq!(present(Some("  alice ".into())), Some("alice".to_string()));
        assert_eq!(present(Some("   ".into())), None);
        assert_eq!(present(None), None);
    }
}

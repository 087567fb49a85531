use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Account row. Credentials and MFA material are never serialized.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    // Written on create and update; login does not compare it
    #[allow(dead_code)]
    #[serde(skip)]
    pub password_hash: String,
    pub email: String,
    pub role: String,
    pub worker_id: Option<i64>,
    pub is_active: Option<bool>,
    pub last_login: Option<DateTime<Utc>>,
    pub mfa_enabled: Option<bool>,
    #[serde(skip)]
    pub mfa_secret: Option<String>,
    // Written by the backup-codes endpoint; only loaded with the row
    #[allow(dead_code)]
    #[serde(skip)]
    pub backup_codes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }

    pub fn mfa_on(&self) -> bool {
        self.mfa_enabled.unwrap_or(false)
    }
}

pub const DEFAULT_ROLE: &str = "trainee";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub mfa_enabled: bool,
}

impl From<User> for LoginView {
    fn from(user: User) -> Self {
        let mfa_enabled = user.mfa_on();
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            mfa_enabled,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(max = 50, message = "Username must be at most 50 characters"))]
    pub username: Option<String>,
    pub password: Option<String>,
    #[validate(
        email(message = "Email must be a valid address"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: Option<String>,
    #[validate(length(max = 20, message = "Role must be at most 20 characters"))]
    pub role: Option<String>,
    pub worker_id: Option<i64>,
}

/// Partial update; only the fields present are changed.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(
        email(message = "Email must be a valid address"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: Option<String>,
    #[validate(length(max = 20, message = "Role must be at most 20 characters"))]
    pub role: Option<String>,
    pub is_active: Option<bool>,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: Option<String>,
    pub worker_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaRequest {
    pub username: Option<String>,
    pub mfa_code: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaSetup {
    pub mfa_secret: String,
    pub qr_code_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupCodes {
    pub backup_codes: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrfToken {
    pub csrf_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 3,
            username: "tanaka".into(),
            password_hash: "$2b$12$hash".into(),
            email: "tanaka@example.com".into(),
            role: "admin".into(),
            worker_id: Some(9),
            is_active: Some(true),
            last_login: None,
            mfa_enabled: Some(true),
            mfa_secret: Some("SECRET".into()),
            backup_codes: Some("AAAA1111,BBBB2222".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_json_hides_credentials() {
        let body = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(body["username"], "tanaka");
        assert_eq!(body["workerId"], 9);
        assert_eq!(body["mfaEnabled"], true);
        assert!(body.get("passwordHash").is_none());
        assert!(body.get("mfaSecret").is_none());
        assert!(body.get("backupCodes").is_none());
    }

    #[test]
    fn test_login_view_carries_account_summary() {
        let body = serde_json::to_value(LoginView::from(sample_user())).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "id": 3,
                "username": "tanaka",
                "email": "tanaka@example.com",
                "role": "admin",
                "mfaEnabled": true
            })
        );
    }

    #[test]
    fn test_missing_flags_fall_back() {
        let mut user = sample_user();
        user.is_active = None;
        user.mfa_enabled = None;
        assert!(user.active());
        assert!(!user.mfa_on());
    }

    #[test]
    fn test_update_request_rejects_bad_email() {
        let request = UpdateUserRequest {
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}

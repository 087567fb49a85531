//! MFA enrolment. Codes are accepted without TOTP verification; enabling only
//! requires that a secret was set up first.

use axum::extract::State;
use tracing::info;
use uuid::Uuid;

use super::models::{BackupCodes, MfaRequest, MfaSetup, User};
use super::{find_by_username, present, user_not_found};
use crate::errors::AppError;
use crate::response::{ApiResponse, AppJson};
use crate::state::AppState;

const ISSUER: &str = "JobAssistance";
const BACKUP_CODE_COUNT: usize = 10;
const BACKUP_CODE_LEN: usize = 8;

fn new_secret() -> String {
    Uuid::new_v4().simple().to_string()
}

fn otpauth_url(username: &str, secret: &str) -> String {
    format!("otpauth://totp/{ISSUER}:{username}?secret={secret}&issuer={ISSUER}")
}

fn new_backup_codes() -> Vec<String> {
    (0..BACKUP_CODE_COUNT)
        .map(|_| Uuid::new_v4().simple().to_string()[..BACKUP_CODE_LEN].to_uppercase())
        .collect()
}

fn require_username(req: &MfaRequest) -> Result<String, AppError> {
    present(req.username.clone()).ok_or_else(|| AppError::BadRequest("Username is required".to_string()))
}

async fn load_user(state: &AppState, username: &str) -> Result<User, AppError> {
    find_by_username(&state.db, username)
        .await?
        .ok_or_else(user_not_found)
}

/// POST /api/auth/mfa/setup
pub async fn setup(
    State(state): State<AppState>,
    AppJson(req): AppJson<MfaRequest>,
) -> Result<ApiResponse<MfaSetup>, AppError> {
    let username = require_username(&req)?;
    let user = load_user(&state, &username).await?;

    let secret = new_secret();
    sqlx::query("UPDATE users SET mfa_secret = $2, updated_at = now() WHERE id = $1")
        .bind(user.id)
        .bind(&secret)
        .execute(&state.db)
        .await?;

    Ok(ApiResponse::ok(MfaSetup {
        qr_code_url: otpauth_url(&user.username, &secret),
        mfa_secret: secret,
    }))
}

/// POST /api/auth/mfa/enable
pub async fn enable(
    State(state): State<AppState>,
    AppJson(req): AppJson<MfaRequest>,
) -> Result<ApiResponse<()>, AppError> {
    let (Some(username), Some(_code)) = (present(req.username), present(req.mfa_code)) else {
        return Err(AppError::BadRequest(
            "Username and MFA code are required".to_string(),
        ));
    };
    let user = load_user(&state, &username).await?;
    if user.mfa_secret.is_none() {
        return Err(AppError::BadRequest(
            "MFA secret not set. Please setup MFA first.".to_string(),
        ));
    }

    sqlx::query("UPDATE users SET mfa_enabled = TRUE, updated_at = now() WHERE id = $1")
        .bind(user.id)
        .execute(&state.db)
        .await?;

    info!("MFA enabled for user {}", user.id);
    Ok(ApiResponse::message("MFA enabled successfully"))
}

/// POST /api/auth/mfa/disable
pub async fn disable(
    State(state): State<AppState>,
    AppJson(req): AppJson<MfaRequest>,
) -> Result<ApiResponse<()>, AppError> {
    let username = require_username(&req)?;
    let user = load_user(&state, &username).await?;

    sqlx::query(
        r#"
        UPDATE users
        SET mfa_enabled = FALSE, mfa_secret = NULL, backup_codes = NULL, updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(user.id)
    .execute(&state.db)
    .await?;

    info!("MFA disabled for user {}", user.id);
    Ok(ApiResponse::message("MFA disabled successfully"))
}

/// POST /api/auth/mfa/backup-codes
///
/// Replaces any earlier codes.
pub async fn backup_codes(
    State(state): State<AppState>,
    AppJson(req): AppJson<MfaRequest>,
) -> Result<ApiResponse<BackupCodes>, AppError> {
    let username = require_username(&req)?;
    let user = load_user(&state, &username).await?;
    if !user.mfa_on() {
        return Err(AppError::BadRequest("MFA is not enabled".to_string()));
    }

    let codes = new_backup_codes();
    sqlx::query("UPDATE users SET backup_codes = $2, updated_at = now() WHERE id = $1")
        .bind(user.id)
        .bind(codes.join(","))
        .execute(&state.db)
        .await?;

    Ok(ApiResponse::ok(BackupCodes { backup_codes: codes })
        .with_message("Backup codes generated successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_32_hex_chars() {
        let secret = new_secret();
        assert_eq!(secret.len(), 32);
        assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(secret, new_secret());
    }

    #[test]
    fn test_otpauth_url_names_issuer_and_account() {
        assert_eq!(
            otpauth_url("tanaka", "ABC"),
            "otpauth://totp/JobAssistance:tanaka?secret=ABC&issuer=JobAssistance"
        );
    }

    #[test]
    fn test_backup_codes_shape() {
        let codes = new_backup_codes();
        assert_eq!(codes.len(), 10);
        for code in &codes {
            assert_eq!(code.len(), 8);
            assert!(code
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_username_is_required() {
        let req = MfaRequest {
            username: None,
            mfa_code: Some("123456".into()),
        };
        let err = require_username(&req).unwrap_err();
        assert_eq!(err.to_string(), "Username is required");
    }
}

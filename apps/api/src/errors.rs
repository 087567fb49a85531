use std::collections::BTreeMap;

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Request body failed field validation. Keys are the JSON field names.
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Database(sqlx::Error),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ => {}
        }

        let mut body = json!({
            "success": false,
            "error": self.to_string(),
            "type": self.code(),
        });
        if let AppError::Validation(fields) = &self {
            body["errors"] = json!(fields);
        }

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            match db.code().as_deref() {
                Some(UNIQUE_VIOLATION) => {
                    return AppError::Conflict(unique_violation_message(db.constraint()));
                }
                Some(FOREIGN_KEY_VIOLATION) => {
                    return AppError::BadRequest("Referenced record does not exist".to_string());
                }
                _ => {}
            }
        }
        AppError::Database(err)
    }
}

fn unique_violation_message(constraint: Option<&str>) -> String {
    match constraint {
        Some(name) if name.ends_with("_username_key") => "Username already exists".to_string(),
        Some(name) if name.ends_with("_email_key") => "Email already exists".to_string(),
        Some(name) if name.ends_with("_session_id_key") => "Session already exists".to_string(),
        _ => "Duplicate value violates a unique constraint".to_string(),
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        collect_field_errors("", &errors, &mut fields);
        AppError::Validation(fields)
    }
}

fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut BTreeMap<String, String>) {
    for (field, kind) in errors.errors() {
        // struct-level (schema) errors are reported under `__all__`
        let name = if *field == "__all__" { "global".to_string() } else { camel_case(field) };
        let key = format!("{prefix}{name}");
        match kind {
            ValidationErrorsKind::Field(list) => {
                if let Some(first) = list.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| default_message(&first.code));
                    out.insert(key, message);
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_field_errors(&format!("{key}."), nested, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(&format!("{key}[{index}]."), nested, out);
                }
            }
        }
    }
}

fn default_message(code: &str) -> String {
    match code {
        "required" => "must not be null",
        "length" => "size is out of range",
        "email" => "must be a well-formed email address",
        "range" => "value is out of range",
        _ => "is invalid",
    }
    .to_string()
}

/// `name_kana` -> `nameKana`, matching the JSON field names clients send.
pub fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("Invalid query parameter: {}", rejection.body_text()))
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(format!("Invalid multipart body: {}", err.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, max = 5))]
        display_name: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("Worker not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Validation(BTreeMap::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("nope".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Conflict("dup".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(AppError::NotFound("x".into()).code(), "NOT_FOUND");
        assert_eq!(AppError::Validation(BTreeMap::new()).code(), "VALIDATION_ERROR");
        assert_eq!(AppError::Database(sqlx::Error::RowNotFound).code(), "DATABASE_ERROR");
        assert_eq!(AppError::Internal(anyhow::anyhow!("boom")).code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_message_is_the_bare_text() {
        assert_eq!(
            AppError::NotFound("Worker not found".into()).to_string(),
            "Worker not found"
        );
        assert_eq!(AppError::Validation(BTreeMap::new()).to_string(), "Validation failed");
    }

    #[test]
    fn test_validation_errors_use_camel_case_keys() {
        let sample = Sample {
            display_name: String::new(),
            email: "not-an-email".into(),
        };
        let err: AppError = sample.validate().unwrap_err().into();
        match err {
            AppError::Validation(fields) => {
                assert_eq!(fields.get("displayName").map(String::as_str), Some("size is out of range"));
                assert!(fields.contains_key("email"));
                assert_eq!(fields.len(), 2);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_unique_violation_messages() {
        assert_eq!(
            unique_violation_message(Some("users_username_key")),
            "Username already exists"
        );
        assert_eq!(
            unique_violation_message(Some("workers_email_key")),
            "Email already exists"
        );
        assert_eq!(
            unique_violation_message(None),
            "Duplicate value violates a unique constraint"
        );
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("name_kana"), "nameKana");
        assert_eq!(camel_case("japanese_proficiency_score"), "japaneseProficiencyScore");
        assert_eq!(camel_case("email"), "email");
    }
}

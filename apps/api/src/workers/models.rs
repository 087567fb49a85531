use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Record, RecordQuery, UpdateMode};

pub const DEFAULT_STATUS: &str = "登録中";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: i64,
    pub name: String,
    pub name_kana: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub native_language: Option<String>,
    pub visa_status: Option<String>,
    pub visa_expiry_date: Option<NaiveDate>,
    pub japanese_level: Option<String>,
    pub english_level: Option<String>,
    pub skills: Option<String>,
    pub experience_years: Option<i32>,
    pub education: Option<String>,
    pub current_status: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/workers` and `PUT /api/workers/:id`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkerPayload {
    #[validate(
        required(message = "名前は必須です"),
        length(min = 1, max = 100, message = "名前は100文字以内で入力してください")
    )]
    pub name: Option<String>,
    #[validate(length(max = 100, message = "カナ名は100文字以内で入力してください"))]
    pub name_kana: Option<String>,
    #[validate(
        required(message = "メールアドレスは必須です"),
        email(message = "有効なメールアドレスを入力してください"),
        length(max = 100, message = "メールアドレスは100文字以内で入力してください")
    )]
    pub email: Option<String>,
    #[validate(length(max = 500, message = "電話番号は500文字以内で入力してください"))]
    pub phone: Option<String>,
    #[validate(length(max = 200, message = "住所は200文字以内で入力してください"))]
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[validate(length(max = 100, message = "国籍は100文字以内で入力してください"))]
    pub nationality: Option<String>,
    #[validate(length(max = 50, message = "母国語は50文字以内で入力してください"))]
    pub native_language: Option<String>,
    #[validate(length(max = 50, message = "在留資格は50文字以内で入力してください"))]
    pub visa_status: Option<String>,
    pub visa_expiry_date: Option<NaiveDate>,
    #[validate(length(max = 20, message = "日本語レベルは20文字以内で入力してください"))]
    pub japanese_level: Option<String>,
    #[validate(length(max = 20, message = "英語レベルは20文字以内で入力してください"))]
    pub english_level: Option<String>,
    pub skills: Option<String>,
    pub experience_years: Option<i32>,
    #[validate(length(max = 200, message = "学歴は200文字以内で入力してください"))]
    pub education: Option<String>,
    #[validate(length(max = 50, message = "現在のステータスは50文字以内で入力してください"))]
    pub current_status: Option<String>,
    pub notes: Option<String>,
}

/// Query string of `GET /api/workers`.
#[derive(Debug, Default, Deserialize)]
pub struct WorkerFilter {
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub status: Option<String>,
}

impl Record for Worker {
    type Payload = WorkerPayload;
    type Patch = WorkerPayload;

    const TABLE: &'static str = "workers";
    const LABEL: &'static str = "Worker";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "name_kana",
        "email",
        "phone",
        "address",
        "birth_date",
        "nationality",
        "native_language",
        "visa_status",
        "visa_expiry_date",
        "japanese_level",
        "english_level",
        "skills",
        "experience_years",
        "education",
        "current_status",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: WorkerPayload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.name)
            .bind(p.name_kana)
            .bind(p.email)
            .bind(p.phone)
            .bind(p.address)
            .bind(p.birth_date)
            .bind(p.nationality)
            .bind(p.native_language)
            .bind(p.visa_status)
            .bind(p.visa_expiry_date)
            .bind(p.japanese_level)
            .bind(p.english_level)
            .bind(p.skills)
            .bind(p.experience_years.unwrap_or(0))
            .bind(p.education)
            .bind(p.current_status.unwrap_or_else(|| DEFAULT_STATUS.to_string()))
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: WorkerPayload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

/// `foo_bar` -> `%foo\_bar%` for a case-insensitive substring match.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> WorkerPayload {
        WorkerPayload {
            name: Some("Nguyen Van A".into()),
            email: Some("a@example.com".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_worker_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn test_name_and_email_required() {
        let errors = WorkerPayload::default().validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let payload = WorkerPayload {
            name: Some(String::new()),
            ..valid_payload()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let payload = WorkerPayload {
            email: Some("not-an-email".into()),
            ..valid_payload()
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_overlong_level_rejected() {
        let payload = WorkerPayload {
            japanese_level: Some("N".repeat(21)),
            ..valid_payload()
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("japanese_level"));
    }

    #[test]
    fn test_payload_reads_camel_case() {
        let payload: WorkerPayload = serde_json::from_value(serde_json::json!({
            "name": "Tran",
            "email": "tran@example.com",
            "nameKana": "トラン",
            "visaExpiryDate": "2027-03-31",
            "experienceYears": 3
        }))
        .unwrap();
        assert_eq!(payload.name_kana.as_deref(), Some("トラン"));
        assert_eq!(payload.visa_expiry_date, NaiveDate::from_ymd_opt(2027, 3, 31));
        assert_eq!(payload.experience_years, Some(3));
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("tan"), "%tan%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
    }
}

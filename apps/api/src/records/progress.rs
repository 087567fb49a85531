use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, WORKER};

pub const DEFAULT_STATUS: &str = "実施中";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WorkerProgress {
    pub id: i64,
    pub worker_id: i64,
    pub progress_date: NaiveDate,
    pub progress_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub support_content: Option<String>,
    pub next_action: Option<String>,
    pub next_action_date: Option<NaiveDate>,
    pub support_staff: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkerProgressPayload {
    #[validate(required)]
    pub progress_date: Option<NaiveDate>,
    #[validate(required, length(min = 1, max = 50))]
    pub progress_type: Option<String>,
    #[validate(length(max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub support_content: Option<String>,
    pub next_action: Option<String>,
    pub next_action_date: Option<NaiveDate>,
    #[validate(length(max = 100))]
    pub support_staff: Option<String>,
}

impl Record for WorkerProgress {
    type Payload = WorkerProgressPayload;
    type Patch = WorkerProgressPayload;

    const TABLE: &'static str = "worker_progress";
    const LABEL: &'static str = "Progress";
    const COLUMNS: &'static [&'static str] = &[
        "progress_date",
        "progress_type",
        "title",
        "description",
        "status",
        "support_content",
        "next_action",
        "next_action_date",
        "support_staff",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const ORDER_BY: &'static str = "progress_date DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.progress_date)
            .bind(p.progress_type)
            .bind(p.title)
            .bind(p.description)
            .bind(p.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()))
            .bind(p.support_content)
            .bind(p.next_action)
            .bind(p.next_action_date)
            .bind(p.support_staff)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for WorkerProgress {
    const PARENT: Relation = WORKER;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_and_type_required() {
        let errors = WorkerProgressPayload::default().validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("progress_date"));
        assert!(fields.contains_key("progress_type"));
    }

    #[test]
    fn test_minimal_body_is_valid() {
        let payload: WorkerProgressPayload = serde_json::from_value(serde_json::json!({
            "progressDate": "2025-04-01",
            "progressType": "面談"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
        assert!(payload.status.is_none());
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, WORKER};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    pub worker_id: i64,
    pub document_type: String,
    pub title: String,
    pub file_path: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub description: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub is_required: Option<bool>,
    pub is_verified: Option<bool>,
    pub uploaded_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    #[validate(required, length(min = 1, max = 50))]
    pub document_type: Option<String>,
    #[validate(required, length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 500))]
    pub file_path: Option<String>,
    #[validate(length(max = 255))]
    pub file_name: Option<String>,
    #[validate(range(min = 0))]
    pub file_size: Option<i64>,
    #[validate(length(max = 100))]
    pub mime_type: Option<String>,
    pub description: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub is_required: Option<bool>,
    pub is_verified: Option<bool>,
    #[validate(length(max = 100))]
    pub uploaded_by: Option<String>,
}

impl Record for Document {
    type Payload = DocumentPayload;
    type Patch = DocumentPayload;

    const TABLE: &'static str = "documents";
    const LABEL: &'static str = "Document";
    const COLUMNS: &'static [&'static str] = &[
        "document_type",
        "title",
        "file_path",
        "file_name",
        "file_size",
        "mime_type",
        "description",
        "expiry_date",
        "is_required",
        "is_verified",
        "uploaded_by",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const ORDER_BY: &'static str = "created_at DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.document_type)
            .bind(p.title)
            .bind(p.file_path)
            .bind(p.file_name)
            .bind(p.file_size)
            .bind(p.mime_type)
            .bind(p.description)
            .bind(p.expiry_date)
            .bind(p.is_required.unwrap_or(false))
            .bind(p.is_verified.unwrap_or(false))
            .bind(p.uploaded_by)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for Document {
    const PARENT: Relation = WORKER;
}

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, WORKER};

/// A stored artefact (training record, certificate, report) with integrity
/// metadata.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DigitalEvidence {
    pub id: i64,
    pub worker_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub evidence_type: String,
    pub file_path: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub hash_value: Option<String>,
    pub is_verified: Option<bool>,
    pub verified_by: Option<String>,
    pub verified_at: Option<NaiveDateTime>,
    pub metadata: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DigitalEvidencePayload {
    #[validate(required, length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(required, length(min = 1, max = 50))]
    pub evidence_type: Option<String>,
    #[validate(length(max = 500))]
    pub file_path: Option<String>,
    #[validate(length(max = 255))]
    pub file_name: Option<String>,
    #[validate(range(min = 0))]
    pub file_size: Option<i64>,
    #[validate(length(max = 100))]
    pub mime_type: Option<String>,
    #[validate(length(max = 128))]
    pub hash_value: Option<String>,
    pub is_verified: Option<bool>,
    #[validate(length(max = 100))]
    pub verified_by: Option<String>,
    pub verified_at: Option<NaiveDateTime>,
    pub metadata: Option<String>,
}

impl Record for DigitalEvidence {
    type Payload = DigitalEvidencePayload;
    type Patch = DigitalEvidencePayload;

    const TABLE: &'static str = "digital_evidences";
    const LABEL: &'static str = "Digital evidence";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "evidence_type",
        "file_path",
        "file_name",
        "file_size",
        "mime_type",
        "hash_value",
        "is_verified",
        "verified_by",
        "verified_at",
        "metadata",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const ORDER_BY: &'static str = "created_at DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.title)
            .bind(p.description)
            .bind(p.evidence_type)
            .bind(p.file_path)
            .bind(p.file_name)
            .bind(p.file_size)
            .bind(p.mime_type)
            .bind(p.hash_value)
            .bind(p.is_verified.unwrap_or(false))
            .bind(p.verified_by)
            .bind(p.verified_at)
            .bind(p.metadata)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for DigitalEvidence {
    const PARENT: Relation = WORKER;
}

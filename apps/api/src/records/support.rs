use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, WORKER};

pub const DEFAULT_STATUS: &str = "予定";

/// Support given to a worker before departing for Japan.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PreDepartureSupport {
    pub id: i64,
    pub worker_id: i64,
    pub support_type: String,
    pub support_date: NaiveDate,
    pub support_content: String,
    pub status: Option<String>,
    pub required_documents: Option<String>,
    pub documents_submitted: Option<bool>,
    pub support_staff: Option<String>,
    pub next_action: Option<String>,
    pub next_action_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PreDepartureSupportPayload {
    #[validate(required, length(min = 1, max = 50))]
    pub support_type: Option<String>,
    #[validate(required)]
    pub support_date: Option<NaiveDate>,
    #[validate(required, length(min = 1))]
    pub support_content: Option<String>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub required_documents: Option<String>,
    pub documents_submitted: Option<bool>,
    #[validate(length(max = 100))]
    pub support_staff: Option<String>,
    pub next_action: Option<String>,
    pub next_action_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Record for PreDepartureSupport {
    type Payload = PreDepartureSupportPayload;
    type Patch = PreDepartureSupportPayload;

    const TABLE: &'static str = "pre_departure_supports";
    const LABEL: &'static str = "Pre-departure support";
    const COLUMNS: &'static [&'static str] = &[
        "support_type",
        "support_date",
        "support_content",
        "status",
        "required_documents",
        "documents_submitted",
        "support_staff",
        "next_action",
        "next_action_date",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const ORDER_BY: &'static str = "support_date DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.support_type)
            .bind(p.support_date)
            .bind(p.support_content)
            .bind(p.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()))
            .bind(p.required_documents)
            .bind(p.documents_submitted.unwrap_or(false))
            .bind(p.support_staff)
            .bind(p.next_action)
            .bind(p.next_action_date)
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for PreDepartureSupport {
    const PARENT: Relation = WORKER;
}

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, WORKER};

pub const DEFAULT_PRIORITY: &str = "normal";
pub const DEFAULT_TYPE: &str = "general";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub worker_id: i64,
    pub sender: String,
    pub recipient: String,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: Option<bool>,
    pub read_at: Option<NaiveDateTime>,
    pub priority: Option<String>,
    pub message_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    #[validate(required, length(min = 1, max = 100))]
    pub sender: Option<String>,
    #[validate(required, length(min = 1, max = 100))]
    pub recipient: Option<String>,
    #[validate(length(max = 200))]
    pub subject: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
    pub is_read: Option<bool>,
    pub read_at: Option<NaiveDateTime>,
    #[validate(length(max = 20))]
    pub priority: Option<String>,
    #[validate(length(max = 50))]
    pub message_type: Option<String>,
}

impl Record for Message {
    type Payload = MessagePayload;
    type Patch = MessagePayload;

    const TABLE: &'static str = "messages";
    const LABEL: &'static str = "Message";
    const COLUMNS: &'static [&'static str] = &[
        "sender",
        "recipient",
        "subject",
        "message",
        "is_read",
        "read_at",
        "priority",
        "message_type",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const HAS_UPDATED_AT: bool = false;
    const ORDER_BY: &'static str = "created_at DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.sender)
            .bind(p.recipient)
            .bind(p.subject)
            .bind(p.message)
            .bind(p.is_read.unwrap_or(false))
            .bind(p.read_at)
            .bind(p.priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string()))
            .bind(p.message_type.unwrap_or_else(|| DEFAULT_TYPE.to_string()))
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for Message {
    const PARENT: Relation = WORKER;
}

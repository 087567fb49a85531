use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, WORKER};

pub const DEFAULT_PRIORITY: &str = "normal";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub worker_id: Option<i64>,
    pub title: String,
    pub message: String,
    pub notification_type: String,
    pub priority: Option<String>,
    pub is_read: Option<bool>,
    pub read_at: Option<NaiveDateTime>,
    pub scheduled_date: Option<NaiveDateTime>,
    pub related_type: Option<String>,
    pub related_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    #[validate(required, length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
    #[validate(required, length(min = 1, max = 50))]
    pub notification_type: Option<String>,
    #[validate(length(max = 20))]
    pub priority: Option<String>,
    pub is_read: Option<bool>,
    pub read_at: Option<NaiveDateTime>,
    pub scheduled_date: Option<NaiveDateTime>,
    #[validate(length(max = 50))]
    pub related_type: Option<String>,
    pub related_id: Option<i64>,
}

impl Record for Notification {
    type Payload = NotificationPayload;
    type Patch = NotificationPayload;

    const TABLE: &'static str = "notifications";
    const LABEL: &'static str = "Notification";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "message",
        "notification_type",
        "priority",
        "is_read",
        "read_at",
        "scheduled_date",
        "related_type",
        "related_id",
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
            .bind(p.title)
            .bind(p.message)
            .bind(p.notification_type)
            .bind(p.priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string()))
            .bind(p.is_read.unwrap_or(false))
            .bind(p.read_at)
            .bind(p.scheduled_date)
            .bind(p.related_type)
            .bind(p.related_id)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for Notification {
    const PARENT: Relation = WORKER;
}

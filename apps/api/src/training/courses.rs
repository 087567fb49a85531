use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, TRAINING, WORKER};

pub const TRAINING_DEFAULT_STATUS: &str = "予定";
pub const ENROLLMENT_DEFAULT_STATUS: &str = "登録済み";

// ── Trainings ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub training_type: Option<String>,
    pub category: Option<String>,
    pub duration_hours: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub instructor: Option<String>,
    pub max_participants: Option<i32>,
    pub current_participants: Option<i32>,
    pub status: Option<String>,
    pub materials: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPayload {
    #[validate(required, length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 50))]
    pub training_type: Option<String>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
    #[validate(range(min = 0))]
    pub duration_hours: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    #[validate(length(max = 100))]
    pub instructor: Option<String>,
    #[validate(range(min = 0))]
    pub max_participants: Option<i32>,
    #[validate(range(min = 0))]
    pub current_participants: Option<i32>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub materials: Option<String>,
}

impl Record for Training {
    type Payload = TrainingPayload;
    type Patch = TrainingPayload;

    const TABLE: &'static str = "trainings";
    const LABEL: &'static str = "Training";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "training_type",
        "category",
        "duration_hours",
        "start_date",
        "end_date",
        "location",
        "instructor",
        "max_participants",
        "current_participants",
        "status",
        "materials",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.title)
            .bind(p.description)
            .bind(p.training_type)
            .bind(p.category)
            .bind(p.duration_hours)
            .bind(p.start_date)
            .bind(p.end_date)
            .bind(p.location)
            .bind(p.instructor)
            .bind(p.max_participants)
            .bind(p.current_participants.unwrap_or(0))
            .bind(p.status.unwrap_or_else(|| TRAINING_DEFAULT_STATUS.to_string()))
            .bind(p.materials)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

// ── Enrollments ─────────────────────────────────────────────────────────────

/// A worker's seat in a classroom training.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEnrollment {
    pub id: i64,
    pub training_id: i64,
    pub worker_id: i64,
    pub enrollment_date: NaiveDate,
    pub status: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub score: Option<f64>,
    pub certificate_issued: Option<bool>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEnrollmentPayload {
    #[validate(required)]
    pub worker_id: Option<i64>,
    #[validate(required)]
    pub enrollment_date: Option<NaiveDate>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub score: Option<f64>,
    pub certificate_issued: Option<bool>,
    pub notes: Option<String>,
}

impl Record for TrainingEnrollment {
    type Payload = TrainingEnrollmentPayload;
    type Patch = TrainingEnrollmentPayload;

    const TABLE: &'static str = "training_enrollments";
    const LABEL: &'static str = "Training enrollment";
    const COLUMNS: &'static [&'static str] = &[
        "worker_id",
        "enrollment_date",
        "status",
        "completion_date",
        "score",
        "certificate_issued",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const ORDER_BY: &'static str = "enrollment_date, id";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.worker_id)
            .bind(p.enrollment_date)
            .bind(p.status.unwrap_or_else(|| ENROLLMENT_DEFAULT_STATUS.to_string()))
            .bind(p.completion_date)
            .bind(p.score)
            .bind(p.certificate_issued.unwrap_or(false))
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }

    fn payload_references(payload: &Self::Payload) -> Vec<(Relation, i64)> {
        payload.worker_id.map(|id| (WORKER, id)).into_iter().collect()
    }

    fn patch_references(patch: &Self::Patch) -> Vec<(Relation, i64)> {
        Self::payload_references(patch)
    }
}

impl Child for TrainingEnrollment {
    const PARENT: Relation = TRAINING;
}

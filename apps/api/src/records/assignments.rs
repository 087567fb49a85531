use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, TRAINING_MENU, WORKER};

pub const DEFAULT_STATUS: &str = "未開始";

/// A training menu a worker has been asked to complete.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrainingMenuAssignment {
    pub id: i64,
    pub worker_id: i64,
    pub training_menu_id: i64,
    pub assigned_date: NaiveDate,
    pub deadline: Option<NaiveDate>,
    pub status: Option<String>,
    pub completed_at: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrainingMenuAssignmentPayload {
    #[validate(required)]
    pub training_menu_id: Option<i64>,
    #[validate(required)]
    pub assigned_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub completed_at: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl Record for TrainingMenuAssignment {
    type Payload = TrainingMenuAssignmentPayload;
    type Patch = TrainingMenuAssignmentPayload;

    const TABLE: &'static str = "training_menu_assignments";
    const LABEL: &'static str = "Training menu assignment";
    const COLUMNS: &'static [&'static str] = &[
        "training_menu_id",
        "assigned_date",
        "deadline",
        "status",
        "completed_at",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const ORDER_BY: &'static str = "assigned_date DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.training_menu_id)
            .bind(p.assigned_date)
            .bind(p.deadline)
            .bind(p.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()))
            .bind(p.completed_at)
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }

    fn payload_references(payload: &Self::Payload) -> Vec<(Relation, i64)> {
        payload
            .training_menu_id
            .map(|id| (TRAINING_MENU, id))
            .into_iter()
            .collect()
    }

    fn patch_references(patch: &Self::Patch) -> Vec<(Relation, i64)> {
        Self::payload_references(patch)
    }
}

impl Child for TrainingMenuAssignment {
    const PARENT: Relation = WORKER;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_id_required() {
        let payload = TrainingMenuAssignmentPayload {
            assigned_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            ..Default::default()
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("training_menu_id"));
    }

    #[test]
    fn test_updates_check_the_menu_too() {
        let payload = TrainingMenuAssignmentPayload {
            training_menu_id: Some(3),
            ..Default::default()
        };
        let refs = TrainingMenuAssignment::patch_references(&payload);
        assert_eq!(refs[0].0.label, "Training menu");
    }
}

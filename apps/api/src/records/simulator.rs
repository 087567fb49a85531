use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, TRAINING_MENU, WORKER};

pub const DEFAULT_STATUS: &str = "実施中";

/// A construction-equipment simulator run recorded against a worker.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorTraining {
    pub id: i64,
    pub worker_id: i64,
    pub training_menu_id: Option<i64>,
    pub training_date: NaiveDate,
    pub equipment_type: String,
    pub difficulty_level: Option<String>,
    pub time_limit: Option<i32>,
    pub actual_time: Option<i32>,
    pub safety_score: Option<f64>,
    pub error_count: Option<i32>,
    pub procedure_compliance: Option<f64>,
    pub achievement_rate: Option<f64>,
    pub session_data: Option<String>,
    pub status: Option<String>,
    pub feedback: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorTrainingPayload {
    pub training_menu_id: Option<i64>,
    #[validate(required)]
    pub training_date: Option<NaiveDate>,
    #[validate(required, length(min = 1, max = 100))]
    pub equipment_type: Option<String>,
    #[validate(length(max = 20))]
    pub difficulty_level: Option<String>,
    pub time_limit: Option<i32>,
    pub actual_time: Option<i32>,
    pub safety_score: Option<f64>,
    #[validate(range(min = 0))]
    pub error_count: Option<i32>,
    pub procedure_compliance: Option<f64>,
    pub achievement_rate: Option<f64>,
    pub session_data: Option<String>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub feedback: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorTrainingPatch {
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub feedback: Option<String>,
    pub notes: Option<String>,
}

impl Record for SimulatorTraining {
    type Payload = SimulatorTrainingPayload;
    type Patch = SimulatorTrainingPatch;

    const TABLE: &'static str = "construction_simulator_trainings";
    const LABEL: &'static str = "Simulator training";
    const COLUMNS: &'static [&'static str] = &[
        "training_menu_id",
        "training_date",
        "equipment_type",
        "difficulty_level",
        "time_limit",
        "actual_time",
        "safety_score",
        "error_count",
        "procedure_compliance",
        "achievement_rate",
        "session_data",
        "status",
        "feedback",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = &["status", "feedback", "notes"];
    const UPDATE_MODE: UpdateMode = UpdateMode::Merge;
    const ORDER_BY: &'static str = "training_date DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.training_menu_id)
            .bind(p.training_date)
            .bind(p.equipment_type)
            .bind(p.difficulty_level)
            .bind(p.time_limit)
            .bind(p.actual_time)
            .bind(p.safety_score)
            .bind(p.error_count)
            .bind(p.procedure_compliance)
            .bind(p.achievement_rate)
            .bind(p.session_data)
            .bind(p.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()))
            .bind(p.feedback)
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query.bind(p.status).bind(p.feedback).bind(p.notes)
    }

    fn payload_references(payload: &Self::Payload) -> Vec<(Relation, i64)> {
        payload
            .training_menu_id
            .map(|id| (TRAINING_MENU, id))
            .into_iter()
            .collect()
    }
}

impl Child for SimulatorTraining {
    const PARENT: Relation = WORKER;
}

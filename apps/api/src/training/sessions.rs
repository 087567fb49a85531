use axum::extract::State;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::crud::handlers::ensure_exists;
use crate::crud::{
    store, Child, Record, RecordQuery, Relation, UpdateMode, TRAINING_MENU, TRAINING_SESSION,
    WORKER,
};
use crate::errors::AppError;
use crate::response::{ApiResponse, AppPath, AppQuery};
use crate::state::AppState;

pub const DEFAULT_STATUS: &str = "完了";

// ── Sessions ────────────────────────────────────────────────────────────────

/// One recorded simulator run, addressed externally by `session_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    pub id: i64,
    pub session_id: String,
    pub worker_id: Option<i64>,
    pub training_menu_id: Option<i64>,
    pub session_start_time: NaiveDateTime,
    pub session_end_time: Option<NaiveDateTime>,
    pub duration_seconds: Option<i32>,
    pub ai_evaluation: Option<Value>,
    pub replay_data: Option<Value>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionPayload {
    /// Generated when omitted.
    #[validate(length(min = 1, max = 100))]
    pub session_id: Option<String>,
    pub worker_id: Option<i64>,
    pub training_menu_id: Option<i64>,
    #[validate(required)]
    pub session_start_time: Option<NaiveDateTime>,
    pub session_end_time: Option<NaiveDateTime>,
    #[validate(range(min = 0))]
    pub duration_seconds: Option<i32>,
    pub ai_evaluation: Option<Value>,
    pub replay_data: Option<Value>,
    #[validate(length(max = 20))]
    pub status: Option<String>,
}

/// Update body; the external session id never changes.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionPatch {
    pub worker_id: Option<i64>,
    pub training_menu_id: Option<i64>,
    #[validate(required)]
    pub session_start_time: Option<NaiveDateTime>,
    pub session_end_time: Option<NaiveDateTime>,
    #[validate(range(min = 0))]
    pub duration_seconds: Option<i32>,
    pub ai_evaluation: Option<Value>,
    pub replay_data: Option<Value>,
    #[validate(length(max = 20))]
    pub status: Option<String>,
}

fn session_references(worker_id: Option<i64>, menu_id: Option<i64>) -> Vec<(Relation, i64)> {
    worker_id
        .map(|id| (WORKER, id))
        .into_iter()
        .chain(menu_id.map(|id| (TRAINING_MENU, id)))
        .collect()
}

impl Record for TrainingSession {
    type Payload = TrainingSessionPayload;
    type Patch = TrainingSessionPatch;

    const TABLE: &'static str = "training_sessions";
    const LABEL: &'static str = "Training session";
    const COLUMNS: &'static [&'static str] = &[
        "session_id",
        "worker_id",
        "training_menu_id",
        "session_start_time",
        "session_end_time",
        "duration_seconds",
        "ai_evaluation",
        "replay_data",
        "status",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = &[
        "worker_id",
        "training_menu_id",
        "session_start_time",
        "session_end_time",
        "duration_seconds",
        "ai_evaluation",
        "replay_data",
        "status",
    ];
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const HAS_UPDATED_AT: bool = false;
    const ORDER_BY: &'static str = "session_start_time DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.session_id.unwrap_or_else(|| Uuid::new_v4().to_string()))
            .bind(p.worker_id)
            .bind(p.training_menu_id)
            .bind(p.session_start_time)
            .bind(p.session_end_time)
            .bind(p.duration_seconds)
            .bind(p.ai_evaluation)
            .bind(p.replay_data)
            .bind(p.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()))
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.worker_id)
            .bind(p.training_menu_id)
            .bind(p.session_start_time)
            .bind(p.session_end_time)
            .bind(p.duration_seconds)
            .bind(p.ai_evaluation)
            .bind(p.replay_data)
            .bind(p.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()))
    }

    fn payload_references(payload: &Self::Payload) -> Vec<(Relation, i64)> {
        session_references(payload.worker_id, payload.training_menu_id)
    }

    fn patch_references(patch: &Self::Patch) -> Vec<(Relation, i64)> {
        session_references(patch.worker_id, patch.training_menu_id)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionFilter {
    pub worker_id: Option<i64>,
    pub training_menu_id: Option<i64>,
}

/// GET /api/training-sessions
pub async fn list_training_sessions(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<TrainingSessionFilter>,
) -> Result<ApiResponse<Vec<TrainingSession>>, AppError> {
    let sessions: Vec<TrainingSession> = sqlx::query_as(
        r#"
        SELECT * FROM training_sessions
        WHERE ($1::bigint IS NULL OR worker_id = $1)
          AND ($2::bigint IS NULL OR training_menu_id = $2)
        ORDER BY session_start_time DESC, id DESC
        "#,
    )
    .bind(filter.worker_id)
    .bind(filter.training_menu_id)
    .fetch_all(&state.db)
    .await?;

    Ok(ApiResponse::ok(sessions))
}

/// GET /api/workers/:worker_id/training-sessions
pub async fn list_worker_training_sessions(
    State(state): State<AppState>,
    AppPath(worker_id): AppPath<i64>,
) -> Result<ApiResponse<Vec<TrainingSession>>, AppError> {
    ensure_exists(&state, WORKER, worker_id).await?;
    let sessions = store::list_by::<TrainingSession>(&state.db, WORKER.column, worker_id).await?;
    Ok(ApiResponse::ok(sessions))
}

// ── KPI scores ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct KpiScore {
    pub id: i64,
    pub training_session_id: i64,
    pub safety_score: Option<f64>,
    pub error_count: Option<i32>,
    pub procedure_compliance_rate: Option<f64>,
    pub work_time_seconds: Option<i32>,
    pub achievement_rate: Option<f64>,
    pub accuracy_score: Option<f64>,
    pub efficiency_score: Option<f64>,
    pub overall_score: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct KpiScorePayload {
    #[validate(range(min = 0.0, max = 100.0))]
    pub safety_score: Option<f64>,
    #[validate(range(min = 0))]
    pub error_count: Option<i32>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub procedure_compliance_rate: Option<f64>,
    #[validate(range(min = 0))]
    pub work_time_seconds: Option<i32>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub achievement_rate: Option<f64>,
    pub accuracy_score: Option<f64>,
    pub efficiency_score: Option<f64>,
    pub overall_score: Option<f64>,
    pub notes: Option<String>,
}

impl Record for KpiScore {
    type Payload = KpiScorePayload;
    type Patch = KpiScorePayload;

    const TABLE: &'static str = "kpi_scores";
    const LABEL: &'static str = "KPI score";
    const COLUMNS: &'static [&'static str] = &[
        "safety_score",
        "error_count",
        "procedure_compliance_rate",
        "work_time_seconds",
        "achievement_rate",
        "accuracy_score",
        "efficiency_score",
        "overall_score",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const HAS_UPDATED_AT: bool = false;
    const ORDER_BY: &'static str = "created_at, id";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.safety_score)
            .bind(p.error_count.unwrap_or(0))
            .bind(p.procedure_compliance_rate)
            .bind(p.work_time_seconds)
            .bind(p.achievement_rate)
            .bind(p.accuracy_score)
            .bind(p.efficiency_score)
            .bind(p.overall_score)
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for KpiScore {
    const PARENT: Relation = TRAINING_SESSION;
}

// ── Operation logs ──────────────────────────────────────────────────────────

/// A single timestamped event emitted by the simulator during a session.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OperationLog {
    pub id: i64,
    pub training_session_id: i64,
    #[serde(rename = "timestamp")]
    pub logged_at: NaiveDateTime,
    pub operation_type: String,
    pub operation_value: Option<f64>,
    pub equipment_state: Option<String>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub position_z: Option<f64>,
    pub velocity: Option<f64>,
    pub error_event: Option<bool>,
    pub error_description: Option<String>,
    pub achievement_event: Option<bool>,
    pub achievement_description: Option<String>,
    pub event_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OperationLogPayload {
    /// Stored as `logged_at`; named after the key clients send.
    #[validate(required)]
    pub timestamp: Option<NaiveDateTime>,
    #[validate(required, length(min = 1, max = 50))]
    pub operation_type: Option<String>,
    pub operation_value: Option<f64>,
    pub equipment_state: Option<String>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub position_z: Option<f64>,
    pub velocity: Option<f64>,
    pub error_event: Option<bool>,
    pub error_description: Option<String>,
    pub achievement_event: Option<bool>,
    pub achievement_description: Option<String>,
    #[validate(length(max = 20))]
    pub event_type: Option<String>,
}

impl Record for OperationLog {
    type Payload = OperationLogPayload;
    type Patch = OperationLogPayload;

    const TABLE: &'static str = "operation_logs";
    const LABEL: &'static str = "Operation log";
    const COLUMNS: &'static [&'static str] = &[
        "logged_at",
        "operation_type",
        "operation_value",
        "equipment_state",
        "position_x",
        "position_y",
        "position_z",
        "velocity",
        "error_event",
        "error_description",
        "achievement_event",
        "achievement_description",
        "event_type",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const HAS_UPDATED_AT: bool = false;
    const ORDER_BY: &'static str = "logged_at, id";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.timestamp)
            .bind(p.operation_type)
            .bind(p.operation_value)
            .bind(p.equipment_state)
            .bind(p.position_x)
            .bind(p.position_y)
            .bind(p.position_z)
            .bind(p.velocity)
            .bind(p.error_event.unwrap_or(false))
            .bind(p.error_description)
            .bind(p.achievement_event.unwrap_or(false))
            .bind(p.achievement_description)
            .bind(p.event_type)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for OperationLog {
    const PARENT: Relation = TRAINING_SESSION;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_references_skip_missing_ids() {
        assert!(session_references(None, None).is_empty());
        let refs = session_references(Some(1), Some(2));
        assert_eq!(refs[0].0.label, "Worker");
        assert_eq!(refs[1].0.label, "Training menu");
    }

    #[test]
    fn test_operation_log_uses_timestamp_key() {
        let payload: OperationLogPayload = serde_json::from_value(serde_json::json!({
            "timestamp": "2025-08-01T10:15:30",
            "operationType": "boom_up",
            "positionX": 1.5
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.position_x, Some(1.5));
        assert!(payload.timestamp.is_some());
    }

    #[test]
    fn test_kpi_percentages_bounded() {
        let payload = KpiScorePayload {
            safety_score: Some(101.0),
            ..Default::default()
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("safety_score"));
    }

    #[test]
    fn test_session_payload_json_blobs() {
        let payload: TrainingSessionPayload = serde_json::from_value(serde_json::json!({
            "sessionStartTime": "2025-08-01T10:00:00",
            "aiEvaluation": {"grade": "A", "comments": ["smooth"]}
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.ai_evaluation.unwrap()["grade"], "A");
        assert!(payload.session_id.is_none());
    }
}

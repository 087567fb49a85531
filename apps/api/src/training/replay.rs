use axum::extract::State;
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::crud::{store, TRAINING_SESSION};
use crate::errors::AppError;
use crate::response::{ApiResponse, AppPath};
use crate::state::AppState;
use crate::training::sessions::{KpiScore, OperationLog, TrainingSession};

/// Everything a viewer needs to replay one session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayView {
    pub session_id: String,
    pub worker_id: Option<i64>,
    pub training_menu_id: Option<i64>,
    pub session_start_time: NaiveDateTime,
    pub session_end_time: Option<NaiveDateTime>,
    pub duration_seconds: Option<i32>,
    pub status: Option<String>,
    pub ai_evaluation: Option<Value>,
    pub replay_data: Option<Value>,
    pub kpi_scores: Vec<KpiScore>,
    pub operation_logs: Vec<OperationLog>,
}

impl ReplayView {
    fn new(session: TrainingSession, kpi_scores: Vec<KpiScore>, operation_logs: Vec<OperationLog>) -> Self {
        Self {
            session_id: session.session_id,
            worker_id: session.worker_id,
            training_menu_id: session.training_menu_id,
            session_start_time: session.session_start_time,
            session_end_time: session.session_end_time,
            duration_seconds: session.duration_seconds,
            status: session.status,
            ai_evaluation: session.ai_evaluation,
            replay_data: session.replay_data,
            kpi_scores,
            operation_logs,
        }
    }
}

/// GET /api/replay/:session_id
pub async fn get_replay(
    State(state): State<AppState>,
    AppPath(session_id): AppPath<String>,
) -> Result<ApiResponse<ReplayView>, AppError> {
    let session: TrainingSession =
        sqlx::query_as("SELECT * FROM training_sessions WHERE session_id = $1")
            .bind(&session_id)
            .fetch_optional(&state.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

    let kpi_scores = store::list_by::<KpiScore>(&state.db, TRAINING_SESSION.column, session.id).await?;
    let operation_logs =
        store::list_by::<OperationLog>(&state.db, TRAINING_SESSION.column, session.id).await?;

    Ok(ApiResponse::ok(ReplayView::new(session, kpi_scores, operation_logs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_replay_view_flattens_session_header() {
        let start = NaiveDate::from_ymd_opt(2025, 8, 1)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap();
        let session = TrainingSession {
            id: 4,
            session_id: "abc-123".into(),
            worker_id: Some(2),
            training_menu_id: None,
            session_start_time: start,
            session_end_time: None,
            duration_seconds: Some(300),
            ai_evaluation: Some(serde_json::json!({"grade": "B"})),
            replay_data: None,
            status: Some("完了".into()),
            created_at: Utc::now(),
        };
        let body = serde_json::to_value(ReplayView::new(session, vec![], vec![])).unwrap();
        assert_eq!(body["sessionId"], "abc-123");
        assert_eq!(body["workerId"], 2);
        assert_eq!(body["sessionStartTime"], "2025-08-01T09:00:00");
        assert_eq!(body["aiEvaluation"]["grade"], "B");
        assert_eq!(body["operationLogs"], serde_json::json!([]));
        assert!(body.get("id").is_none());
    }
}

//! Intake endpoints called by the Unity simulator client.

use axum::extract::State;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::crud::handlers::not_found;
use crate::crud::{store, TRAINING_MENU, WORKER};
use crate::errors::AppError;
use crate::response::{ApiResponse, AppJson};
use crate::state::AppState;
use crate::training::sessions::{KpiScore, KpiScorePayload, OperationLog, OperationLogPayload};

pub const UNITY_SESSION_STATUS: &str = "開始";

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UnitySessionRequest {
    #[validate(required(message = "workerId is required"))]
    pub worker_id: Option<i64>,
    /// Ignored unless positive and naming an existing menu.
    pub menu_id: Option<i64>,
    pub session_end_time: Option<NaiveDateTime>,
    #[validate(range(min = 0))]
    pub duration_seconds: Option<i32>,
    #[validate(length(max = 20))]
    pub status: Option<String>,
    pub ai_evaluation: Option<Value>,
    pub replay_data: Option<Value>,
    #[validate(nested)]
    pub kpi_scores: Option<KpiScorePayload>,
    #[serde(default)]
    #[validate(nested)]
    pub operation_logs: Vec<OperationLogPayload>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitySessionCreated {
    pub session_id: String,
    pub session_id_long: i64,
}

/// POST /api/unity/training-session
///
/// Session, KPI row and operation logs are written in one transaction.
pub async fn submit_training_session(
    State(state): State<AppState>,
    AppJson(req): AppJson<UnitySessionRequest>,
) -> Result<ApiResponse<UnitySessionCreated>, AppError> {
    req.validate()?;
    let worker_id = req
        .worker_id
        .ok_or_else(|| AppError::BadRequest("workerId is required".to_string()))?;

    let mut tx = state.db.begin().await?;

    if !store::exists(&mut *tx, WORKER.table, worker_id).await? {
        return Err(not_found(WORKER.label));
    }

    let mut menu_id = None;
    if let Some(id) = req.menu_id.filter(|id| *id > 0) {
        if store::exists(&mut *tx, TRAINING_MENU.table, id).await? {
            menu_id = Some(id);
        }
    }

    let (id, session_id): (i64, String) = sqlx::query_as(
        r#"
        INSERT INTO training_sessions
            (session_id, worker_id, training_menu_id, session_start_time, session_end_time,
             duration_seconds, ai_evaluation, replay_data, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, session_id
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(worker_id)
    .bind(menu_id)
    .bind(Local::now().naive_local())
    .bind(req.session_end_time)
    .bind(req.duration_seconds)
    .bind(req.ai_evaluation)
    .bind(req.replay_data)
    .bind(req.status.unwrap_or_else(|| UNITY_SESSION_STATUS.to_string()))
    .fetch_one(&mut *tx)
    .await?;

    if let Some(kpi) = req.kpi_scores {
        store::insert_child::<KpiScore, _>(&mut *tx, Some(id), kpi).await?;
    }
    let log_count = req.operation_logs.len();
    for log in req.operation_logs {
        store::insert_child::<OperationLog, _>(&mut *tx, Some(id), log).await?;
    }

    tx.commit().await?;
    info!("Unity session {session_id} ({id}) stored for worker {worker_id} with {log_count} logs");

    Ok(ApiResponse::ok(UnitySessionCreated {
        session_id,
        session_id_long: id,
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnityCommand {
    pub command: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnityCommandAck {
    pub command: String,
    pub session_id: String,
    pub status: &'static str,
}

fn acknowledge(cmd: UnityCommand) -> Result<UnityCommandAck, AppError> {
    match (cmd.command, cmd.session_id) {
        (Some(command), Some(session_id)) => Ok(UnityCommandAck {
            command,
            session_id,
            status: "processed",
        }),
        _ => Err(AppError::BadRequest(
            "Command and sessionId are required".to_string(),
        )),
    }
}

/// POST /api/unity/command
pub async fn handle_command(
    AppJson(cmd): AppJson<UnityCommand>,
) -> Result<ApiResponse<UnityCommandAck>, AppError> {
    let ack = acknowledge(cmd)?;
    info!("Unity command '{}' for session {}", ack.command, ack.session_id);
    Ok(ApiResponse::ok(ack))
}

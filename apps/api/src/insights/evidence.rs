use axum::extract::State;
use serde::Serialize;

use super::worker_name;
use crate::crud::{store, Record, WORKER};
use crate::errors::AppError;
use crate::records::evidence::DigitalEvidence;
use crate::records::japanese::JapaneseProficiency;
use crate::records::simulator::SimulatorTraining;
use crate::records::skills::SkillTraining;
use crate::response::{ApiResponse, AppPath};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceReport {
    pub worker_id: i64,
    pub worker_name: String,
    pub digital_evidences: Vec<DigitalEvidence>,
    pub japanese_proficiency_count: i64,
    pub skill_training_count: i64,
    pub simulator_training_count: i64,
}

/// GET /api/workers/:worker_id/evidence-report
pub async fn evidence_report(
    State(state): State<AppState>,
    AppPath(worker_id): AppPath<i64>,
) -> Result<ApiResponse<EvidenceReport>, AppError> {
    let pool = &state.db;
    let worker_name = worker_name(pool, worker_id).await?;

    let (digital_evidences, japanese, skills, simulator) = tokio::try_join!(
        store::list_children::<DigitalEvidence>(pool, worker_id),
        store::count(pool, JapaneseProficiency::TABLE, WORKER.column, worker_id),
        store::count(pool, SkillTraining::TABLE, WORKER.column, worker_id),
        store::count(pool, SimulatorTraining::TABLE, WORKER.column, worker_id),
    )?;

    Ok(ApiResponse::ok(EvidenceReport {
        worker_id,
        worker_name,
        digital_evidences,
        japanese_proficiency_count: japanese,
        skill_training_count: skills,
        simulator_training_count: simulator,
    }))
}

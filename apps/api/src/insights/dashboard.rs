use axum::extract::State;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::worker_name;
use crate::crud::{store, Record, WORKER};
use crate::errors::AppError;
use crate::records::career::{CareerGoal, Milestone};
use crate::records::growth::IntegratedGrowth;
use crate::records::japanese::JapaneseProficiency;
use crate::records::progress::WorkerProgress;
use crate::records::simulator::SimulatorTraining;
use crate::records::skills::SkillTraining;
use crate::response::{ApiResponse, AppPath};
use crate::state::AppState;
use crate::training::sessions::TrainingSession;

/// One KPI row per scored simulator session, oldest first.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct KpiPoint {
    pub session_id: String,
    pub session_start_time: NaiveDateTime,
    pub overall_score: Option<f64>,
    pub safety_score: Option<f64>,
    pub accuracy_score: Option<f64>,
    pub efficiency_score: Option<f64>,
}

#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProficiencyPoint {
    pub test_date: NaiveDate,
    pub test_type: String,
    pub level: Option<String>,
    pub total_score: Option<i32>,
    pub passed: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegratedDashboard {
    pub worker_id: i64,
    pub worker_name: String,
    pub japanese_proficiency_count: i64,
    pub skill_training_count: i64,
    pub simulator_training_count: i64,
    pub training_session_count: i64,
    pub integrated_growth_count: i64,
    pub milestone_count: i64,
    pub career_goal_count: i64,
    pub progress_count: i64,
    pub kpi_timeline: Vec<KpiPoint>,
    pub japanese_proficiency: Vec<ProficiencyPoint>,
}

async fn owned<R: Record>(pool: &PgPool, worker_id: i64) -> Result<i64, sqlx::Error> {
    store::count(pool, R::TABLE, WORKER.column, worker_id).await
}

async fn kpi_timeline(pool: &PgPool, worker_id: i64) -> Result<Vec<KpiPoint>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT s.session_id, s.session_start_time,
               k.overall_score, k.safety_score, k.accuracy_score, k.efficiency_score
        FROM training_sessions s
        JOIN kpi_scores k ON k.training_session_id = s.id
        WHERE s.worker_id = $1
        ORDER BY s.session_start_time, k.id
        "#,
    )
    .bind(worker_id)
    .fetch_all(pool)
    .await
}

async fn proficiency_series(pool: &PgPool, worker_id: i64) -> Result<Vec<ProficiencyPoint>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT test_date, test_type, level, total_score, passed
        FROM japanese_proficiencies
        WHERE worker_id = $1
        ORDER BY test_date, id
        "#,
    )
    .bind(worker_id)
    .fetch_all(pool)
    .await
}

/// GET /api/workers/:worker_id/dashboard/integrated
pub async fn integrated_dashboard(
    State(state): State<AppState>,
    AppPath(worker_id): AppPath<i64>,
) -> Result<ApiResponse<IntegratedDashboard>, AppError> {
    let pool = &state.db;
    let worker_name = worker_name(pool, worker_id).await?;

    let (japanese, skills, simulator, sessions, growth, milestones, goals, progress) = tokio::try_join!(
        owned::<JapaneseProficiency>(pool, worker_id),
        owned::<SkillTraining>(pool, worker_id),
        owned::<SimulatorTraining>(pool, worker_id),
        owned::<TrainingSession>(pool, worker_id),
        owned::<IntegratedGrowth>(pool, worker_id),
        owned::<Milestone>(pool, worker_id),
        owned::<CareerGoal>(pool, worker_id),
        owned::<WorkerProgress>(pool, worker_id),
    )?;
    let (kpi_timeline, japanese_proficiency) =
        tokio::try_join!(kpi_timeline(pool, worker_id), proficiency_series(pool, worker_id))?;

    Ok(ApiResponse::ok(IntegratedDashboard {
        worker_id,
        worker_name,
        japanese_proficiency_count: japanese,
        skill_training_count: skills,
        simulator_training_count: simulator,
        training_session_count: sessions,
        integrated_growth_count: growth,
        milestone_count: milestones,
        career_goal_count: goals,
        progress_count: progress,
        kpi_timeline,
        japanese_proficiency,
    }))
}

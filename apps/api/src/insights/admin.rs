use axum::extract::State;
use serde::Serialize;

use crate::crud::{store, Record};
use crate::errors::AppError;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::training::menus::TrainingMenu;
use crate::training::sessions::TrainingSession;
use crate::workers::models::Worker;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub total_workers: i64,
    pub total_training_sessions: i64,
    pub total_training_menus: i64,
    pub active_training_menus: i64,
}

/// GET /api/admin/summary
pub async fn summary(State(state): State<AppState>) -> Result<ApiResponse<AdminSummary>, AppError> {
    let pool = &state.db;
    let (total_workers, total_training_sessions, total_training_menus, active_training_menus) = tokio::try_join!(
        store::count_all(pool, Worker::TABLE),
        store::count_all(pool, TrainingSession::TABLE),
        store::count_all(pool, TrainingMenu::TABLE),
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM training_menus WHERE is_active = TRUE")
            .fetch_one(pool),
    )?;

    Ok(ApiResponse::ok(AdminSummary {
        total_workers,
        total_training_sessions,
        total_training_menus,
        active_training_menus,
    }))
}

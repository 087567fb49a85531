//! Read-only aggregates across a worker's records, plus the admin summary.

pub mod admin;
pub mod dashboard;
pub mod evidence;

use sqlx::PgPool;

use crate::crud::{handlers::not_found, WORKER};
use crate::errors::AppError;

async fn worker_name(pool: &PgPool, worker_id: i64) -> Result<String, AppError> {
    sqlx::query_scalar::<_, String>("SELECT name FROM workers WHERE id = $1")
        .bind(worker_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found(WORKER.label))
}

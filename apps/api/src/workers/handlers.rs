use axum::extract::State;

use crate::errors::AppError;
use crate::response::{ApiResponse, AppQuery};
use crate::state::AppState;
use crate::workers::models::{contains_pattern, Worker, WorkerFilter};

/// GET /api/workers
///
/// Optional `name` (case-insensitive substring), `nationality` and `status`
/// filters; all given filters must match.
pub async fn list_workers(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<WorkerFilter>,
) -> Result<ApiResponse<Vec<Worker>>, AppError> {
    let name_pattern = filter
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .map(contains_pattern);

    let workers: Vec<Worker> = sqlx::query_as(
        r#"
        SELECT * FROM workers
        WHERE ($1::text IS NULL OR name ILIKE $1)
          AND ($2::text IS NULL OR nationality = $2)
          AND ($3::text IS NULL OR current_status = $3)
        ORDER BY id
        "#,
    )
    .bind(name_pattern)
    .bind(filter.nationality)
    .bind(filter.status)
    .fetch_all(&state.db)
    .await?;

    Ok(ApiResponse::ok(workers))
}

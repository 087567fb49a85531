//! Generic handlers, instantiated per resource in `routes::build_router`.

use axum::extract::State;
use tracing::info;
use validator::Validate;

use super::{store, Child, Record, Relation};
use crate::errors::AppError;
use crate::response::{ApiResponse, AppJson, AppPath};
use crate::state::AppState;

pub fn not_found(label: &str) -> AppError {
    AppError::NotFound(format!("{label} not found"))
}

pub async fn ensure_exists(state: &AppState, relation: Relation, id: i64) -> Result<(), AppError> {
    if store::exists(&state.db, relation.table, id).await? {
        Ok(())
    } else {
        Err(not_found(relation.label))
    }
}

async fn ensure_references(state: &AppState, references: &[(Relation, i64)]) -> Result<(), AppError> {
    match store::first_missing(&state.db, references).await? {
        Some(relation) => Err(not_found(relation.label)),
        None => Ok(()),
    }
}

fn deleted(label: &str) -> ApiResponse<()> {
    ApiResponse::message(format!("{label} deleted successfully"))
}

// ── Parent-scoped records ───────────────────────────────────────────────────

/// GET /api/<parent>/:parent_id/<records>
pub async fn list_children<R: Child>(
    State(state): State<AppState>,
    AppPath(parent_id): AppPath<i64>,
) -> Result<ApiResponse<Vec<R>>, AppError> {
    ensure_exists(&state, R::PARENT, parent_id).await?;
    let rows = store::list_children::<R>(&state.db, parent_id).await?;
    Ok(ApiResponse::ok(rows))
}

/// POST /api/<parent>/:parent_id/<records>
pub async fn create_child<R: Child>(
    State(state): State<AppState>,
    AppPath(parent_id): AppPath<i64>,
    AppJson(payload): AppJson<R::Payload>,
) -> Result<ApiResponse<R>, AppError> {
    payload.validate()?;
    ensure_exists(&state, R::PARENT, parent_id).await?;
    ensure_references(&state, &R::payload_references(&payload)).await?;

    let row = store::insert_child::<R, _>(&state.db, Some(parent_id), payload).await?;
    info!(
        "Created {} {} for {} {parent_id}",
        R::LABEL,
        row.id(),
        R::PARENT.label
    );
    Ok(ApiResponse::created(row))
}

/// GET /api/<parent>/:parent_id/<records>/:id
pub async fn get_child<R: Child>(
    State(state): State<AppState>,
    AppPath((parent_id, id)): AppPath<(i64, i64)>,
) -> Result<ApiResponse<R>, AppError> {
    let row = store::find_child::<R>(&state.db, parent_id, id)
        .await?
        .ok_or_else(|| not_found(R::LABEL))?;
    Ok(ApiResponse::ok(row))
}

/// PUT /api/<parent>/:parent_id/<records>/:id
pub async fn update_child<R: Child>(
    State(state): State<AppState>,
    AppPath((parent_id, id)): AppPath<(i64, i64)>,
    AppJson(patch): AppJson<R::Patch>,
) -> Result<ApiResponse<R>, AppError> {
    patch.validate()?;
    ensure_references(&state, &R::patch_references(&patch)).await?;

    let row = store::update_child::<R>(&state.db, parent_id, id, patch)
        .await?
        .ok_or_else(|| not_found(R::LABEL))?;
    info!("Updated {} {id}", R::LABEL);
    Ok(ApiResponse::ok(row))
}

/// DELETE /api/<parent>/:parent_id/<records>/:id
pub async fn delete_child<R: Child>(
    State(state): State<AppState>,
    AppPath((parent_id, id)): AppPath<(i64, i64)>,
) -> Result<ApiResponse<()>, AppError> {
    if !store::delete_child::<R>(&state.db, parent_id, id).await? {
        return Err(not_found(R::LABEL));
    }
    info!("Deleted {} {id}", R::LABEL);
    Ok(deleted(R::LABEL))
}

/// GET for records of a parent-owned table that have no parent.
pub async fn list_orphans<R: Child>(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<R>>, AppError> {
    let rows = store::list_orphans::<R>(&state.db).await?;
    Ok(ApiResponse::ok(rows))
}

/// POST for records of a parent-owned table that have no parent.
pub async fn create_orphan<R: Child>(
    State(state): State<AppState>,
    AppJson(payload): AppJson<R::Payload>,
) -> Result<ApiResponse<R>, AppError> {
    payload.validate()?;
    ensure_references(&state, &R::payload_references(&payload)).await?;

    let row = store::insert_child::<R, _>(&state.db, None, payload).await?;
    info!("Created {} {}", R::LABEL, row.id());
    Ok(ApiResponse::created(row))
}

// ── Top-level records ───────────────────────────────────────────────────────

/// GET /api/<records>
pub async fn list<R: Record>(State(state): State<AppState>) -> Result<ApiResponse<Vec<R>>, AppError> {
    let rows = store::list_all::<R>(&state.db).await?;
    Ok(ApiResponse::ok(rows))
}

/// POST /api/<records>
pub async fn create<R: Record>(
    State(state): State<AppState>,
    AppJson(payload): AppJson<R::Payload>,
) -> Result<ApiResponse<R>, AppError> {
    payload.validate()?;
    ensure_references(&state, &R::payload_references(&payload)).await?;

    let row = store::insert::<R, _>(&state.db, payload).await?;
    info!("Created {} {}", R::LABEL, row.id());
    Ok(ApiResponse::created(row))
}

/// GET /api/<records>/:id
pub async fn get<R: Record>(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<ApiResponse<R>, AppError> {
    let row = store::find::<R>(&state.db, id)
        .await?
        .ok_or_else(|| not_found(R::LABEL))?;
    Ok(ApiResponse::ok(row))
}

/// PUT /api/<records>/:id
pub async fn update<R: Record>(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(patch): AppJson<R::Patch>,
) -> Result<ApiResponse<R>, AppError> {
    patch.validate()?;
    ensure_references(&state, &R::patch_references(&patch)).await?;

    let row = store::update::<R>(&state.db, id, patch)
        .await?
        .ok_or_else(|| not_found(R::LABEL))?;
    info!("Updated {} {id}", R::LABEL);
    Ok(ApiResponse::ok(row))
}

/// DELETE /api/<records>/:id
pub async fn delete<R: Record>(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<ApiResponse<()>, AppError> {
    if !store::delete::<R>(&state.db, id).await? {
        return Err(not_found(R::LABEL));
    }
    info!("Deleted {} {id}", R::LABEL);
    Ok(deleted(R::LABEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(not_found("Career goal").to_string(), "Career goal not found");
    }

    #[test]
    fn test_deleted_message() {
        let body = serde_json::to_value(deleted("Milestone")).unwrap();
        assert_eq!(body["message"], "Milestone deleted successfully");
        assert!(body.get("data").is_none());
    }
}

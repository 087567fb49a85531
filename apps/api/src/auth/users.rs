use axum::extract::State;
use tracing::info;
use validator::Validate;

use super::models::{CreateUserRequest, UpdateUserRequest, User, DEFAULT_ROLE};
use super::{password, present, user_not_found};
use crate::crud::handlers::ensure_exists;
use crate::crud::WORKER;
use crate::errors::AppError;
use crate::response::{ApiResponse, AppJson, AppPath};
use crate::state::AppState;

async fn taken(state: &AppState, column: &str, value: &str) -> Result<bool, sqlx::Error> {
    let statement = format!("SELECT EXISTS(SELECT 1 FROM users WHERE {column} = $1)");
    sqlx::query_scalar::<_, bool>(&statement)
        .bind(value)
        .fetch_one(&state.db)
        .await
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<ApiResponse<Vec<User>>, AppError> {
    let users: Vec<User> = sqlx::query_as("SELECT * FROM users ORDER BY id")
        .fetch_all(&state.db)
        .await?;
    Ok(ApiResponse::ok(users))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> Result<ApiResponse<User>, AppError> {
    let (Some(username), Some(secret), Some(email)) =
        (present(req.username.clone()), req.password.clone(), present(req.email.clone()))
    else {
        return Err(AppError::BadRequest(
            "Username, password, and email are required".to_string(),
        ));
    };
    req.validate()?;

    // The unique constraints still catch a concurrent duplicate.
    if taken(&state, "username", &username).await? {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }
    if taken(&state, "email", &email).await? {
        return Err(AppError::Conflict("Email already exists".to_string()));
    }
    if let Some(worker_id) = req.worker_id {
        ensure_exists(&state, WORKER, worker_id).await?;
    }

    let hash = password::hash_password(secret).await?;
    let user: User = sqlx::query_as(
        r#"
        INSERT INTO users (username, password_hash, email, role, worker_id, is_active, mfa_enabled)
        VALUES ($1, $2, $3, $4, $5, TRUE, FALSE)
        RETURNING *
        "#,
    )
    .bind(&username)
    .bind(hash)
    .bind(&email)
    .bind(present(req.role).unwrap_or_else(|| DEFAULT_ROLE.to_string()))
    .bind(req.worker_id)
    .fetch_one(&state.db)
    .await?;

    info!("Created user {} ({username})", user.id);
    Ok(ApiResponse::created(user))
}

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<ApiResponse<User>, AppError> {
    let user: User = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(user_not_found)?;
    Ok(ApiResponse::ok(user))
}

/// PUT /api/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<UpdateUserRequest>,
) -> Result<ApiResponse<User>, AppError> {
    req.validate()?;
    if let Some(worker_id) = req.worker_id {
        ensure_exists(&state, WORKER, worker_id).await?;
    }

    let hash = match req.password {
        Some(secret) => Some(password::hash_password(secret).await?),
        None => None,
    };

    let user: User = sqlx::query_as(
        r#"
        UPDATE users SET
            email = COALESCE($2, email),
            role = COALESCE($3, role),
            is_active = COALESCE($4, is_active),
            password_hash = COALESCE($5, password_hash),
            worker_id = COALESCE($6, worker_id),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(req.email)
    .bind(req.role)
    .bind(req.is_active)
    .bind(hash)
    .bind(req.worker_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(user_not_found)?;

    info!("Updated user {id}");
    Ok(ApiResponse::ok(user))
}

/// DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<ApiResponse<()>, AppError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;
    if result.rows_affected() == 0 {
        return Err(user_not_found());
    }

    info!("Deleted user {id}");
    Ok(ApiResponse::message("User deleted successfully"))
}

use sqlx::{PgExecutor, PgPool};

use super::{sql, Child, Record, Relation};

pub async fn exists<'e, E>(executor: E, table: &str, id: i64) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let statement = sql::exists(table);
    sqlx::query_scalar::<_, bool>(&statement)
        .bind(id)
        .fetch_one(executor)
        .await
}

pub async fn count(pool: &PgPool, table: &str, column: &str, id: i64) -> Result<i64, sqlx::Error> {
    let statement = format!("SELECT COUNT(*) FROM {table} WHERE {column} = $1");
    sqlx::query_scalar::<_, i64>(&statement)
        .bind(id)
        .fetch_one(pool)
        .await
}

pub async fn count_all(pool: &PgPool, table: &str) -> Result<i64, sqlx::Error> {
    let statement = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar::<_, i64>(&statement)
        .fetch_one(pool)
        .await
}

pub async fn list_all<R: Record>(pool: &PgPool) -> Result<Vec<R>, sqlx::Error> {
    let statement = sql::select_all(R::TABLE, R::ORDER_BY);
    sqlx::query_as::<_, R>(&statement).fetch_all(pool).await
}

pub async fn list_children<R: Child>(pool: &PgPool, parent_id: i64) -> Result<Vec<R>, sqlx::Error> {
    list_by::<R>(pool, R::PARENT.column, parent_id).await
}

pub async fn list_by<R: Record>(pool: &PgPool, column: &str, value: i64) -> Result<Vec<R>, sqlx::Error> {
    let statement = sql::select_by_column(R::TABLE, column, R::ORDER_BY);
    sqlx::query_as::<_, R>(&statement)
        .bind(value)
        .fetch_all(pool)
        .await
}

/// Rows of a parent-owned table that belong to no parent.
pub async fn list_orphans<R: Child>(pool: &PgPool) -> Result<Vec<R>, sqlx::Error> {
    let statement = sql::select_where_null(R::TABLE, R::PARENT.column, R::ORDER_BY);
    sqlx::query_as::<_, R>(&statement).fetch_all(pool).await
}

pub async fn find<R: Record>(pool: &PgPool, id: i64) -> Result<Option<R>, sqlx::Error> {
    let statement = sql::select_by_id(R::TABLE, None);
    sqlx::query_as::<_, R>(&statement)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_child<R: Child>(
    pool: &PgPool,
    parent_id: i64,
    id: i64,
) -> Result<Option<R>, sqlx::Error> {
    let statement = sql::select_by_id(R::TABLE, Some(R::PARENT.column));
    sqlx::query_as::<_, R>(&statement)
        .bind(id)
        .bind(parent_id)
        .fetch_optional(pool)
        .await
}

pub async fn insert<'e, R, E>(executor: E, payload: R::Payload) -> Result<R, sqlx::Error>
where
    R: Record,
    E: PgExecutor<'e>,
{
    let statement = sql::insert(R::TABLE, None, R::COLUMNS);
    R::bind_payload(payload, sqlx::query_as::<_, R>(&statement))
        .fetch_one(executor)
        .await
}

/// Inserts a child row; `parent_id` of `None` stores a parentless row.
pub async fn insert_child<'e, R, E>(
    executor: E,
    parent_id: Option<i64>,
    payload: R::Payload,
) -> Result<R, sqlx::Error>
where
    R: Child,
    E: PgExecutor<'e>,
{
    let statement = sql::insert(R::TABLE, Some(R::PARENT.column), R::COLUMNS);
    let query = sqlx::query_as::<_, R>(&statement).bind(parent_id);
    R::bind_payload(payload, query).fetch_one(executor).await
}

pub async fn update<R: Record>(
    pool: &PgPool,
    id: i64,
    patch: R::Patch,
) -> Result<Option<R>, sqlx::Error> {
    let statement = sql::update(
        R::TABLE,
        R::PATCH_COLUMNS,
        R::UPDATE_MODE,
        None,
        R::HAS_UPDATED_AT,
    );
    let query = sqlx::query_as::<_, R>(&statement).bind(id);
    R::bind_patch(patch, query).fetch_optional(pool).await
}

pub async fn update_child<R: Child>(
    pool: &PgPool,
    parent_id: i64,
    id: i64,
    patch: R::Patch,
) -> Result<Option<R>, sqlx::Error> {
    let statement = sql::update(
        R::TABLE,
        R::PATCH_COLUMNS,
        R::UPDATE_MODE,
        Some(R::PARENT.column),
        R::HAS_UPDATED_AT,
    );
    let query = sqlx::query_as::<_, R>(&statement).bind(id).bind(parent_id);
    R::bind_patch(patch, query).fetch_optional(pool).await
}

/// Returns whether a row was removed.
pub async fn delete<R: Record>(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let statement = sql::delete(R::TABLE, None);
    let result = sqlx::query(&statement).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_child<R: Child>(pool: &PgPool, parent_id: i64, id: i64) -> Result<bool, sqlx::Error> {
    let statement = sql::delete(R::TABLE, Some(R::PARENT.column));
    let result = sqlx::query(&statement)
        .bind(id)
        .bind(parent_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// First relation in `references` whose row is missing, if any.
pub async fn first_missing(
    pool: &PgPool,
    references: &[(Relation, i64)],
) -> Result<Option<Relation>, sqlx::Error> {
    for (relation, id) in references {
        if !exists(pool, relation.table, *id).await? {
            return Ok(Some(*relation));
        }
    }
    Ok(None)
}

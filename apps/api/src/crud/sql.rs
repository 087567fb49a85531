//! Statement builders for the generic record store.
//!
//! Identifiers come from `&'static str` constants on `Record` impls, never
//! from request data; values are always bound as `$n` parameters.

use super::UpdateMode;

pub fn select_by_id(table: &str, scope: Option<&str>) -> String {
    match scope {
        Some(column) => format!("SELECT * FROM {table} WHERE id = $1 AND {column} = $2"),
        None => format!("SELECT * FROM {table} WHERE id = $1"),
    }
}

pub fn select_by_column(table: &str, column: &str, order_by: &str) -> String {
    format!("SELECT * FROM {table} WHERE {column} = $1 ORDER BY {order_by}")
}

pub fn select_where_null(table: &str, column: &str, order_by: &str) -> String {
    format!("SELECT * FROM {table} WHERE {column} IS NULL ORDER BY {order_by}")
}

pub fn select_all(table: &str, order_by: &str) -> String {
    format!("SELECT * FROM {table} ORDER BY {order_by}")
}

pub fn exists(table: &str) -> String {
    format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = $1)")
}

/// `INSERT ... RETURNING *`; the parent column, when present, is `$1`.
pub fn insert(table: &str, parent: Option<&str>, columns: &[&str]) -> String {
    let names: Vec<&str> = parent.into_iter().chain(columns.iter().copied()).collect();
    let placeholders: Vec<String> = (1..=names.len()).map(|n| format!("${n}")).collect();
    format!(
        "INSERT INTO {table} ({}) VALUES ({}) RETURNING *",
        names.join(", "),
        placeholders.join(", ")
    )
}

/// `UPDATE ... RETURNING *` keyed by `$1` (and the scope column as `$2`).
///
/// `Merge` keeps the stored value wherever the bound parameter is NULL.
pub fn update(
    table: &str,
    columns: &[&str],
    mode: UpdateMode,
    scope: Option<&str>,
    touch_updated_at: bool,
) -> String {
    let first = if scope.is_some() { 3 } else { 2 };
    let mut assignments: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let n = first + i;
            match mode {
                UpdateMode::Replace => format!("{column} = ${n}"),
                UpdateMode::Merge => format!("{column} = COALESCE(${n}, {column})"),
            }
        })
        .collect();
    if touch_updated_at {
        assignments.push("updated_at = now()".to_string());
    }

    let filter = match scope {
        Some(column) => format!("id = $1 AND {column} = $2"),
        None => "id = $1".to_string(),
    };
    format!(
        "UPDATE {table} SET {} WHERE {filter} RETURNING *",
        assignments.join(", ")
    )
}

pub fn delete(table: &str, scope: Option<&str>) -> String {
    match scope {
        Some(column) => format!("DELETE FROM {table} WHERE id = $1 AND {column} = $2"),
        None => format!("DELETE FROM {table} WHERE id = $1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_with_parent_column_first() {
        assert_eq!(
            insert("milestones", Some("worker_id"), &["title", "target_date"]),
            "INSERT INTO milestones (worker_id, title, target_date) VALUES ($1, $2, $3) RETURNING *"
        );
    }

    #[test]
    fn test_insert_without_parent() {
        assert_eq!(
            insert("trainings", None, &["title"]),
            "INSERT INTO trainings (title) VALUES ($1) RETURNING *"
        );
    }

    #[test]
    fn test_replace_update_scoped_to_parent() {
        assert_eq!(
            update("documents", &["title", "file_size"], UpdateMode::Replace, Some("worker_id"), true),
            "UPDATE documents SET title = $3, file_size = $4, updated_at = now() \
             WHERE id = $1 AND worker_id = $2 RETURNING *"
        );
    }

    #[test]
    fn test_merge_update_coalesces_every_column() {
        assert_eq!(
            update("career_goals", &["status", "notes"], UpdateMode::Merge, Some("worker_id"), true),
            "UPDATE career_goals SET status = COALESCE($3, status), notes = COALESCE($4, notes), \
             updated_at = now() WHERE id = $1 AND worker_id = $2 RETURNING *"
        );
    }

    #[test]
    fn test_update_without_scope_or_timestamp() {
        assert_eq!(
            update("messages", &["is_read"], UpdateMode::Replace, None, false),
            "UPDATE messages SET is_read = $2 WHERE id = $1 RETURNING *"
        );
    }

    #[test]
    fn test_select_and_delete_scoping() {
        assert_eq!(
            select_by_id("evaluations", Some("worker_id")),
            "SELECT * FROM evaluations WHERE id = $1 AND worker_id = $2"
        );
        assert_eq!(delete("reports", None), "DELETE FROM reports WHERE id = $1");
        assert_eq!(
            select_where_null("calendar_events", "worker_id", "start_datetime"),
            "SELECT * FROM calendar_events WHERE worker_id IS NULL ORDER BY start_datetime"
        );
    }
}

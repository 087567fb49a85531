//! Generic record CRUD shared by every resource vertical.
//!
//! A resource is a row struct implementing [`Record`] (and [`Child`] when it
//! hangs off a parent row). The store builds its statements from the column
//! lists and the handlers wrap them in the response envelope.

pub mod handlers;
pub mod sql;
pub mod store;

use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};
use validator::Validate;

pub type RecordQuery<'q, R> = QueryAs<'q, Postgres, R, PgArguments>;

/// A table another table points at through a foreign key column.
#[derive(Debug, Clone, Copy)]
pub struct Relation {
    pub table: &'static str,
    pub column: &'static str,
    pub label: &'static str,
}

pub const WORKER: Relation = Relation {
    table: "workers",
    column: "worker_id",
    label: "Worker",
};

pub const TRAINING: Relation = Relation {
    table: "trainings",
    column: "training_id",
    label: "Training",
};

pub const TRAINING_MENU: Relation = Relation {
    table: "training_menus",
    column: "training_menu_id",
    label: "Training menu",
};

pub const TRAINING_SESSION: Relation = Relation {
    table: "training_sessions",
    column: "training_session_id",
    label: "Training session",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Every writable column is taken from the body; omitted fields reset.
    Replace,
    /// Only fields present in the body overwrite stored values.
    Merge,
}

pub trait Record: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static {
    type Payload: DeserializeOwned + Validate + Send + 'static;
    type Patch: DeserializeOwned + Validate + Send + 'static;

    const TABLE: &'static str;
    /// Human label used in `"<Label> not found"` style messages.
    const LABEL: &'static str;
    /// Writable columns, in the order `bind_payload` binds them.
    const COLUMNS: &'static [&'static str];
    /// Columns touched by updates, in the order `bind_patch` binds them.
    const PATCH_COLUMNS: &'static [&'static str];
    const UPDATE_MODE: UpdateMode;
    const HAS_UPDATED_AT: bool = true;
    const ORDER_BY: &'static str = "id";

    fn id(&self) -> i64;

    fn bind_payload<'q>(
        payload: Self::Payload,
        query: RecordQuery<'q, Self>,
    ) -> RecordQuery<'q, Self>;

    fn bind_patch<'q>(patch: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self>;

    /// Rows referenced by a create body that must exist before the write.
    fn payload_references(_payload: &Self::Payload) -> Vec<(Relation, i64)> {
        Vec::new()
    }

    fn patch_references(_patch: &Self::Patch) -> Vec<(Relation, i64)> {
        Vec::new()
    }
}

/// A record owned by a parent row through `PARENT.column`.
pub trait Child: Record {
    const PARENT: Relation;
}

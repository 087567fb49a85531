use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, WORKER};

/// A generated report; `report_data` is an opaque client-supplied document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub worker_id: Option<i64>,
    pub report_type: String,
    pub title: String,
    pub description: Option<String>,
    pub report_data: Option<String>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub generated_by: Option<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_period", skip_on_field_errors = true))]
pub struct ReportPayload {
    #[validate(required, length(min = 1, max = 50))]
    pub report_type: Option<String>,
    #[validate(required, length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub report_data: Option<String>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    #[validate(length(max = 100))]
    pub generated_by: Option<String>,
}

fn validate_period(payload: &ReportPayload) -> Result<(), ValidationError> {
    match (payload.period_start, payload.period_end) {
        (Some(start), Some(end)) if end < start => {
            let mut error = ValidationError::new("period");
            error.message = Some("periodEnd must not be before periodStart".into());
            Err(error)
        }
        _ => Ok(()),
    }
}

impl Record for Report {
    type Payload = ReportPayload;
    type Patch = ReportPayload;

    const TABLE: &'static str = "reports";
    const LABEL: &'static str = "Report";
    const COLUMNS: &'static [&'static str] = &[
        "report_type",
        "title",
        "description",
        "report_data",
        "period_start",
        "period_end",
        "generated_by",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const HAS_UPDATED_AT: bool = false;
    const ORDER_BY: &'static str = "generated_at DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.report_type)
            .bind(p.title)
            .bind(p.description)
            .bind(p.report_data)
            .bind(p.period_start)
            .bind(p.period_end)
            .bind(p.generated_by)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for Report {
    const PARENT: Relation = WORKER;
}

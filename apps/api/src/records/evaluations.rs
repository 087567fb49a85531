use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, WORKER};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: i64,
    pub worker_id: i64,
    pub evaluator: String,
    pub evaluation_type: String,
    pub evaluation_date: NaiveDate,
    pub overall_score: Option<f64>,
    pub communication_score: Option<f64>,
    pub technical_score: Option<f64>,
    pub attitude_score: Option<f64>,
    pub punctuality_score: Option<f64>,
    pub teamwork_score: Option<f64>,
    pub comments: Option<String>,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub next_review_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationPayload {
    #[validate(required, length(min = 1, max = 100))]
    pub evaluator: Option<String>,
    #[validate(required, length(min = 1, max = 50))]
    pub evaluation_type: Option<String>,
    #[validate(required)]
    pub evaluation_date: Option<NaiveDate>,
    pub overall_score: Option<f64>,
    pub communication_score: Option<f64>,
    pub technical_score: Option<f64>,
    pub attitude_score: Option<f64>,
    pub punctuality_score: Option<f64>,
    pub teamwork_score: Option<f64>,
    pub comments: Option<String>,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub next_review_date: Option<NaiveDate>,
}

impl Record for Evaluation {
    type Payload = EvaluationPayload;
    type Patch = EvaluationPayload;

    const TABLE: &'static str = "evaluations";
    const LABEL: &'static str = "Evaluation";
    const COLUMNS: &'static [&'static str] = &[
        "evaluator",
        "evaluation_type",
        "evaluation_date",
        "overall_score",
        "communication_score",
        "technical_score",
        "attitude_score",
        "punctuality_score",
        "teamwork_score",
        "comments",
        "strengths",
        "areas_for_improvement",
        "next_review_date",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const ORDER_BY: &'static str = "evaluation_date DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.evaluator)
            .bind(p.evaluation_type)
            .bind(p.evaluation_date)
            .bind(p.overall_score)
            .bind(p.communication_score)
            .bind(p.technical_score)
            .bind(p.attitude_score)
            .bind(p.punctuality_score)
            .bind(p.teamwork_score)
            .bind(p.comments)
            .bind(p.strengths)
            .bind(p.areas_for_improvement)
            .bind(p.next_review_date)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for Evaluation {
    const PARENT: Relation = WORKER;
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, WORKER};

/// Point-in-time snapshot of a worker's scores across growth areas.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct IntegratedGrowth {
    pub id: i64,
    pub worker_id: i64,
    pub record_date: NaiveDate,
    pub japanese_proficiency_score: Option<f64>,
    pub technical_skill_score: Option<f64>,
    pub safety_awareness_score: Option<f64>,
    pub communication_score: Option<f64>,
    pub overall_score: Option<f64>,
    pub growth_areas: Option<String>,
    pub improvement_plan: Option<String>,
    pub achievements: Option<String>,
    pub challenges: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IntegratedGrowthPayload {
    #[validate(required)]
    pub record_date: Option<NaiveDate>,
    pub japanese_proficiency_score: Option<f64>,
    pub technical_skill_score: Option<f64>,
    pub safety_awareness_score: Option<f64>,
    pub communication_score: Option<f64>,
    pub overall_score: Option<f64>,
    pub growth_areas: Option<String>,
    pub improvement_plan: Option<String>,
    pub achievements: Option<String>,
    pub challenges: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IntegratedGrowthPatch {
    pub notes: Option<String>,
}

impl Record for IntegratedGrowth {
    type Payload = IntegratedGrowthPayload;
    type Patch = IntegratedGrowthPatch;

    const TABLE: &'static str = "integrated_growths";
    const LABEL: &'static str = "Growth record";
    const COLUMNS: &'static [&'static str] = &[
        "record_date",
        "japanese_proficiency_score",
        "technical_skill_score",
        "safety_awareness_score",
        "communication_score",
        "overall_score",
        "growth_areas",
        "improvement_plan",
        "achievements",
        "challenges",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = &["notes"];
    const UPDATE_MODE: UpdateMode = UpdateMode::Merge;
    const ORDER_BY: &'static str = "record_date DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.record_date)
            .bind(p.japanese_proficiency_score)
            .bind(p.technical_skill_score)
            .bind(p.safety_awareness_score)
            .bind(p.communication_score)
            .bind(p.overall_score)
            .bind(p.growth_areas)
            .bind(p.improvement_plan)
            .bind(p.achievements)
            .bind(p.challenges)
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query.bind(p.notes)
    }
}

impl Child for IntegratedGrowth {
    const PARENT: Relation = WORKER;
}

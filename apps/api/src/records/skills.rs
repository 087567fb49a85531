//! Skill training courses and specific-skill visa transitions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, WORKER};

pub const TRAINING_DEFAULT_STATUS: &str = "受講中";
pub const TRANSITION_DEFAULT_STATUS: &str = "計画中";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SkillTraining {
    pub id: i64,
    pub worker_id: i64,
    pub skill_category: String,
    pub skill_name: String,
    pub training_start_date: NaiveDate,
    pub training_end_date: Option<NaiveDate>,
    pub training_hours: Option<i32>,
    pub training_location: Option<String>,
    pub instructor: Option<String>,
    pub training_method: Option<String>,
    pub status: Option<String>,
    pub completion_rate: Option<f64>,
    pub evaluation_score: Option<f64>,
    pub certificate_issued: Option<bool>,
    pub certificate_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SkillTrainingPayload {
    #[validate(required, length(min = 1, max = 100))]
    pub skill_category: Option<String>,
    #[validate(required, length(min = 1, max = 200))]
    pub skill_name: Option<String>,
    #[validate(required)]
    pub training_start_date: Option<NaiveDate>,
    pub training_end_date: Option<NaiveDate>,
    #[validate(range(min = 0))]
    pub training_hours: Option<i32>,
    #[validate(length(max = 200))]
    pub training_location: Option<String>,
    #[validate(length(max = 100))]
    pub instructor: Option<String>,
    #[validate(length(max = 50))]
    pub training_method: Option<String>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub completion_rate: Option<f64>,
    pub evaluation_score: Option<f64>,
    pub certificate_issued: Option<bool>,
    #[validate(length(max = 100))]
    pub certificate_number: Option<String>,
    pub notes: Option<String>,
}

impl Record for SkillTraining {
    type Payload = SkillTrainingPayload;
    type Patch = SkillTrainingPayload;

    const TABLE: &'static str = "skill_trainings";
    const LABEL: &'static str = "Skill training";
    const COLUMNS: &'static [&'static str] = &[
        "skill_category",
        "skill_name",
        "training_start_date",
        "training_end_date",
        "training_hours",
        "training_location",
        "instructor",
        "training_method",
        "status",
        "completion_rate",
        "evaluation_score",
        "certificate_issued",
        "certificate_number",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const ORDER_BY: &'static str = "training_start_date DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.skill_category)
            .bind(p.skill_name)
            .bind(p.training_start_date)
            .bind(p.training_end_date)
            .bind(p.training_hours.unwrap_or(0))
            .bind(p.training_location)
            .bind(p.instructor)
            .bind(p.training_method)
            .bind(p.status.unwrap_or_else(|| TRAINING_DEFAULT_STATUS.to_string()))
            .bind(p.completion_rate)
            .bind(p.evaluation_score)
            .bind(p.certificate_issued.unwrap_or(false))
            .bind(p.certificate_number)
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for SkillTraining {
    const PARENT: Relation = WORKER;
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SpecificSkillTransition {
    pub id: i64,
    pub worker_id: i64,
    pub transition_date: NaiveDate,
    pub from_skill: String,
    pub to_skill: String,
    pub transition_type: Option<String>,
    pub reason: Option<String>,
    pub required_training: Option<String>,
    pub support_provided: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpecificSkillTransitionPayload {
    #[validate(required)]
    pub transition_date: Option<NaiveDate>,
    #[validate(required, length(min = 1, max = 100))]
    pub from_skill: Option<String>,
    #[validate(required, length(min = 1, max = 100))]
    pub to_skill: Option<String>,
    #[validate(length(max = 50))]
    pub transition_type: Option<String>,
    pub reason: Option<String>,
    pub required_training: Option<String>,
    pub support_provided: Option<String>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Fields a transition update may change; everything else is kept.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpecificSkillTransitionPatch {
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl Record for SpecificSkillTransition {
    type Payload = SpecificSkillTransitionPayload;
    type Patch = SpecificSkillTransitionPatch;

    const TABLE: &'static str = "specific_skill_transitions";
    const LABEL: &'static str = "Transition";
    const COLUMNS: &'static [&'static str] = &[
        "transition_date",
        "from_skill",
        "to_skill",
        "transition_type",
        "reason",
        "required_training",
        "support_provided",
        "status",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = &["status", "notes"];
    const UPDATE_MODE: UpdateMode = UpdateMode::Merge;
    const ORDER_BY: &'static str = "transition_date DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.transition_date)
            .bind(p.from_skill)
            .bind(p.to_skill)
            .bind(p.transition_type)
            .bind(p.reason)
            .bind(p.required_training)
            .bind(p.support_provided)
            .bind(p.status.unwrap_or_else(|| TRANSITION_DEFAULT_STATUS.to_string()))
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query.bind(p.status).bind(p.notes)
    }
}

impl Child for SpecificSkillTransition {
    const PARENT: Relation = WORKER;
}

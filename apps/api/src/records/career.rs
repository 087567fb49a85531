//! Career planning: goals, long-range paths and dated milestones.
//!
//! Updates to all three merge the given fields into the stored row.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, WORKER};

pub const GOAL_DEFAULT_STATUS: &str = "設定済み";
pub const PATH_DEFAULT_STATUS: &str = "計画中";
pub const MILESTONE_DEFAULT_STATUS: &str = "予定";

// ── Career goals ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CareerGoal {
    pub id: i64,
    pub worker_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub target_date: NaiveDate,
    pub achieved_date: Option<NaiveDate>,
    pub goal_category: Option<String>,
    pub action_steps: Option<String>,
    pub success_criteria: Option<String>,
    pub progress_percentage: Option<f64>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CareerGoalPayload {
    #[validate(required, length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(required)]
    pub target_date: Option<NaiveDate>,
    pub achieved_date: Option<NaiveDate>,
    #[validate(length(max = 50))]
    pub goal_category: Option<String>,
    pub action_steps: Option<String>,
    pub success_criteria: Option<String>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub progress_percentage: Option<f64>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CareerGoalPatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub progress_percentage: Option<f64>,
    pub notes: Option<String>,
}

impl Record for CareerGoal {
    type Payload = CareerGoalPayload;
    type Patch = CareerGoalPatch;

    const TABLE: &'static str = "career_goals";
    const LABEL: &'static str = "Career goal";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "target_date",
        "achieved_date",
        "goal_category",
        "action_steps",
        "success_criteria",
        "progress_percentage",
        "status",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] =
        &["title", "description", "status", "progress_percentage", "notes"];
    const UPDATE_MODE: UpdateMode = UpdateMode::Merge;
    const ORDER_BY: &'static str = "target_date, id";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.title)
            .bind(p.description)
            .bind(p.target_date)
            .bind(p.achieved_date)
            .bind(p.goal_category)
            .bind(p.action_steps)
            .bind(p.success_criteria)
            .bind(p.progress_percentage)
            .bind(p.status.unwrap_or_else(|| GOAL_DEFAULT_STATUS.to_string()))
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.title)
            .bind(p.description)
            .bind(p.status)
            .bind(p.progress_percentage)
            .bind(p.notes)
    }
}

impl Child for CareerGoal {
    const PARENT: Relation = WORKER;
}

// ── Career paths ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub id: i64,
    pub worker_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub target_date: Option<NaiveDate>,
    pub career_level: Option<String>,
    pub target_position: Option<String>,
    pub required_skills: Option<String>,
    pub action_plan: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathPayload {
    #[validate(required, length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(required)]
    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
    #[validate(length(max = 50))]
    pub career_level: Option<String>,
    #[validate(length(max = 100))]
    pub target_position: Option<String>,
    pub required_skills: Option<String>,
    pub action_plan: Option<String>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathPatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl Record for CareerPath {
    type Payload = CareerPathPayload;
    type Patch = CareerPathPatch;

    const TABLE: &'static str = "career_paths";
    const LABEL: &'static str = "Career path";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "start_date",
        "target_date",
        "career_level",
        "target_position",
        "required_skills",
        "action_plan",
        "status",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "start_date",
        "target_date",
        "status",
        "notes",
    ];
    const UPDATE_MODE: UpdateMode = UpdateMode::Merge;
    const ORDER_BY: &'static str = "start_date, id";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.title)
            .bind(p.description)
            .bind(p.start_date)
            .bind(p.target_date)
            .bind(p.career_level)
            .bind(p.target_position)
            .bind(p.required_skills)
            .bind(p.action_plan)
            .bind(p.status.unwrap_or_else(|| PATH_DEFAULT_STATUS.to_string()))
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.title)
            .bind(p.description)
            .bind(p.start_date)
            .bind(p.target_date)
            .bind(p.status)
            .bind(p.notes)
    }
}

impl Child for CareerPath {
    const PARENT: Relation = WORKER;
}

// ── Milestones ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: i64,
    pub worker_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub target_date: NaiveDate,
    pub achieved_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MilestonePayload {
    #[validate(required, length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(required)]
    pub target_date: Option<NaiveDate>,
    pub achieved_date: Option<NaiveDate>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MilestonePatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_date: Option<NaiveDate>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
    pub notes: Option<String>,
}

impl Record for Milestone {
    type Payload = MilestonePayload;
    type Patch = MilestonePatch;

    const TABLE: &'static str = "milestones";
    const LABEL: &'static str = "Milestone";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "target_date",
        "achieved_date",
        "status",
        "category",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "target_date",
        "status",
        "category",
        "notes",
    ];
    const UPDATE_MODE: UpdateMode = UpdateMode::Merge;
    const ORDER_BY: &'static str = "target_date, id";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.title)
            .bind(p.description)
            .bind(p.target_date)
            .bind(p.achieved_date)
            .bind(p.status.unwrap_or_else(|| MILESTONE_DEFAULT_STATUS.to_string()))
            .bind(p.category)
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.title)
            .bind(p.description)
            .bind(p.target_date)
            .bind(p.status)
            .bind(p.category)
            .bind(p.notes)
    }
}

impl Child for Milestone {
    const PARENT: Relation = WORKER;
}

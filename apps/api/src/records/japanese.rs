//! Japanese proficiency test results and day-to-day learning records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, WORKER};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JapaneseProficiency {
    pub id: i64,
    pub worker_id: i64,
    pub test_date: NaiveDate,
    pub test_type: String,
    pub level: Option<String>,
    pub reading_score: Option<i32>,
    pub listening_score: Option<i32>,
    pub writing_score: Option<i32>,
    pub speaking_score: Option<i32>,
    pub total_score: Option<i32>,
    pub passed: Option<bool>,
    pub certificate_number: Option<String>,
    pub certificate_issued_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JapaneseProficiencyPayload {
    #[validate(required)]
    pub test_date: Option<NaiveDate>,
    #[validate(required, length(min = 1, max = 50))]
    pub test_type: Option<String>,
    #[validate(length(max = 20))]
    pub level: Option<String>,
    pub reading_score: Option<i32>,
    pub listening_score: Option<i32>,
    pub writing_score: Option<i32>,
    pub speaking_score: Option<i32>,
    pub total_score: Option<i32>,
    pub passed: Option<bool>,
    #[validate(length(max = 100))]
    pub certificate_number: Option<String>,
    pub certificate_issued_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Record for JapaneseProficiency {
    type Payload = JapaneseProficiencyPayload;
    type Patch = JapaneseProficiencyPayload;

    const TABLE: &'static str = "japanese_proficiencies";
    const LABEL: &'static str = "Japanese proficiency";
    const COLUMNS: &'static [&'static str] = &[
        "test_date",
        "test_type",
        "level",
        "reading_score",
        "listening_score",
        "writing_score",
        "speaking_score",
        "total_score",
        "passed",
        "certificate_number",
        "certificate_issued_date",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const ORDER_BY: &'static str = "test_date DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.test_date)
            .bind(p.test_type)
            .bind(p.level)
            .bind(p.reading_score)
            .bind(p.listening_score)
            .bind(p.writing_score)
            .bind(p.speaking_score)
            .bind(p.total_score)
            .bind(p.passed.unwrap_or(false))
            .bind(p.certificate_number)
            .bind(p.certificate_issued_date)
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for JapaneseProficiency {
    const PARENT: Relation = WORKER;
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JapaneseLearningRecord {
    pub id: i64,
    pub worker_id: i64,
    pub learning_date: NaiveDate,
    pub learning_type: String,
    pub learning_content: String,
    pub topics_covered: Option<String>,
    pub duration_minutes: Option<i32>,
    pub vocabulary_learned: Option<i32>,
    pub grammar_points: Option<String>,
    pub practice_activities: Option<String>,
    pub difficulty_level: Option<String>,
    pub self_rating: Option<i32>,
    pub instructor_feedback: Option<String>,
    pub homework_assigned: Option<String>,
    pub homework_completed: Option<bool>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JapaneseLearningRecordPayload {
    #[validate(required)]
    pub learning_date: Option<NaiveDate>,
    #[validate(required, length(min = 1, max = 50))]
    pub learning_type: Option<String>,
    #[validate(required, length(min = 1))]
    pub learning_content: Option<String>,
    pub topics_covered: Option<String>,
    #[validate(range(min = 0))]
    pub duration_minutes: Option<i32>,
    #[validate(range(min = 0))]
    pub vocabulary_learned: Option<i32>,
    pub grammar_points: Option<String>,
    pub practice_activities: Option<String>,
    #[validate(length(max = 20))]
    pub difficulty_level: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub self_rating: Option<i32>,
    pub instructor_feedback: Option<String>,
    pub homework_assigned: Option<String>,
    pub homework_completed: Option<bool>,
    pub notes: Option<String>,
}

impl Record for JapaneseLearningRecord {
    type Payload = JapaneseLearningRecordPayload;
    type Patch = JapaneseLearningRecordPayload;

    const TABLE: &'static str = "japanese_learning_records";
    const LABEL: &'static str = "Japanese learning record";
    const COLUMNS: &'static [&'static str] = &[
        "learning_date",
        "learning_type",
        "learning_content",
        "topics_covered",
        "duration_minutes",
        "vocabulary_learned",
        "grammar_points",
        "practice_activities",
        "difficulty_level",
        "self_rating",
        "instructor_feedback",
        "homework_assigned",
        "homework_completed",
        "notes",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const ORDER_BY: &'static str = "learning_date DESC, id DESC";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.learning_date)
            .bind(p.learning_type)
            .bind(p.learning_content)
            .bind(p.topics_covered)
            .bind(p.duration_minutes)
            .bind(p.vocabulary_learned)
            .bind(p.grammar_points)
            .bind(p.practice_activities)
            .bind(p.difficulty_level)
            .bind(p.self_rating)
            .bind(p.instructor_feedback)
            .bind(p.homework_assigned)
            .bind(p.homework_completed.unwrap_or(false))
            .bind(p.notes)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for JapaneseLearningRecord {
    const PARENT: Relation = WORKER;
}

use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::crud::{Record, RecordQuery, UpdateMode};
use crate::errors::AppError;
use crate::response::{ApiResponse, AppQuery};
use crate::state::AppState;

/// A simulator scenario template with the targets a run is scored against.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrainingMenu {
    pub id: i64,
    pub menu_name: String,
    pub scenario_id: String,
    pub scenario_description: Option<String>,
    pub target_safety_score: Option<f64>,
    pub target_error_count: Option<i32>,
    pub target_procedure_compliance: Option<f64>,
    pub target_work_time: Option<i32>,
    pub target_achievement_rate: Option<f64>,
    pub equipment_type: String,
    pub difficulty_level: String,
    pub time_limit: Option<i32>,
    pub is_active: Option<bool>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrainingMenuPayload {
    #[validate(
        required(message = "メニュー名は必須です"),
        length(min = 1, max = 200, message = "メニュー名は200文字以内で入力してください")
    )]
    pub menu_name: Option<String>,
    #[validate(
        required(message = "シナリオIDは必須です"),
        length(min = 1, max = 100, message = "シナリオIDは100文字以内で入力してください")
    )]
    pub scenario_id: Option<String>,
    pub scenario_description: Option<String>,
    pub target_safety_score: Option<f64>,
    pub target_error_count: Option<i32>,
    pub target_procedure_compliance: Option<f64>,
    pub target_work_time: Option<i32>,
    pub target_achievement_rate: Option<f64>,
    #[validate(
        required(message = "使用重機は必須です"),
        length(min = 1, max = 100, message = "使用重機は100文字以内で入力してください")
    )]
    pub equipment_type: Option<String>,
    #[validate(
        required(message = "難易度は必須です"),
        length(min = 1, max = 20, message = "難易度は20文字以内で入力してください")
    )]
    pub difficulty_level: Option<String>,
    pub time_limit: Option<i32>,
    pub is_active: Option<bool>,
    #[validate(length(max = 100, message = "作成者は100文字以内で入力してください"))]
    pub created_by: Option<String>,
}

impl Record for TrainingMenu {
    type Payload = TrainingMenuPayload;
    type Patch = TrainingMenuPayload;

    const TABLE: &'static str = "training_menus";
    const LABEL: &'static str = "Training menu";
    const COLUMNS: &'static [&'static str] = &[
        "menu_name",
        "scenario_id",
        "scenario_description",
        "target_safety_score",
        "target_error_count",
        "target_procedure_compliance",
        "target_work_time",
        "target_achievement_rate",
        "equipment_type",
        "difficulty_level",
        "time_limit",
        "is_active",
        "created_by",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.menu_name)
            .bind(p.scenario_id)
            .bind(p.scenario_description)
            .bind(p.target_safety_score)
            .bind(p.target_error_count)
            .bind(p.target_procedure_compliance)
            .bind(p.target_work_time)
            .bind(p.target_achievement_rate)
            .bind(p.equipment_type)
            .bind(p.difficulty_level)
            .bind(p.time_limit)
            .bind(p.is_active.unwrap_or(true))
            .bind(p.created_by)
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TrainingMenuFilter {
    #[serde(default)]
    pub active_only: bool,
    #[serde(rename = "difficultyLevel")]
    pub difficulty_level: Option<String>,
}

/// GET /api/training-menus
pub async fn list_training_menus(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<TrainingMenuFilter>,
) -> Result<ApiResponse<Vec<TrainingMenu>>, AppError> {
    let menus: Vec<TrainingMenu> = sqlx::query_as(
        r#"
        SELECT * FROM training_menus
        WHERE (NOT $1 OR is_active = TRUE)
          AND ($2::text IS NULL OR difficulty_level = $2)
        ORDER BY id
        "#,
    )
    .bind(filter.active_only)
    .bind(filter.difficulty_level)
    .fetch_all(&state.db)
    .await?;

    Ok(ApiResponse::ok(menus))
}

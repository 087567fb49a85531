use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::crud::{Child, Record, RecordQuery, Relation, UpdateMode, WORKER};

pub const DEFAULT_COLOR: &str = "blue";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: i64,
    pub worker_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: NaiveDateTime,
    pub location: Option<String>,
    pub attendees: Option<String>,
    pub is_all_day: Option<bool>,
    pub reminder_minutes: Option<i32>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_event_window", skip_on_field_errors = true))]
pub struct CalendarEventPayload {
    #[validate(required, length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(required, length(min = 1, max = 50))]
    pub event_type: Option<String>,
    #[validate(required)]
    pub start_datetime: Option<NaiveDateTime>,
    #[validate(required)]
    pub end_datetime: Option<NaiveDateTime>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    pub attendees: Option<String>,
    pub is_all_day: Option<bool>,
    #[validate(range(min = 0))]
    pub reminder_minutes: Option<i32>,
    #[validate(length(max = 20))]
    pub color: Option<String>,
}

fn validate_event_window(payload: &CalendarEventPayload) -> Result<(), ValidationError> {
    match (payload.start_datetime, payload.end_datetime) {
        (Some(start), Some(end)) if end < start => {
            let mut error = ValidationError::new("event_window");
            error.message = Some("end must not be before start".into());
            Err(error)
        }
        _ => Ok(()),
    }
}

impl Record for CalendarEvent {
    type Payload = CalendarEventPayload;
    type Patch = CalendarEventPayload;

    const TABLE: &'static str = "calendar_events";
    const LABEL: &'static str = "Calendar event";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "event_type",
        "start_datetime",
        "end_datetime",
        "location",
        "attendees",
        "is_all_day",
        "reminder_minutes",
        "color",
    ];
    const PATCH_COLUMNS: &'static [&'static str] = Self::COLUMNS;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const ORDER_BY: &'static str = "start_datetime, id";

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_payload<'q>(p: Self::Payload, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        query
            .bind(p.title)
            .bind(p.description)
            .bind(p.event_type)
            .bind(p.start_datetime)
            .bind(p.end_datetime)
            .bind(p.location)
            .bind(p.attendees)
            .bind(p.is_all_day.unwrap_or(false))
            .bind(p.reminder_minutes)
            .bind(p.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()))
    }

    fn bind_patch<'q>(p: Self::Patch, query: RecordQuery<'q, Self>) -> RecordQuery<'q, Self> {
        Self::bind_payload(p, query)
    }
}

impl Child for CalendarEvent {
    const PARENT: Relation = WORKER;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32) -> Option<NaiveDateTime> {
        chrono::NaiveDate::from_ymd_opt(2025, 7, 1)?.and_hms_opt(hour, 0, 0)
    }

    fn event(start: u32, end: u32) -> CalendarEventPayload {
        CalendarEventPayload {
            title: Some("安全講習".into()),
            event_type: Some("training".into()),
            start_datetime: at(start),
            end_datetime: at(end),
            ..Default::default()
        }
    }

    #[test]
    fn test_event_window_ordering() {
        assert!(event(9, 10).validate().is_ok());
        assert!(event(9, 9).validate().is_ok());
        assert!(event(10, 9).validate().is_err());
    }

    #[test]
    fn test_local_datetime_format() {
        let payload: CalendarEventPayload = serde_json::from_value(serde_json::json!({
            "title": "面談",
            "eventType": "meeting",
            "startDatetime": "2025-07-01T09:00:00",
            "endDatetime": "2025-07-01T10:30:00"
        }))
        .unwrap();
        assert_eq!(payload.start_datetime, at(9));
    }
}

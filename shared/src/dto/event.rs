use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use crate::dto::common::MaybeJoined;
use crate::dto::team::TeamRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Training,
    Match,
    Meeting,
    Other,
}

impl EventType {
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Training => "Training",
            EventType::Match => "Match",
            EventType::Meeting => "Meeting",
            EventType::Other => "Other",
        }
    }
}

/// Event row with an optional team join.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventDto {
    pub id: String,
    pub team_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub event_type: EventType,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, skip_serializing)]
    pub team: MaybeJoined<TeamRef>,
}

impl EventDto {
    pub fn team_name(&self) -> Option<&str> {
        self.team.first().map(|t| t.name.as_str())
    }

    /// Calendar day of the event in the event's own offset.
    pub fn day(&self) -> NaiveDate {
        self.start_time.date_naive()
    }
}

/// Groups events by calendar day for the month view. Ordered by day; the
/// per-day order is whatever the query returned (ascending start time).
pub fn group_by_day(events: &[EventDto]) -> BTreeMap<NaiveDate, Vec<EventDto>> {
    let mut days: BTreeMap<NaiveDate, Vec<EventDto>> = BTreeMap::new();
    for event in events {
        days.entry(event.day()).or_default().push(event.clone());
    }
    days
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    pub club_id: String,
    pub team_id: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub event_type: EventType,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(id: &str, start: &str) -> EventDto {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "team_id": "t-1",
            "title": "Session",
            "event_type": "training",
            "start_time": start,
            "end_time": start,
            "team": { "id": "t-1", "name": "U12" }
        }))
        .unwrap()
    }

    #[test]
    fn test_event_type_snake_case() {
        let parsed: EventType = serde_json::from_str("\"match\"").unwrap();
        assert_eq!(parsed, EventType::Match);
        assert_eq!(serde_json::to_string(&EventType::Training).unwrap(), "\"training\"");
    }

    #[test]
    fn test_group_by_day() {
        let events = vec![
            event("e-1", "2025-04-02T10:00:00+00:00"),
            event("e-2", "2025-04-02T17:00:00+00:00"),
            event("e-3", "2025-04-05T10:00:00+00:00"),
        ];
        let grouped = group_by_day(&events);
        assert_eq!(grouped.len(), 2);
        let first_day = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        assert_eq!(grouped[&first_day].len(), 2);
        assert_eq!(grouped[&first_day][0].id, "e-1");
    }

    #[test]
    fn test_team_name_from_join() {
        let e = event("e-4", "2025-04-02T10:00:00+00:00");
        assert_eq!(e.team_name(), Some("U12"));
    }
}

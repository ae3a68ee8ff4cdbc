use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::common::MaybeJoined;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessagePriority {
    Normal,
    Important,
}

impl Default for MessagePriority {
    fn default() -> Self {
        MessagePriority::Normal
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AuthorRef {
    full_name: String,
}

/// Announcement row with the author profile joined via `created_by`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRow {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub priority: MessagePriority,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub club_id: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    users_profile: MaybeJoined<AuthorRef>,
}

/// Flattened announcement for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDto {
    pub id: String,
    pub title: String,
    pub body: String,
    pub priority: MessagePriority,
    pub team_id: Option<String>,
    pub club_id: Option<String>,
    pub author_name: String,
    pub created_at: DateTime<FixedOffset>,
}

impl MessageDto {
    pub fn from_row(row: MessageRow) -> Self {
        let author_name = row
            .users_profile
            .into_first()
            .map(|a| a.full_name)
            .unwrap_or_else(|| "—".to_string());
        Self {
            id: row.id,
            title: row.title,
            body: row.body,
            priority: row.priority,
            team_id: row.team_id,
            club_id: row.club_id,
            author_name,
            created_at: row.created_at,
        }
    }

    /// Club-wide announcements are those without a team scope.
    pub fn is_club_wide(&self) -> bool {
        self.club_id.is_some() && self.team_id.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,
    pub priority: MessagePriority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_name_flattening() {
        let row: MessageRow = serde_json::from_value(serde_json::json!({
            "id": "m-1",
            "title": "Season start",
            "body": "First training on Monday",
            "created_at": "2025-03-01T08:00:00+00:00",
            "club_id": "club-1",
            "users_profile": { "full_name": "Carla Ruiz" }
        }))
        .unwrap();
        let message = MessageDto::from_row(row);
        assert_eq!(message.author_name, "Carla Ruiz");
        assert!(message.is_club_wide());
        assert_eq!(message.priority, MessagePriority::Normal);
    }

    #[test]
    fn test_missing_author_join() {
        let row: MessageRow = serde_json::from_value(serde_json::json!({
            "id": "m-2",
            "title": "Note",
            "body": "…",
            "priority": "important",
            "created_at": "2025-03-01T08:00:00+00:00"
        }))
        .unwrap();
        let message = MessageDto::from_row(row);
        assert_eq!(message.author_name, "—");
        assert_eq!(message.priority, MessagePriority::Important);
    }
}

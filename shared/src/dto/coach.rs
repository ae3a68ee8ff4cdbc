use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::common::MaybeJoined;

#[derive(Debug, Clone, Deserialize)]
struct CoachProfileRef {
    full_name: String,
    email: String,
}

/// One row of the coach listing: a `user_roles` row with the profile joined.
#[derive(Debug, Clone, Deserialize)]
pub struct CoachRow {
    pub user_id: String,
    #[serde(default)]
    users_profile: MaybeJoined<CoachProfileRef>,
}

/// Flattened coach entry for the admin screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachDto {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
}

impl CoachDto {
    /// A row whose profile join is missing yields placeholder fields rather
    /// than dropping the coach from the list.
    pub fn from_row(row: CoachRow) -> Self {
        match row.users_profile.into_first() {
            Some(profile) => Self {
                user_id: row.user_id,
                full_name: profile.full_name,
                email: profile.email,
            },
            None => Self {
                user_id: row.user_id,
                full_name: "—".to_string(),
                email: String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCoachRequest {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coach_row_flattening() {
        let row: CoachRow = serde_json::from_value(serde_json::json!({
            "user_id": "u-5",
            "users_profile": { "full_name": "Carla Ruiz", "email": "carla@example.com" }
        }))
        .unwrap();
        let coach = CoachDto::from_row(row);
        assert_eq!(coach.full_name, "Carla Ruiz");
    }

    #[test]
    fn test_missing_profile_join_keeps_row() {
        let row: CoachRow =
            serde_json::from_value(serde_json::json!({ "user_id": "u-6", "users_profile": null }))
                .unwrap();
        let coach = CoachDto::from_row(row);
        assert_eq!(coach.user_id, "u-6");
        assert_eq!(coach.full_name, "—");
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::club::ClubRef;
use crate::dto::common::MaybeJoined;
use crate::dto::team::TeamRef;

/// Player row. Players exist independently of auth accounts: `user_id` is
/// set once access has been activated, `parent_user_id` links to the
/// guardian's account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerDto {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub parent_user_id: Option<String>,
}

impl PlayerDto {
    /// Whether the player's own account has been activated.
    pub fn has_access(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Minimal player profile used by the post-login redirector: the player
/// record tied to the signed-in account, if one exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerSummary {
    pub id: String,
    #[serde(default)]
    pub club_id: Option<String>,
}

/// One row of the admin player query with embedded club and team joins.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRow {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub club: MaybeJoined<ClubRef>,
    #[serde(default)]
    pub team_players: Vec<TeamMembershipRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamMembershipRow {
    #[serde(default)]
    pub team: MaybeJoined<TeamRef>,
}

/// Flattened admin listing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerListing {
    pub id: String,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub club_name: Option<String>,
    pub team_name: Option<String>,
    pub has_access: bool,
}

impl PlayerListing {
    /// Flattens the nested query row: club join to its name, first team
    /// membership to its team name, `user_id` presence to an access flag.
    pub fn from_row(row: PlayerRow) -> Self {
        let club_name = row.club.into_first().map(|c| c.name);
        let team_name = row
            .team_players
            .into_iter()
            .find_map(|m| m.team.into_first())
            .map(|t| t.name);
        Self {
            id: row.id,
            full_name: row.full_name,
            birth_date: row.birth_date,
            club_name,
            team_name,
            has_access: row.user_id.is_some(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePlayerRequest {
    #[serde(rename = "p_full_name")]
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[serde(rename = "p_birth_date")]
    pub birth_date: NaiveDate,
    #[serde(rename = "p_club_id")]
    pub club_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_listing_flattens_joins() {
        let row: PlayerRow = serde_json::from_value(serde_json::json!({
            "id": "p-1",
            "full_name": "Ana Diaz",
            "birth_date": "2012-05-03",
            "user_id": "u-7",
            "club": { "id": "club-1", "name": "Rayo FC" },
            "team_players": [
                { "team": { "id": "t-1", "name": "U12" } },
                { "team": { "id": "t-2", "name": "U14" } }
            ]
        }))
        .unwrap();
        let listing = PlayerListing::from_row(row);
        assert_eq!(listing.club_name.as_deref(), Some("Rayo FC"));
        assert_eq!(listing.team_name.as_deref(), Some("U12"));
        assert!(listing.has_access);
    }

    #[test]
    fn test_listing_tolerates_missing_joins() {
        let row: PlayerRow = serde_json::from_value(serde_json::json!({
            "id": "p-2",
            "full_name": "Luis Vega",
            "club": null,
            "team_players": []
        }))
        .unwrap();
        let listing = PlayerListing::from_row(row);
        assert!(listing.club_name.is_none());
        assert!(listing.team_name.is_none());
        assert!(!listing.has_access);
    }

    #[test]
    fn test_listing_handles_array_shaped_club_join() {
        let row: PlayerRow = serde_json::from_value(serde_json::json!({
            "id": "p-3",
            "full_name": "Eva Luna",
            "club": [{ "id": "club-2", "name": "Atletico Sur" }],
            "team_players": [ { "team": [] } ]
        }))
        .unwrap();
        let listing = PlayerListing::from_row(row);
        assert_eq!(listing.club_name.as_deref(), Some("Atletico Sur"));
        assert!(listing.team_name.is_none());
    }

    #[test]
    fn test_create_request_uses_rpc_parameter_names() {
        let request = CreatePlayerRequest {
            full_name: "Ana Diaz".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2012, 5, 3).unwrap(),
            club_id: "club-1".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("p_full_name"));
        assert!(json.contains("p_club_id"));
    }

    #[test]
    fn test_player_summary_without_club() {
        let summary: PlayerSummary = serde_json::from_str(r#"{"id":"p-4"}"#).unwrap();
        assert!(summary.club_id.is_none());
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::common::MaybeJoined;
use crate::dto::player::PlayerDto;

/// Team row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamDto {
    pub id: String,
    #[serde(default)]
    pub club_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub season: Option<String>,
}

/// Minimal team reference embedded in join rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub season: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeamRequest {
    pub club_id: String,
    #[validate(length(min = 1, message = "Team name is required"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
}

/// One row of the parent roster query: a `team_players` join carrying the
/// team and the player side by side.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRosterRow {
    #[serde(default)]
    pub team: MaybeJoined<TeamRef>,
    #[serde(default)]
    pub player: MaybeJoined<PlayerDto>,
}

/// A team with the player rows that were grouped under it.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamWithPlayers {
    pub id: String,
    pub name: String,
    pub season: Option<String>,
    pub players: Vec<PlayerDto>,
}

impl TeamWithPlayers {
    /// Groups flat roster join rows by team id, preserving first-seen team
    /// order. Rows with a missing team or player join are skipped.
    pub fn group_rows(rows: Vec<TeamRosterRow>) -> Vec<TeamWithPlayers> {
        let mut teams: Vec<TeamWithPlayers> = Vec::new();
        for row in rows {
            let team = match row.team.into_first() {
                Some(team) => team,
                None => continue,
            };
            let player = match row.player.into_first() {
                Some(player) => player,
                None => continue,
            };
            match teams.iter_mut().find(|t| t.id == team.id) {
                Some(existing) => existing.players.push(player),
                None => teams.push(TeamWithPlayers {
                    id: team.id,
                    name: team.name,
                    season: team.season,
                    players: vec![player],
                }),
            }
        }
        teams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(team_id: &str, team_name: &str, player_name: &str) -> TeamRosterRow {
        serde_json::from_value(serde_json::json!({
            "team": { "id": team_id, "name": team_name },
            "player": { "id": format!("p-{player_name}"), "full_name": player_name }
        }))
        .unwrap()
    }

    #[test]
    fn test_group_rows_by_team() {
        let rows = vec![
            row("t-1", "U12", "Ana Diaz"),
            row("t-2", "U14", "Luis Vega"),
            row("t-1", "U12", "Marco Sol"),
        ];
        let grouped = TeamWithPlayers::group_rows(rows);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].name, "U12");
        assert_eq!(grouped[0].players.len(), 2);
        assert_eq!(grouped[1].players.len(), 1);
    }

    #[test]
    fn test_group_rows_skips_dangling_joins() {
        let rows: Vec<TeamRosterRow> = vec![
            serde_json::from_value(serde_json::json!({
                "team": null,
                "player": { "id": "p-1", "full_name": "Ana Diaz" }
            }))
            .unwrap(),
            row("t-1", "U12", "Luis Vega"),
        ];
        let grouped = TeamWithPlayers::group_rows(rows);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].players.len(), 1);
    }

    #[test]
    fn test_group_rows_handles_array_shaped_joins() {
        let rows: Vec<TeamRosterRow> = vec![serde_json::from_value(serde_json::json!({
            "team": [{ "id": "t-9", "name": "Senior" }],
            "player": [{ "id": "p-9", "full_name": "Eva Luna" }]
        }))
        .unwrap()];
        let grouped = TeamWithPlayers::group_rows(rows);
        assert_eq!(grouped[0].id, "t-9");
        assert_eq!(grouped[0].players[0].full_name, "Eva Luna");
    }
}

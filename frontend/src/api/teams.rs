use log::debug;
use serde::Deserialize;

use crate::api::api_url;
use crate::api::utils::{
    authenticated_get, authenticated_post, count, maybe_single, response_error, rows,
};
use shared::dto::team::CreateTeamRequest;
use shared::{MaybeJoined, PlayerDto, TeamDto, TeamRef, TeamRosterRow, TeamWithPlayers};

pub async fn create_team(request: &CreateTeamRequest) -> Result<(), String> {
    debug!("Creating team: {}", request.name);
    let response = authenticated_post(&api_url("/rest/v1/teams"))
        .json(request)
        .map_err(|e| format!("Failed to serialize team request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send team request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

pub async fn list_teams() -> Result<Vec<TeamDto>, String> {
    let url = api_url("/rest/v1/teams?select=id,club_id,name,season&order=name");
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send teams request: {}", e))?;
    rows(response).await
}

pub async fn get_team(team_id: &str) -> Result<Option<TeamDto>, String> {
    let url = api_url(&format!(
        "/rest/v1/teams?select=id,club_id,name,season&id=eq.{}",
        urlencoding::encode(team_id)
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send team request: {}", e))?;
    maybe_single(response).await
}

/// Team selector entries scoped to one club.
pub async fn team_refs_for_club(club_id: &str) -> Result<Vec<TeamRef>, String> {
    let url = api_url(&format!(
        "/rest/v1/teams?select=id,name,season&club_id=eq.{}&order=name",
        urlencoding::encode(club_id)
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send teams request: {}", e))?;
    rows(response).await
}

#[derive(Debug, Deserialize)]
struct CoachTeamRow {
    #[serde(default)]
    teams: MaybeJoined<TeamRef>,
}

/// Teams a coach is assigned to, flattened from the assignment join rows.
pub async fn teams_for_coach(coach_user_id: &str) -> Result<Vec<TeamRef>, String> {
    debug!("Fetching teams for coach: {}", coach_user_id);
    let url = api_url(&format!(
        "/rest/v1/team_coaches?select=teams(id,name,season)&coach_user_id=eq.{}",
        urlencoding::encode(coach_user_id)
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send coach teams request: {}", e))?;
    let join_rows: Vec<CoachTeamRow> = rows(response).await?;
    Ok(join_rows
        .into_iter()
        .filter_map(|r| r.teams.into_first())
        .collect())
}

/// Teams of a parent's children, grouped by team with the child rows under
/// each team.
pub async fn roster_for_parent(parent_user_id: &str) -> Result<Vec<TeamWithPlayers>, String> {
    debug!("Fetching roster for parent: {}", parent_user_id);
    let url = api_url(&format!(
        "/rest/v1/team_players?select=team:teams(id,name,season),player:players(id,full_name,birth_date,user_id,parent_user_id)&player.parent_user_id=eq.{}",
        urlencoding::encode(parent_user_id)
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send roster request: {}", e))?;
    let join_rows: Vec<TeamRosterRow> = rows(response).await?;
    Ok(TeamWithPlayers::group_rows(join_rows))
}

#[derive(Debug, Deserialize)]
struct TeamPlayerRow {
    #[serde(default)]
    player: MaybeJoined<PlayerDto>,
}

/// A team's roster, flattened from the assignment join rows.
pub async fn roster_for_team(team_id: &str) -> Result<Vec<PlayerDto>, String> {
    debug!("Fetching roster for team: {}", team_id);
    let url = api_url(&format!(
        "/rest/v1/team_players?select=player:players(id,full_name,birth_date,user_id,parent_user_id)&team_id=eq.{}",
        urlencoding::encode(team_id)
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send roster request: {}", e))?;
    let join_rows: Vec<TeamPlayerRow> = rows(response).await?;
    Ok(join_rows
        .into_iter()
        .filter_map(|r| r.player.into_first())
        .collect())
}

#[derive(Debug, Deserialize)]
struct TeamIdRow {
    team_id: String,
}

/// Distinct team ids a set of players belongs to. Used by the parent
/// dashboard to scope the upcoming-events query.
pub async fn team_ids_for_players(player_ids: &[String]) -> Result<Vec<String>, String> {
    if player_ids.is_empty() {
        return Ok(Vec::new());
    }
    let encoded = urlencoding::encode(&player_ids.join(",")).into_owned();
    let url = api_url(&format!(
        "/rest/v1/team_players?select=team_id&player_id=in.({})",
        encoded
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send team ids request: {}", e))?;
    let id_rows: Vec<TeamIdRow> = rows(response).await?;
    let mut ids: Vec<String> = Vec::new();
    for row in id_rows {
        if !ids.contains(&row.team_id) {
            ids.push(row.team_id);
        }
    }
    Ok(ids)
}

pub async fn count_teams() -> Result<u64, String> {
    count(&api_url("/rest/v1/teams?select=id")).await
}

/// Teams with no coach assignment, for the admin alert card.
pub async fn count_teams_without_coach() -> Result<u64, String> {
    count(&api_url(
        "/rest/v1/teams?select=id,team_coaches!left(team_id)&team_coaches.team_id=is.null",
    ))
    .await
}

/// Assigns a coach to a team (plain insert into the assignment table; RLS
/// restricts it to admins).
pub async fn assign_coach(team_id: &str, coach_user_id: &str) -> Result<(), String> {
    let response = authenticated_post(&api_url("/rest/v1/team_coaches"))
        .json(&serde_json::json!({ "team_id": team_id, "coach_user_id": coach_user_id }))
        .map_err(|e| format!("Failed to serialize assignment: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send assignment: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

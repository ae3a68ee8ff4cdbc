use log::debug;

use crate::api::api_url;
use crate::api::utils::{
    authenticated_get, authenticated_post, count, maybe_single, response_error, rows,
};
use shared::dto::player::CreatePlayerRequest;
use shared::{PlayerDto, PlayerListing, PlayerRow, PlayerSummary};

const ADMIN_SELECT: &str =
    "id,full_name,birth_date,user_id,club:clubs(id,name),team_players(team:teams(id,name,season))";

/// Full admin listing with club and team joins flattened per row.
pub async fn list_players_admin() -> Result<Vec<PlayerListing>, String> {
    let url = api_url(&format!(
        "/rest/v1/players?select={}&order=full_name",
        ADMIN_SELECT
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send players request: {}", e))?;
    let player_rows: Vec<PlayerRow> = rows(response).await?;
    Ok(player_rows.into_iter().map(PlayerListing::from_row).collect())
}

/// A parent's children.
pub async fn players_for_parent(parent_user_id: &str) -> Result<Vec<PlayerDto>, String> {
    let url = api_url(&format!(
        "/rest/v1/players?select=id,full_name,birth_date,user_id,parent_user_id&parent_user_id=eq.{}&order=full_name",
        urlencoding::encode(parent_user_id)
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send players request: {}", e))?;
    rows(response).await
}

/// The player record tied to a signed-in player account, if it exists.
/// Drives the onboarding-vs-dashboard decision after login.
pub async fn player_for_user(user_id: &str) -> Result<Option<PlayerSummary>, String> {
    debug!("Fetching player profile for user: {}", user_id);
    let url = api_url(&format!(
        "/rest/v1/players?select=id,club_id&user_id=eq.{}",
        urlencoding::encode(user_id)
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send player lookup: {}", e))?;
    maybe_single(response).await
}

pub async fn count_players() -> Result<u64, String> {
    count(&api_url("/rest/v1/players?select=id")).await
}

/// Players that never had their access activated.
pub async fn count_players_without_access() -> Result<u64, String> {
    count(&api_url("/rest/v1/players?select=id&user_id=is.null")).await
}

/// Players that are not assigned to any team. The backend has no direct
/// anti-join, so this mirrors the two-step workaround: fetch assigned ids,
/// then count the complement (everything, when nothing is assigned yet).
pub async fn count_players_without_team() -> Result<u64, String> {
    #[derive(serde::Deserialize)]
    struct AssignedRow {
        player_id: Option<String>,
    }

    let response = authenticated_get(&api_url("/rest/v1/team_players?select=player_id"))
        .send()
        .await
        .map_err(|e| format!("Failed to send assignments request: {}", e))?;
    let assigned: Vec<AssignedRow> = rows(response).await?;
    let ids: Vec<String> = assigned.into_iter().filter_map(|r| r.player_id).collect();

    if ids.is_empty() {
        return count_players().await;
    }
    let encoded = urlencoding::encode(&ids.join(",")).into_owned();
    count(&api_url(&format!(
        "/rest/v1/players?select=id&id=not.in.({})",
        encoded
    )))
    .await
}

/// Players of a club not yet assigned to the given team, for the roster
/// picker. Same two-step shape as the without-team count: the assigned ids
/// first, then the club's players excluding them.
pub async fn available_players_for_team(
    club_id: &str,
    team_id: &str,
) -> Result<Vec<PlayerDto>, String> {
    #[derive(serde::Deserialize)]
    struct AssignedRow {
        player_id: Option<String>,
    }

    let assigned_url = api_url(&format!(
        "/rest/v1/team_players?select=player_id&team_id=eq.{}",
        urlencoding::encode(team_id)
    ));
    let response = authenticated_get(&assigned_url)
        .send()
        .await
        .map_err(|e| format!("Failed to send assignments request: {}", e))?;
    let assigned: Vec<AssignedRow> = rows(response).await?;
    let ids: Vec<String> = assigned.into_iter().filter_map(|r| r.player_id).collect();

    let mut url = format!(
        "/rest/v1/players?select=id,full_name,birth_date,user_id,parent_user_id&club_id=eq.{}&order=full_name",
        urlencoding::encode(club_id)
    );
    if !ids.is_empty() {
        url.push_str(&format!(
            "&id=not.in.({})",
            urlencoding::encode(&ids.join(","))
        ));
    }
    let response = authenticated_get(&api_url(&url))
        .send()
        .await
        .map_err(|e| format!("Failed to send players request: {}", e))?;
    rows(response).await
}

/// Creates a player through the privileged RPC (RLS forbids a direct
/// insert). Returns the new player id.
pub async fn create_player(request: &CreatePlayerRequest) -> Result<String, String> {
    debug!("Creating player: {}", request.full_name);
    let response = authenticated_post(&api_url("/rest/v1/rpc/admin_create_player"))
        .json(request)
        .map_err(|e| format!("Failed to serialize player request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send player request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    response
        .json::<String>()
        .await
        .map_err(|e| format!("Invalid create-player response: {}", e))
}

pub async fn assign_player_to_team(player_id: &str, team_id: &str) -> Result<(), String> {
    let response = authenticated_post(&api_url("/rest/v1/rpc/admin_assign_player_to_team"))
        .json(&serde_json::json!({ "p_player_id": player_id, "p_team_id": team_id }))
        .map_err(|e| format!("Failed to serialize assignment: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send assignment: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

/// Activates a player or coach account through the privileged serverless
/// function; creating auth users is not possible from the client directly.
pub async fn activate_access(
    subject_id: &str,
    email: &str,
    password: &str,
    full_name: &str,
    role: &str,
) -> Result<(), String> {
    debug!("Activating access for {}: {}", role, subject_id);
    let response = authenticated_post(&api_url("/functions/v1/activate-player"))
        .json(&serde_json::json!({
            "playerId": subject_id,
            "email": email,
            "password": password,
            "full_name": full_name,
            "role": role,
        }))
        .map_err(|e| format!("Failed to serialize activation request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send activation request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

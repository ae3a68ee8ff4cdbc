use log::debug;

use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_post, response_error, rows};
use shared::{CoachDto, CoachRow, CreateCoachRequest};

/// Coaches of a club, with profile names flattened from the join.
pub async fn list_coaches(club_id: &str) -> Result<Vec<CoachDto>, String> {
    let url = api_url(&format!(
        "/rest/v1/user_roles?select=user_id,users_profile(full_name,email)&role=eq.coach&club_id=eq.{}",
        urlencoding::encode(club_id)
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send coaches request: {}", e))?;
    let coach_rows: Vec<CoachRow> = rows(response).await?;
    Ok(coach_rows.into_iter().map(CoachDto::from_row).collect())
}

/// Creates a coach account through the privileged serverless function.
pub async fn create_coach(request: &CreateCoachRequest) -> Result<(), String> {
    debug!("Creating coach: {}", request.email);
    let response = authenticated_post(&api_url("/functions/v1/create-coach"))
        .json(request)
        .map_err(|e| format!("Failed to serialize coach request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send coach request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

use log::debug;

use crate::api::api_url;
use crate::api::utils::{authenticated_get, maybe_single, rows};
use shared::{ClubDto, ClubRef};

/// Branding lookup for the club context. A missing row yields `Ok(None)`;
/// the caller renders without a branding header in that case.
pub async fn get_club_branding(club_id: &str) -> Result<Option<ClubDto>, String> {
    debug!("Fetching branding for club: {}", club_id);
    let url = api_url(&format!(
        "/rest/v1/clubs?select=id,name,logo_url,primary_color,created_at&id=eq.{}",
        urlencoding::encode(club_id)
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send branding request: {}", e))?;
    maybe_single(response).await
}

/// All clubs, for admin selectors.
pub async fn list_clubs() -> Result<Vec<ClubRef>, String> {
    let url = api_url("/rest/v1/clubs?select=id,name&order=name");
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send clubs request: {}", e))?;
    rows(response).await
}

use log::debug;

use crate::api::api_url;
use crate::api::utils::{authenticated_get, maybe_single};
use shared::{ProfileDto, RoleAssignmentDto};

/// Profile lookup by auth user id. `Ok(None)` means no profile row exists,
/// which the session resolver treats as terminal for the session.
pub async fn get_profile(user_id: &str) -> Result<Option<ProfileDto>, String> {
    debug!("Fetching profile for user: {}", user_id);
    let url = api_url(&format!(
        "/rest/v1/users_profile?select=id,email,full_name,created_at,language&id=eq.{}",
        urlencoding::encode(user_id)
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send profile request: {}", e))?;
    maybe_single(response).await
}

/// Role assignment lookup. A freshly provisioned account may have no row
/// yet; that is `Ok(None)`, not a failure.
pub async fn get_role_assignment(user_id: &str) -> Result<Option<RoleAssignmentDto>, String> {
    debug!("Fetching role assignment for user: {}", user_id);
    let url = api_url(&format!(
        "/rest/v1/user_roles?select=role,club_id&user_id=eq.{}",
        urlencoding::encode(user_id)
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send role request: {}", e))?;
    maybe_single(response).await
}

/// Persists the profile's language preference.
pub async fn update_language(user_id: &str, language: &str) -> Result<(), String> {
    let url = api_url(&format!(
        "/rest/v1/users_profile?id=eq.{}",
        urlencoding::encode(user_id)
    ));
    let response = crate::api::utils::authenticated_patch(&url)
        .json(&serde_json::json!({ "language": language }))
        .map_err(|e| format!("Failed to serialize language update: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send language update: {}", e))?;

    if !response.ok() {
        return Err(crate::api::utils::response_error(response).await);
    }
    Ok(())
}

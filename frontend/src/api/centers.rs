use log::debug;

use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_post, response_error, rows};
use shared::dto::center::CreateCenterRequest;
use shared::CenterDto;

pub async fn list_centers() -> Result<Vec<CenterDto>, String> {
    let url = api_url("/rest/v1/centers?select=id,club_id,name,address&order=name");
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send centers request: {}", e))?;
    rows(response).await
}

pub async fn create_center(request: &CreateCenterRequest) -> Result<(), String> {
    debug!("Creating center: {}", request.name);
    let response = authenticated_post(&api_url("/rest/v1/centers"))
        .json(request)
        .map_err(|e| format!("Failed to serialize center request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send center request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

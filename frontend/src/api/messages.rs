use log::debug;

use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_post, response_error, rows};
use shared::dto::message::CreateMessageRequest;
use shared::{MessageDto, MessageRow};

const MESSAGE_SELECT: &str =
    "id,title,body,priority,team_id,club_id,created_at,users_profile:created_by(full_name)";

/// Latest announcements, newest first, with author names flattened.
pub async fn recent_messages(limit: u32) -> Result<Vec<MessageDto>, String> {
    let url = api_url(&format!(
        "/rest/v1/messages?select={}&order=created_at.desc&limit={}",
        MESSAGE_SELECT, limit
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send messages request: {}", e))?;
    let message_rows: Vec<MessageRow> = rows(response).await?;
    Ok(message_rows.into_iter().map(MessageDto::from_row).collect())
}

pub async fn create_message(request: &CreateMessageRequest) -> Result<(), String> {
    debug!("Publishing message: {}", request.title);
    let response = authenticated_post(&api_url("/rest/v1/messages"))
        .json(request)
        .map_err(|e| format!("Failed to serialize message request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send message request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

pub async fn list_messages() -> Result<Vec<MessageDto>, String> {
    let url = api_url(&format!(
        "/rest/v1/messages?select={}&order=created_at.desc",
        MESSAGE_SELECT
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send messages request: {}", e))?;
    let message_rows: Vec<MessageRow> = rows(response).await?;
    Ok(message_rows.into_iter().map(MessageDto::from_row).collect())
}

use chrono::Utc;
use log::debug;

use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_post, maybe_single, response_error, rows};
use shared::dto::event::CreateEventRequest;
use shared::EventDto;

const EVENT_SELECT: &str =
    "id,team_id,title,description,event_type,start_time,end_time,location,team:teams(id,name,season)";

/// The next `limit` future events, soonest first.
pub async fn upcoming_events(limit: u32) -> Result<Vec<EventDto>, String> {
    let now = Utc::now().to_rfc3339();
    let url = api_url(&format!(
        "/rest/v1/events?select={}&start_time=gt.{}&order=start_time.asc&limit={}",
        EVENT_SELECT,
        urlencoding::encode(&now),
        limit
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send events request: {}", e))?;
    rows(response).await
}

/// Future events for a set of teams, soonest first. Empty team set short
/// circuits to an empty list without a request.
pub async fn upcoming_events_for_teams(
    team_ids: &[String],
    limit: u32,
) -> Result<Vec<EventDto>, String> {
    if team_ids.is_empty() {
        return Ok(Vec::new());
    }
    let now = Utc::now().to_rfc3339();
    let encoded = urlencoding::encode(&team_ids.join(",")).into_owned();
    let url = api_url(&format!(
        "/rest/v1/events?select={}&team_id=in.({})&start_time=gt.{}&order=start_time.asc&limit={}",
        EVENT_SELECT,
        encoded,
        urlencoding::encode(&now),
        limit
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send events request: {}", e))?;
    rows(response).await
}

/// All events of the current month window the calendar displays.
pub async fn events_between(start: &str, end: &str) -> Result<Vec<EventDto>, String> {
    let url = api_url(&format!(
        "/rest/v1/events?select={}&start_time=gte.{}&start_time=lt.{}&order=start_time.asc",
        EVENT_SELECT,
        urlencoding::encode(start),
        urlencoding::encode(end)
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send events request: {}", e))?;
    rows(response).await
}

pub async fn get_event(event_id: &str) -> Result<Option<EventDto>, String> {
    let url = api_url(&format!(
        "/rest/v1/events?select={}&id=eq.{}",
        EVENT_SELECT,
        urlencoding::encode(event_id)
    ));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send event request: {}", e))?;
    maybe_single(response).await
}

pub async fn create_event(request: &CreateEventRequest) -> Result<(), String> {
    debug!("Creating event: {}", request.title);
    let response = authenticated_post(&api_url("/rest/v1/events"))
        .json(request)
        .map_err(|e| format!("Failed to serialize event request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send event request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

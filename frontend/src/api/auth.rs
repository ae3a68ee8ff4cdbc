use gloo_net::http::Request;
use log::debug;

use crate::api::api_url;
use crate::api::utils::{
    access_token, authenticated_request, clear_access_token, response_error, store_access_token,
};
use crate::config::Config;
use shared::{SessionUser, SignInRequest, TokenResponse};

/// Password-grant sign-in. On success the access token is stored so later
/// data requests carry it.
pub async fn sign_in(email: &str, password: &str) -> Result<SessionUser, String> {
    debug!("Attempting sign-in for user: {}", email);

    let body = SignInRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let mut req = Request::post(&api_url("/auth/v1/token?grant_type=password"));
    let anon_key = Config::anon_key();
    if !anon_key.is_empty() {
        req = req.header("apikey", &anon_key);
    }

    let response = req
        .json(&body)
        .map_err(|e| format!("Failed to serialize sign-in request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send sign-in request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    let token_response = response
        .json::<TokenResponse>()
        .await
        .map_err(|e| format!("Failed to parse sign-in response: {}", e))?;

    store_access_token(&token_response.access_token);
    debug!("Sign-in successful for user: {}", token_response.user.id);
    Ok(token_response.user)
}

/// Looks up the session behind the stored token, if any. A missing or
/// rejected token is a plain "no session", not an error.
pub async fn get_session() -> Result<Option<SessionUser>, String> {
    if access_token().is_none() {
        return Ok(None);
    }

    debug!("Restoring session from stored token");
    let response = authenticated_request("GET", &api_url("/auth/v1/user"))
        .send()
        .await
        .map_err(|e| format!("Failed to send session request: {}", e))?;

    if response.status() == 401 || response.status() == 403 {
        clear_access_token();
        return Ok(None);
    }
    if !response.ok() {
        return Err(response_error(response).await);
    }

    let user = response
        .json::<SessionUser>()
        .await
        .map_err(|e| format!("Invalid session response: {}", e))?;
    Ok(Some(user))
}

/// Best-effort sign-out. The caller clears local state regardless of the
/// outcome, so a failure here only gets logged.
pub async fn sign_out() -> Result<(), String> {
    debug!("Attempting sign-out");
    let result = authenticated_request("POST", &api_url("/auth/v1/logout"))
        .send()
        .await;
    clear_access_token();

    match result {
        Ok(response) if response.ok() => Ok(()),
        Ok(response) => Err(format!("Sign-out failed: HTTP {}", response.status())),
        Err(e) => Err(format!("Failed to send sign-out request: {}", e)),
    }
}

/// Sets a new password and clears the temporary-password marker in one
/// flow; the marker update only runs once the password change succeeded.
pub async fn update_password(new_password: &str) -> Result<(), String> {
    debug!("Updating password");
    let response = authenticated_request("PUT", &api_url("/auth/v1/user"))
        .json(&serde_json::json!({ "password": new_password }))
        .map_err(|e| format!("Failed to serialize password update: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send password update: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    let marker = authenticated_request("PUT", &api_url("/auth/v1/user"))
        .json(&serde_json::json!({ "data": { "temp_password": false } }))
        .map_err(|e| format!("Failed to serialize marker update: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send marker update: {}", e))?;

    if !marker.ok() {
        return Err(response_error(marker).await);
    }

    debug!("Password updated, temporary marker cleared");
    Ok(())
}

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use serde::de::DeserializeOwned;

use crate::config::Config;
use shared::{ErrorResponse, SharedError};

const ACCESS_TOKEN_KEY: &str = "access_token";

pub fn store_access_token(token: &str) {
    if let Err(e) = LocalStorage::set(ACCESS_TOKEN_KEY, token) {
        log::error!("Failed to store access token: {}", e);
    }
}

pub fn access_token() -> Option<String> {
    LocalStorage::get::<String>(ACCESS_TOKEN_KEY).ok()
}

pub fn clear_access_token() {
    LocalStorage::delete(ACCESS_TOKEN_KEY);
}

/// Creates a request with the publishable key and, when present, the stored
/// bearer token. Every data-API call goes through here.
pub fn authenticated_request(method: &str, url: &str) -> RequestBuilder {
    let mut req = match method.to_uppercase().as_str() {
        "GET" => Request::get(url),
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        "PATCH" => Request::patch(url),
        _ => Request::get(url), // Default to GET
    };

    let anon_key = Config::anon_key();
    if !anon_key.is_empty() {
        req = req.header("apikey", &anon_key);
    }
    if let Some(token) = access_token() {
        req = req.header("Authorization", &format!("Bearer {}", token));
    }

    req
}

pub fn authenticated_get(url: &str) -> RequestBuilder {
    authenticated_request("GET", url)
}

pub fn authenticated_post(url: &str) -> RequestBuilder {
    authenticated_request("POST", url)
}

pub fn authenticated_patch(url: &str) -> RequestBuilder {
    authenticated_request("PATCH", url)
}

/// Extracts the error message from a failed response and classifies it by
/// status, falling back to the bare status code when the body is not the
/// usual error shape.
pub async fn response_error(response: Response) -> String {
    let status = response.status();
    let message = response
        .json::<ErrorResponse>()
        .await
        .map(|e| e.error)
        .unwrap_or_else(|_| format!("HTTP {}", status));
    SharedError::from_status(status, message).to_string()
}

/// Parses a row-set response and returns all rows.
pub async fn rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, String> {
    if !response.ok() {
        return Err(response_error(response).await);
    }
    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| format!("Invalid response: {}", e))
}

/// Parses a row-set response expected to hold at most one row. An empty
/// result is `Ok(None)`, matching the backend's maybe-single semantics.
pub async fn maybe_single<T: DeserializeOwned>(response: Response) -> Result<Option<T>, String> {
    Ok(rows::<T>(response).await?.into_iter().next())
}

/// Total row count from a `Content-Range` header (`items 0-9/42` or `*/42`).
pub fn parse_content_range_total(header: &str) -> Option<u64> {
    header.rsplit('/').next()?.trim().parse().ok()
}

/// Runs a `Prefer: count=exact` query and returns only the total.
pub async fn count(url: &str) -> Result<u64, String> {
    let response = authenticated_get(url)
        .header("Prefer", "count=exact")
        .header("Range", "0-0")
        .send()
        .await
        .map_err(|e| format!("Failed to send count request: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .headers()
        .get("content-range")
        .as_deref()
        .and_then(parse_content_range_total)
        .ok_or_else(|| "Missing Content-Range header".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_range_total() {
        assert_eq!(parse_content_range_total("0-9/42"), Some(42));
        assert_eq!(parse_content_range_total("*/7"), Some(7));
        assert_eq!(parse_content_range_total("items 0-0/123"), Some(123));
    }

    #[test]
    fn test_parse_content_range_total_rejects_garbage() {
        assert_eq!(parse_content_range_total("0-9/*"), None);
        assert_eq!(parse_content_range_total(""), None);
    }
}

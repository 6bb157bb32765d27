//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Every request carries the session cookie (`credentials: include`) and
//! reads the backend's `ApiResponse` envelope.

use contracts::shared::ApiResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::{FormData, RequestCredentials};

/// Path prefix of every backend route
const API_PREFIX: &str = "/api/v1";

/// Port the backend listens on when no override is configured
const BACKEND_PORT: u16 = 5000;

/// Build-time override, e.g. `TOUR_API_BASE_URL=https://api.example.com/api/v1 trunk build`
const API_BASE_OVERRIDE: Option<&str> = option_env!("TOUR_API_BASE_URL");

/// Resolve the base URL from an optional override and the page location
pub fn resolve_api_base(override_url: Option<&str>, protocol: &str, hostname: &str) -> String {
    match override_url.map(str::trim).filter(|s| !s.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => format!("{}//{}:{}{}", protocol, hostname, BACKEND_PORT, API_PREFIX),
    }
}

/// Get the base URL for API requests
///
/// # Returns
/// - The build-time override when set
/// - Otherwise a URL like "http://localhost:5000/api/v1" derived from the window location
pub fn api_base() -> String {
    let (protocol, hostname) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location.hostname().unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    resolve_api_base(API_BASE_OVERRIDE, &protocol, &hostname)
}

/// Build a full API URL from a path such as "/tour"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append a serialized query to `path`; empty queries leave the path unchanged
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

fn with_session(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, String> {
    let status = response.status();
    match response.json::<ApiResponse<T>>().await {
        Ok(envelope) => Ok(envelope),
        Err(e) if (200..300).contains(&status) => Err(format!("Failed to parse response: {}", e)),
        Err(_) => Err(format!("HTTP error: {}", status)),
    }
}

/// GET `path`; build it with [`with_query`] when parameters are needed
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<ApiResponse<T>, String> {
    let response = with_session(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_envelope(response).await
}

/// POST a JSON body
pub async fn post_json<T, B>(path: &str, body: &B) -> Result<ApiResponse<T>, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let response = with_session(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_envelope(response).await
}

/// POST a multipart form (JSON `data` part plus files)
pub async fn post_form<T: DeserializeOwned>(path: &str, form: &FormData) -> Result<ApiResponse<T>, String> {
    let response = with_session(Request::post(&api_url(path)))
        .body(form.clone())
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_envelope(response).await
}

/// DELETE `path`
pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<ApiResponse<T>, String> {
    let response = with_session(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_envelope(response).await
}

/// Multipart body with the JSON payload under `data`
pub fn multipart_with_data<B: Serialize>(data: &B) -> Result<FormData, String> {
    let json = serde_json::to_string(data).map_err(|e| format!("Failed to serialize request: {}", e))?;
    let form = FormData::new().map_err(|_| "Failed to create form data".to_string())?;
    form.append_with_str("data", &json)
        .map_err(|_| "Failed to append form data".to_string())?;
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_tour::TourQuery;

    #[test]
    fn test_resolve_api_base() {
        assert_eq!(
            resolve_api_base(None, "https:", "tours.example.com"),
            "https://tours.example.com:5000/api/v1"
        );
        assert_eq!(
            resolve_api_base(Some("https://api.example.com/api/v1/"), "http:", "localhost"),
            "https://api.example.com/api/v1"
        );
        assert_eq!(
            resolve_api_base(Some("  "), "http:", "localhost"),
            "http://localhost:5000/api/v1"
        );
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/tour", &TourQuery::default()).unwrap(), "/tour");

        let q = TourQuery::by_id("abc").with_fields("name");
        assert_eq!(with_query("/division", &q).unwrap(), "/division?_id=abc&fields=name");

        let q = TourQuery {
            division: Some("d1".to_string()),
            tour_type: Some("t1".to_string()),
            ..TourQuery::default()
        };
        assert_eq!(with_query("/tour", &q).unwrap(), "/tour?division=d1&tourType=t1");
    }
}

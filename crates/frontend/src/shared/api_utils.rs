//! API utilities for frontend-backend communication
//!
//! Builds API URLs and wraps `gloo_net` requests with the bearer token the
//! backend expects. All helpers return `Result<_, String>`; failures are
//! logged before being handed to the UI.

use contracts::domain::common::ListQuery;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Get the base URL for API requests.
///
/// Constructed from the current window location, using port 3000 for the
/// backend server. Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/v1/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append pagination/search query parameters to a path
pub fn with_query(path: &str, query: &ListQuery) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        _ => path.to_string(),
    }
}

fn auth_header() -> Result<String, String> {
    storage::get_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(|| "Not authenticated".to_string())
}

fn fail(context: &str, path: &str, detail: String) -> String {
    log::error!("{} {} failed: {}", context, path, detail);
    detail
}

/// Authenticated GET returning parsed JSON
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(|e| fail("GET", path, format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(fail("GET", path, format!("HTTP {}", response.status())));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| fail("GET", path, format!("Failed to parse response: {}", e)))
}

/// Authenticated POST with a JSON body
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &auth_header()?)
        .json(body)
        .map_err(|e| fail("POST", path, format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| fail("POST", path, format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(fail("POST", path, format!("HTTP {}", response.status())));
    }
    Ok(())
}

/// Authenticated PUT with a JSON body
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::put(&api_url(path))
        .header("Authorization", &auth_header()?)
        .json(body)
        .map_err(|e| fail("PUT", path, format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| fail("PUT", path, format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(fail("PUT", path, format!("HTTP {}", response.status())));
    }
    Ok(())
}

/// Authenticated DELETE
pub async fn delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(|e| fail("DELETE", path, format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(fail("DELETE", path, format!("HTTP {}", response.status())));
    }
    Ok(())
}

/// Authenticated POST with a multipart body (image uploads).
///
/// The browser sets the multipart boundary itself, so no Content-Type header
/// is added here.
pub async fn post_form(path: &str, form: web_sys::FormData) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &auth_header()?)
        .body(form)
        .map_err(|e| fail("POST", path, format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| fail("POST", path, format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(fail("POST", path, format!("HTTP {}", response.status())));
    }
    Ok(())
}

/// Authenticated PUT with a multipart body
pub async fn put_form(path: &str, form: web_sys::FormData) -> Result<(), String> {
    let response = Request::put(&api_url(path))
        .header("Authorization", &auth_header()?)
        .body(form)
        .map_err(|e| fail("PUT", path, format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| fail("PUT", path, format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(fail("PUT", path, format!("HTTP {}", response.status())));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query() {
        let q = ListQuery::default();
        assert_eq!(
            with_query("/api/v1/categories", &q),
            "/api/v1/categories?page=1&limit=10"
        );
    }

    #[test]
    fn test_with_query_search() {
        let q = ListQuery::default().with_search("kraft");
        let url = with_query("/api/v1/products", &q);
        assert_eq!(url, "/api/v1/products?page=1&limit=10&search=kraft");

        // Short terms are dropped entirely
        let q = ListQuery::default().with_search("kr");
        assert_eq!(
            with_query("/api/v1/products", &q),
            "/api/v1/products?page=1&limit=10"
        );
    }
}

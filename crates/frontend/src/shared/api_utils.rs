//! API utilities for frontend-backend communication

use contracts::shared::validation::ValidationErrors;
use gloo_net::http::Response;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
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

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Outcome of a create/update submission
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    Saved,
    /// HTTP 422: field-keyed validation errors to render inline
    Invalid(ValidationErrors),
}

/// Interpret a write-endpoint response: success, validation failure, or error
pub async fn read_save_response(response: Response) -> Result<SaveOutcome, String> {
    if response.ok() {
        return Ok(SaveOutcome::Saved);
    }
    if response.status() == 422 {
        let errors: ValidationErrors = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse validation errors: {}", e))?;
        return Ok(SaveOutcome::Invalid(errors));
    }
    Err(format!("HTTP error: {}", response.status()))
}

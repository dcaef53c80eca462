use crate::shared::api_utils::api_url;
use contracts::system::auth::PermissionSet;
use gloo_net::http::Request;

/// The permission names granted to this session
pub async fn fetch_permissions() -> Result<PermissionSet, String> {
    let response = Request::get(&api_url("/api/auth/permissions"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

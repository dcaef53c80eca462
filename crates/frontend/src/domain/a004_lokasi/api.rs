use crate::shared::api_utils::api_url;
use contracts::domain::a004_lokasi::aggregate::LokasiRef;
use gloo_net::http::Request;

/// Location options for filter and form dropdowns
pub async fn list() -> Result<Vec<LokasiRef>, String> {
    let response = Request::get(&api_url("/api/lokasi"))
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

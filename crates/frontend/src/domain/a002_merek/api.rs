use crate::shared::api_utils::api_url;
use contracts::domain::a002_merek::aggregate::MerekRef;
use gloo_net::http::Request;

/// Brand options for filter and form dropdowns
pub async fn list() -> Result<Vec<MerekRef>, String> {
    let response = Request::get(&api_url("/api/merek"))
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

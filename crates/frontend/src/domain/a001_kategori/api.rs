use crate::shared::api_utils::api_url;
use contracts::domain::a001_kategori::aggregate::KategoriRef;
use gloo_net::http::Request;

/// Category options for filter and form dropdowns
pub async fn list() -> Result<Vec<KategoriRef>, String> {
    let response = Request::get(&api_url("/api/kategori"))
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

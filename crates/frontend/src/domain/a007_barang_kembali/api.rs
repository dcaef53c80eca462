use crate::shared::api_utils::{api_url, read_save_response, SaveOutcome};
use contracts::domain::a007_barang_kembali::aggregate::BarangKembaliId;
use contracts::domain::a007_barang_kembali::dto::{
    BarangKembaliDto, BarangKembaliFilter, BarangKembaliRow, BarangKembaliView,
};
use contracts::shared::pagination::Paginated;
use gloo_net::http::Request;

/// One page of the returned-goods listing
pub async fn list(filter: &BarangKembaliFilter) -> Result<Paginated<BarangKembaliRow>, String> {
    let query = serde_qs::to_string(filter).map_err(|e| format!("Bad filter: {}", e))?;
    let url = api_url(&format!("/api/barang-kembali?{}", query));

    let response = Request::get(&url)
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

/// The full nested record, fetched on demand for the detail modal
pub async fn view(id: BarangKembaliId) -> Result<BarangKembaliView, String> {
    let url = api_url(&format!("/api/barang-kembali/{}", id.value()));
    let response = Request::get(&url)
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

/// Create or update; HTTP 422 surfaces as `SaveOutcome::Invalid`
pub async fn save(dto: &BarangKembaliDto) -> Result<SaveOutcome, String> {
    let response = Request::post(&api_url("/api/barang-kembali"))
        .json(dto)
        .map_err(|e| format!("Bad payload: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_save_response(response).await
}

pub async fn delete(id: BarangKembaliId) -> Result<(), String> {
    let url = api_url(&format!("/api/barang-kembali/{}", id.value()));
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

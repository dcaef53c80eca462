use crate::shared::api_utils::{api_url, read_save_response, SaveOutcome};
use contracts::domain::a005_model_barang::aggregate::ModelBarangId;
use contracts::domain::a005_model_barang::dto::{
    ModelBarangDto, ModelBarangFilter, ModelBarangRef, ModelBarangRow,
};
use contracts::shared::pagination::Paginated;
use gloo_net::http::Request;

/// One page of the catalog listing
pub async fn list(filter: &ModelBarangFilter) -> Result<Paginated<ModelBarangRow>, String> {
    let query = serde_qs::to_string(filter).map_err(|e| format!("Bad filter: {}", e))?;
    let url = api_url(&format!("/api/model-barang?{}", query));

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

/// Initial label suggestion list
pub async fn labels() -> Result<Vec<String>, String> {
    let response = Request::get(&api_url("/api/model-barang/labels"))
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

/// Model options for the transaction-form dropdowns
pub async fn refs() -> Result<Vec<ModelBarangRef>, String> {
    let response = Request::get(&api_url("/api/model-barang/refs"))
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
pub async fn save(dto: &ModelBarangDto) -> Result<SaveOutcome, String> {
    let response = Request::post(&api_url("/api/model-barang"))
        .json(dto)
        .map_err(|e| format!("Bad payload: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_save_response(response).await
}

pub async fn delete(id: ModelBarangId) -> Result<(), String> {
    let url = api_url(&format!("/api/model-barang/{}", id.value()));
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

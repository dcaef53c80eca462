use crate::shared::api_utils::api_url;
use contracts::domain::a001_kategori::aggregate::KategoriId;
use contracts::domain::a003_jenis_barang::aggregate::JenisBarangRef;
use gloo_net::http::Request;

/// Cascading lookup: the item types belonging to one category
pub async fn list_by_kategori(kategori_id: KategoriId) -> Result<Vec<JenisBarangRef>, String> {
    let url = api_url(&format!(
        "/api/jenis-barang?kategori_id={}",
        kategori_id.value()
    ));
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

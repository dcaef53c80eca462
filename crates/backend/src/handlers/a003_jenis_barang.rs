use axum::extract::Query;
use axum::Json;
use contracts::domain::a001_kategori::aggregate::KategoriId;
use contracts::domain::a003_jenis_barang::aggregate::JenisBarangRef;
use serde::Deserialize;

use crate::domain::a003_jenis_barang;
use crate::shared::error::AppResult;

#[derive(Debug, Deserialize)]
pub struct JenisBarangQuery {
    pub kategori_id: Option<KategoriId>,
}

/// GET /api/jenis-barang?kategori_id=...
///
/// The cascading lookup behind the category -> item-type dropdown.
pub async fn list(Query(query): Query<JenisBarangQuery>) -> AppResult<Json<Vec<JenisBarangRef>>> {
    let refs =
        a003_jenis_barang::service::list_by_kategori(query.kategori_id.map(|k| k.value())).await?;
    Ok(Json(refs))
}

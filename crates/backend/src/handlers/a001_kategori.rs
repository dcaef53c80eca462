use axum::Json;
use contracts::domain::a001_kategori::aggregate::KategoriRef;

use crate::domain::a001_kategori;
use crate::shared::error::AppResult;

/// GET /api/kategori
pub async fn list() -> AppResult<Json<Vec<KategoriRef>>> {
    Ok(Json(a001_kategori::service::list_refs().await?))
}

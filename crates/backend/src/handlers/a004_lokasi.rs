use axum::Json;
use contracts::domain::a004_lokasi::aggregate::LokasiRef;

use crate::domain::a004_lokasi;
use crate::shared::error::AppResult;

/// GET /api/lokasi
pub async fn list() -> AppResult<Json<Vec<LokasiRef>>> {
    Ok(Json(a004_lokasi::service::list_refs().await?))
}

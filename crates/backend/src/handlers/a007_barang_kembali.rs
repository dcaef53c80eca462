use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a007_barang_kembali::dto::{
    BarangKembaliDto, BarangKembaliFilter, BarangKembaliRow, BarangKembaliView,
};
use contracts::shared::pagination::Paginated;
use serde_json::json;

use crate::domain::a007_barang_kembali;
use crate::shared::error::{AppError, AppResult};

fn parse_id(id: &str) -> Result<uuid::Uuid, AppError> {
    uuid::Uuid::parse_str(id).map_err(|_| AppError::BadRequest(format!("invalid id: {id}")))
}

/// GET /api/barang-kembali
pub async fn list(
    Query(filter): Query<BarangKembaliFilter>,
) -> AppResult<Json<Paginated<BarangKembaliRow>>> {
    Ok(Json(a007_barang_kembali::service::list(filter).await?))
}

/// GET /api/barang-kembali/:id, the nested detail view
pub async fn get_by_id(Path(id): Path<String>) -> AppResult<Json<BarangKembaliView>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a007_barang_kembali::service::view(uuid).await?))
}

/// POST /api/barang-kembali: create when `id` is absent, update otherwise
pub async fn upsert(Json(dto): Json<BarangKembaliDto>) -> AppResult<Json<serde_json::Value>> {
    let id = a007_barang_kembali::service::save(dto).await?;
    Ok(Json(json!({ "id": id.to_string() })))
}

/// DELETE /api/barang-kembali/:id
pub async fn delete(Path(id): Path<String>) -> AppResult<()> {
    let uuid = parse_id(&id)?;
    if a007_barang_kembali::service::delete(uuid).await? {
        Ok(())
    } else {
        Err(AppError::NotFound)
    }
}

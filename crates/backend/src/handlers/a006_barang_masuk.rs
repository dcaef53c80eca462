use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a006_barang_masuk::dto::{
    BarangMasukDto, BarangMasukFilter, BarangMasukRow, BarangMasukView,
};
use contracts::shared::pagination::Paginated;
use serde_json::json;

use crate::domain::a006_barang_masuk;
use crate::shared::error::{AppError, AppResult};

fn parse_id(id: &str) -> Result<uuid::Uuid, AppError> {
    uuid::Uuid::parse_str(id).map_err(|_| AppError::BadRequest(format!("invalid id: {id}")))
}

/// GET /api/barang-masuk
pub async fn list(
    Query(filter): Query<BarangMasukFilter>,
) -> AppResult<Json<Paginated<BarangMasukRow>>> {
    Ok(Json(a006_barang_masuk::service::list(filter).await?))
}

/// GET /api/barang-masuk/:id, the nested detail view
pub async fn get_by_id(Path(id): Path<String>) -> AppResult<Json<BarangMasukView>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a006_barang_masuk::service::view(uuid).await?))
}

/// POST /api/barang-masuk: create when `id` is absent, update otherwise
pub async fn upsert(Json(dto): Json<BarangMasukDto>) -> AppResult<Json<serde_json::Value>> {
    let id = a006_barang_masuk::service::save(dto).await?;
    Ok(Json(json!({ "id": id.to_string() })))
}

/// DELETE /api/barang-masuk/:id
pub async fn delete(Path(id): Path<String>) -> AppResult<()> {
    let uuid = parse_id(&id)?;
    if a006_barang_masuk::service::delete(uuid).await? {
        Ok(())
    } else {
        Err(AppError::NotFound)
    }
}

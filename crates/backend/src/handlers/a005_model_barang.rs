use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a005_model_barang::aggregate::ModelBarang;
use contracts::domain::a005_model_barang::dto::{
    ModelBarangDto, ModelBarangFilter, ModelBarangRef, ModelBarangRow,
};
use contracts::shared::pagination::Paginated;
use serde_json::json;

use crate::domain::a005_model_barang;
use crate::shared::error::{AppError, AppResult};

fn parse_id(id: &str) -> Result<uuid::Uuid, AppError> {
    uuid::Uuid::parse_str(id).map_err(|_| AppError::BadRequest(format!("invalid id: {id}")))
}

/// GET /api/model-barang
pub async fn list(
    Query(filter): Query<ModelBarangFilter>,
) -> AppResult<Json<Paginated<ModelBarangRow>>> {
    Ok(Json(a005_model_barang::service::list(filter).await?))
}

/// GET /api/model-barang/labels
pub async fn labels() -> AppResult<Json<Vec<String>>> {
    Ok(Json(a005_model_barang::service::labels().await?))
}

/// GET /api/model-barang/refs
pub async fn refs() -> AppResult<Json<Vec<ModelBarangRef>>> {
    Ok(Json(a005_model_barang::service::list_refs().await?))
}

/// GET /api/model-barang/:id
pub async fn get_by_id(Path(id): Path<String>) -> AppResult<Json<ModelBarang>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a005_model_barang::service::get_by_id(uuid).await?))
}

/// POST /api/model-barang: create when `id` is absent, update otherwise
pub async fn upsert(Json(dto): Json<ModelBarangDto>) -> AppResult<Json<serde_json::Value>> {
    let id = a005_model_barang::service::save(dto).await?;
    Ok(Json(json!({ "id": id.to_string() })))
}

/// DELETE /api/model-barang/:id
pub async fn delete(Path(id): Path<String>) -> AppResult<()> {
    let uuid = parse_id(&id)?;
    if a005_model_barang::service::delete(uuid).await? {
        Ok(())
    } else {
        Err(AppError::NotFound)
    }
}

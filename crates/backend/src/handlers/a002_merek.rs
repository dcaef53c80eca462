use axum::Json;
use contracts::domain::a002_merek::aggregate::MerekRef;

use crate::domain::a002_merek;
use crate::shared::error::AppResult;

/// GET /api/merek
pub async fn list() -> AppResult<Json<Vec<MerekRef>>> {
    Ok(Json(a002_merek::service::list_refs().await?))
}

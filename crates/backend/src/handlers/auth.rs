use axum::Json;
use contracts::system::auth::PermissionSet;

use crate::shared::config::get_config;

/// GET /api/auth/permissions
///
/// The configured permission names. The frontend uses them to decide which
/// affordances to render; this is not an authorization mechanism.
pub async fn permissions() -> Json<PermissionSet> {
    let set: PermissionSet = get_config().auth.permissions.iter().cloned().collect();
    Json(set)
}

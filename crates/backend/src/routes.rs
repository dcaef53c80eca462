use axum::routing::{get, post};
use axum::Router;

use crate::handlers;

/// All API routes of the application
pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // AUTH / PERMISSIONS
        // ========================================
        .route("/api/auth/permissions", get(handlers::auth::permissions))
        // ========================================
        // REFERENCE DATA
        // ========================================
        .route("/api/kategori", get(handlers::a001_kategori::list))
        .route("/api/merek", get(handlers::a002_merek::list))
        .route("/api/lokasi", get(handlers::a004_lokasi::list))
        // Cascading lookup: item types of one category
        .route("/api/jenis-barang", get(handlers::a003_jenis_barang::list))
        // ========================================
        // MODEL BARANG (CATALOG)
        // ========================================
        .route(
            "/api/model-barang",
            get(handlers::a005_model_barang::list).post(handlers::a005_model_barang::upsert),
        )
        .route(
            "/api/model-barang/labels",
            get(handlers::a005_model_barang::labels),
        )
        .route(
            "/api/model-barang/refs",
            get(handlers::a005_model_barang::refs),
        )
        .route(
            "/api/model-barang/:id",
            get(handlers::a005_model_barang::get_by_id).delete(handlers::a005_model_barang::delete),
        )
        // ========================================
        // BARANG MASUK (INCOMING)
        // ========================================
        .route(
            "/api/barang-masuk",
            get(handlers::a006_barang_masuk::list).post(handlers::a006_barang_masuk::upsert),
        )
        .route(
            "/api/barang-masuk/:id",
            get(handlers::a006_barang_masuk::get_by_id).delete(handlers::a006_barang_masuk::delete),
        )
        // ========================================
        // BARANG KEMBALI (RETURNED)
        // ========================================
        .route(
            "/api/barang-kembali",
            get(handlers::a007_barang_kembali::list).post(handlers::a007_barang_kembali::upsert),
        )
        .route(
            "/api/barang-kembali/:id",
            get(handlers::a007_barang_kembali::get_by_id)
                .delete(handlers::a007_barang_kembali::delete),
        )
        // ========================================
        // DEVELOPMENT
        // ========================================
        .route("/api/testdata", post(handlers::testdata::seed))
}

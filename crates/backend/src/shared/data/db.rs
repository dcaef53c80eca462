use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Minimal schema bootstrap: every table is created on startup if missing.
const CREATE_TABLES: [&str; 9] = [
    r#"
    CREATE TABLE IF NOT EXISTS a001_kategori (
        id TEXT PRIMARY KEY NOT NULL,
        nama TEXT NOT NULL,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a002_merek (
        id TEXT PRIMARY KEY NOT NULL,
        nama TEXT NOT NULL,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a003_jenis_barang (
        id TEXT PRIMARY KEY NOT NULL,
        nama TEXT NOT NULL,
        kategori_id TEXT NOT NULL,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a004_lokasi (
        id TEXT PRIMARY KEY NOT NULL,
        nama TEXT NOT NULL,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a005_model_barang (
        id TEXT PRIMARY KEY NOT NULL,
        nama TEXT NOT NULL,
        label TEXT,
        kategori_id TEXT NOT NULL,
        merek_id TEXT NOT NULL,
        jenis_id TEXT,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a006_barang_masuk (
        id TEXT PRIMARY KEY NOT NULL,
        tanggal TEXT NOT NULL,
        asal_id TEXT NOT NULL,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a006_barang_masuk_detail (
        id TEXT PRIMARY KEY NOT NULL,
        barang_masuk_id TEXT NOT NULL,
        model_barang_id TEXT NOT NULL,
        serial_number TEXT NOT NULL,
        kondisi TEXT NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a007_barang_kembali (
        id TEXT PRIMARY KEY NOT NULL,
        tanggal TEXT NOT NULL,
        lokasi_id TEXT NOT NULL,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a007_barang_kembali_detail (
        id TEXT PRIMARY KEY NOT NULL,
        barang_kembali_id TEXT NOT NULL,
        model_barang_id TEXT NOT NULL,
        serial_number TEXT NOT NULL,
        kondisi TEXT NOT NULL
    );
    "#,
];

pub async fn initialize_database(db_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_path).is_absolute() {
        std::path::PathBuf::from(db_path)
    } else {
        std::env::current_dir()?.join(db_path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Connecting to database at {}", db_url);
    let conn = Database::connect(&db_url).await?;

    for sql in CREATE_TABLES {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database already initialized"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN.get().expect("database not initialized")
}

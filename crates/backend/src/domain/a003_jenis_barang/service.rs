use super::repository;
use contracts::domain::a001_kategori::aggregate::KategoriId;
use contracts::domain::a003_jenis_barang::aggregate::{JenisBarang, JenisBarangRef};
use uuid::Uuid;

/// Dependent options of the cascading selector
pub async fn list_by_kategori(kategori_id: Option<Uuid>) -> anyhow::Result<Vec<JenisBarangRef>> {
    repository::list_refs(kategori_id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<JenisBarang>> {
    repository::get_by_id(id).await
}

/// Seed item types per category; skipped when any already exist
pub async fn seed(entries: &[(&str, KategoriId)]) -> anyhow::Result<usize> {
    if repository::count().await? > 0 {
        return Ok(0);
    }
    for (nama, kategori_id) in entries {
        repository::insert(&JenisBarang::new_for_insert(nama.to_string(), *kategori_id)).await?;
    }
    Ok(entries.len())
}

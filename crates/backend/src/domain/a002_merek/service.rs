use super::repository;
use contracts::domain::a002_merek::aggregate::{Merek, MerekRef};
use uuid::Uuid;

pub async fn list_refs() -> anyhow::Result<Vec<MerekRef>> {
    repository::list_refs().await
}

pub async fn exists(id: Uuid) -> anyhow::Result<bool> {
    Ok(repository::get_by_id(id).await?.is_some())
}

/// Seed reference data; skipped when any brand already exists
pub async fn seed(names: &[&str]) -> anyhow::Result<usize> {
    if repository::count().await? > 0 {
        return Ok(0);
    }
    for nama in names {
        repository::insert(&Merek::new_for_insert(nama.to_string())).await?;
    }
    Ok(names.len())
}

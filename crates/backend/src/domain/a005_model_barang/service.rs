use super::repository;
use crate::domain::{a001_kategori, a002_merek, a003_jenis_barang};
use crate::shared::error::{AppError, AppResult};
use crate::shared::pagination::make_paginated;
use contracts::domain::a005_model_barang::aggregate::ModelBarang;
use contracts::domain::a005_model_barang::dto::{
    ModelBarangDto, ModelBarangFilter, ModelBarangRef, ModelBarangRow,
};
use contracts::shared::pagination::{clamp_per_page, Paginated};
use contracts::shared::validation::ValidationErrors;
use uuid::Uuid;

/// Requiredness checks that need no database access
pub fn validate_required(dto: &ModelBarangDto) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if dto.nama.trim().is_empty() {
        errors.add("nama", "Nama model wajib diisi");
    }
    if dto.kategori_id.is_none() {
        errors.add("kategori_id", "Kategori wajib dipilih");
    }
    if dto.merek_id.is_none() {
        errors.add("merek_id", "Merek wajib dipilih");
    }
    errors
}

/// Query-string prefix reproduced in the pagination links
fn base_query(filter: &ModelBarangFilter, per_page: u64) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
        parts.push(format!("search={}", urlencoding::encode(search.trim())));
    }
    parts.push(format!("per_page={}", per_page));
    parts.join("&")
}

pub async fn list(filter: ModelBarangFilter) -> AppResult<Paginated<ModelBarangRow>> {
    let per_page = clamp_per_page(filter.per_page);
    let page = filter.page.max(1);
    let search = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let search_merek_ids = match search {
        Some(s) => a002_merek::repository::ids_matching_name(s).await?,
        None => Vec::new(),
    };
    let (items, total) = repository::list_page(search, &search_merek_ids, page, per_page).await?;

    let kategori_names = a001_kategori::repository::name_map().await?;
    let merek_names = a002_merek::repository::name_map().await?;
    let jenis_names = a003_jenis_barang::repository::name_map().await?;

    let rows: Vec<ModelBarangRow> = items
        .into_iter()
        .map(|m| ModelBarangRow {
            id: m.id,
            nama: m.nama,
            label: m.label,
            kategori: kategori_names
                .get(&m.kategori_id.value())
                .cloned()
                .unwrap_or_default(),
            merek: merek_names
                .get(&m.merek_id.value())
                .cloned()
                .unwrap_or_default(),
            jenis: m
                .jenis_id
                .and_then(|j| jenis_names.get(&j.value()).cloned()),
            kategori_id: m.kategori_id,
            merek_id: m.merek_id,
            jenis_id: m.jenis_id,
        })
        .collect();

    Ok(make_paginated(
        rows,
        total,
        page,
        per_page,
        &base_query(&filter, per_page),
    ))
}

pub async fn get_by_id(id: Uuid) -> AppResult<ModelBarang> {
    repository::get_by_id(id).await?.ok_or(AppError::NotFound)
}

/// Distinct labels for the client-side suggestion list
pub async fn labels() -> AppResult<Vec<String>> {
    Ok(repository::distinct_labels().await?)
}

/// Models for the transaction-form dropdowns, with brand names joined in
pub async fn list_refs() -> AppResult<Vec<ModelBarangRef>> {
    let merek_names = a002_merek::repository::name_map().await?;
    let mut refs: Vec<ModelBarangRef> = repository::list_all()
        .await?
        .into_iter()
        .map(|m| ModelBarangRef {
            id: m.id,
            nama: m.nama,
            merek: merek_names
                .get(&m.merek_id.value())
                .cloned()
                .unwrap_or_default(),
        })
        .collect();
    refs.sort_by(|a, b| a.display().to_lowercase().cmp(&b.display().to_lowercase()));
    Ok(refs)
}

/// Create (`dto.id == None`) or update an item model.
///
/// Re-checks the jenis/kategori invariant the cascading selector enforces
/// in the UI and reports violations as field-keyed errors.
pub async fn save(dto: ModelBarangDto) -> AppResult<Uuid> {
    let mut errors = validate_required(&dto);

    if let Some(kategori_id) = dto.kategori_id {
        if !a001_kategori::service::exists(kategori_id.value()).await? {
            errors.add("kategori_id", "Kategori tidak ditemukan");
        }
    }
    if let Some(merek_id) = dto.merek_id {
        if !a002_merek::service::exists(merek_id.value()).await? {
            errors.add("merek_id", "Merek tidak ditemukan");
        }
    }
    if let Some(jenis_id) = dto.jenis_id {
        match a003_jenis_barang::service::get_by_id(jenis_id.value()).await? {
            None => errors.add("jenis_id", "Jenis barang tidak ditemukan"),
            Some(jenis) => {
                if Some(jenis.kategori_id) != dto.kategori_id {
                    errors.add("jenis_id", "Jenis tidak sesuai dengan kategori yang dipilih");
                }
            }
        }
    }

    if let Err(errors) = errors.into_result() {
        return Err(AppError::Validation(errors));
    }

    let nama = dto.nama.trim().to_string();
    let label = dto
        .label
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());
    let kategori_id = dto.kategori_id.expect("validated");
    let merek_id = dto.merek_id.expect("validated");

    match dto.id {
        None => {
            let aggregate =
                ModelBarang::new_for_insert(nama, label, kategori_id, merek_id, dto.jenis_id);
            Ok(repository::insert(&aggregate).await?)
        }
        Some(id) => {
            let mut aggregate = repository::get_by_id(id.value())
                .await?
                .ok_or(AppError::NotFound)?;
            aggregate.nama = nama;
            aggregate.label = label;
            aggregate.kategori_id = kategori_id;
            aggregate.merek_id = merek_id;
            aggregate.jenis_id = dto.jenis_id;
            aggregate.metadata.touch();
            aggregate.metadata.increment_version();
            repository::update(&aggregate).await?;
            Ok(id.value())
        }
    }
}

pub async fn delete(id: Uuid) -> AppResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn count() -> AppResult<u64> {
    Ok(repository::count().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_kategori::aggregate::KategoriId;
    use contracts::domain::a002_merek::aggregate::MerekId;

    #[test]
    fn test_validate_required_empty_dto() {
        let errors = validate_required(&ModelBarangDto::default());
        assert_eq!(errors.get("nama"), Some("Nama model wajib diisi"));
        assert_eq!(errors.get("kategori_id"), Some("Kategori wajib dipilih"));
        assert_eq!(errors.get("merek_id"), Some("Merek wajib dipilih"));
    }

    #[test]
    fn test_validate_required_complete_dto() {
        let dto = ModelBarangDto {
            nama: "ROG Strix G15".to_string(),
            kategori_id: Some(KategoriId::new_v4()),
            merek_id: Some(MerekId::new_v4()),
            ..Default::default()
        };
        assert!(validate_required(&dto).is_empty());
    }

    #[test]
    fn test_base_query_encodes_search() {
        let filter = ModelBarangFilter {
            search: Some("rog strix".to_string()),
            ..Default::default()
        };
        assert_eq!(base_query(&filter, 10), "search=rog%20strix&per_page=10");
    }

    #[test]
    fn test_base_query_skips_blank_search() {
        let filter = ModelBarangFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(base_query(&filter, 25), "per_page=25");
    }
}

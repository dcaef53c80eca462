use super::repository;
use crate::domain::{a001_kategori, a002_merek, a003_jenis_barang, a004_lokasi, a005_model_barang};
use crate::shared::error::{AppError, AppResult};
use crate::shared::pagination::make_paginated;
use contracts::domain::a004_lokasi::aggregate::LokasiRef;
use contracts::domain::a007_barang_kembali::aggregate::{
    BarangKembali, BarangKembaliDetail, BarangKembaliId,
};
use contracts::domain::a007_barang_kembali::dto::{
    BarangKembaliDetailView, BarangKembaliDto, BarangKembaliFilter, BarangKembaliRow,
    BarangKembaliView,
};
use contracts::domain::common::EntityMetadata;
use contracts::enums::kondisi::Kondisi;
use contracts::shared::pagination::{clamp_per_page, Paginated};
use contracts::shared::validation::ValidationErrors;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::a006_barang_masuk::service::parse_tanggal;

/// Checks that need no database access: date format and line completeness
pub fn validate_required(dto: &BarangKembaliDto) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if dto.tanggal.trim().is_empty() {
        errors.add("tanggal", "Tanggal wajib diisi");
    } else if parse_tanggal(&dto.tanggal).is_none() {
        errors.add("tanggal", "Format tanggal tidak valid");
    }
    if dto.lokasi_id.is_none() {
        errors.add("lokasi_id", "Lokasi asal wajib dipilih");
    }
    if dto.details.is_empty() {
        errors.add("details", "Minimal satu baris detail barang");
    }
    for (i, line) in dto.details.iter().enumerate() {
        if line.model_barang_id.is_none() {
            errors.add(
                format!("details.{}.model_barang_id", i),
                "Model barang wajib dipilih",
            );
        }
        if line.serial_number.trim().is_empty() {
            errors.add(
                format!("details.{}.serial_number", i),
                "Nomor seri wajib diisi",
            );
        }
    }
    errors
}

/// Query-string prefix reproduced in the pagination links
fn base_query(filter: &BarangKembaliFilter, per_page: u64) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(tanggal) = filter.tanggal.as_deref().filter(|s| !s.trim().is_empty()) {
        parts.push(format!("tanggal={}", urlencoding::encode(tanggal.trim())));
    }
    if let Some(kategori) = filter.kategori_id {
        parts.push(format!("kategori_id={}", kategori.value()));
    }
    if let Some(lokasi) = filter.lokasi_id {
        parts.push(format!("lokasi_id={}", lokasi.value()));
    }
    if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
        parts.push(format!("search={}", urlencoding::encode(search.trim())));
    }
    parts.push(format!("sort={}", filter.sort.code()));
    parts.push(format!("per_page={}", per_page));
    parts.join("&")
}

pub async fn list(filter: BarangKembaliFilter) -> AppResult<Paginated<BarangKembaliRow>> {
    let per_page = clamp_per_page(filter.per_page);
    let page = filter.page.max(1);
    let query = base_query(&filter, per_page);

    let tanggal = filter.tanggal.as_deref().and_then(parse_tanggal);
    let search = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut id_whitelist: Option<Vec<Uuid>> = None;
    if filter.kategori_id.is_some() || search.is_some() {
        let model_ids = if let Some(kategori) = filter.kategori_id {
            let ids =
                a005_model_barang::repository::ids_matching(Some(kategori.value()), None).await?;
            if ids.is_empty() {
                return Ok(make_paginated(Vec::new(), 0, 1, per_page, &query));
            }
            Some(ids)
        } else {
            None
        };

        let search_model_ids = match search {
            Some(s) => {
                let merek_ids = a002_merek::repository::ids_matching_name(s).await?;
                Some(a005_model_barang::repository::ids_matching_name(s, &merek_ids).await?)
            }
            None => None,
        };

        let ids = repository::header_ids_with_details(
            model_ids.as_deref(),
            search,
            search_model_ids.as_deref(),
        )
        .await?;
        if ids.is_empty() {
            return Ok(make_paginated(Vec::new(), 0, 1, per_page, &query));
        }
        id_whitelist = Some(ids);
    }

    let (headers, total) = repository::list_page(
        tanggal,
        filter.lokasi_id.map(|l| l.value()),
        id_whitelist.as_deref(),
        filter.sort.is_descending(),
        page,
        per_page,
    )
    .await?;

    let header_ids: Vec<Uuid> = headers
        .iter()
        .filter_map(|h| Uuid::parse_str(&h.id).ok())
        .collect();
    let details = repository::details_for(&header_ids).await?;
    let mut first_detail: HashMap<String, &repository::detail::Model> = HashMap::new();
    let mut detail_counts: HashMap<String, usize> = HashMap::new();
    for d in &details {
        first_detail.entry(d.barang_kembali_id.clone()).or_insert(d);
        *detail_counts
            .entry(d.barang_kembali_id.clone())
            .or_insert(0) += 1;
    }

    let models = a005_model_barang::repository::model_map().await?;
    let kategori_names = a001_kategori::repository::name_map().await?;
    let merek_names = a002_merek::repository::name_map().await?;
    let lokasi_names = a004_lokasi::repository::name_map().await?;

    let rows: Vec<BarangKembaliRow> = headers
        .into_iter()
        .map(|h| {
            let first = first_detail.get(&h.id);
            let model = first
                .and_then(|d| Uuid::parse_str(&d.model_barang_id).ok())
                .and_then(|id| models.get(&id));
            BarangKembaliRow {
                id: BarangKembaliId(Uuid::parse_str(&h.id).unwrap_or_else(|_| Uuid::new_v4())),
                tanggal: h.tanggal.format("%Y-%m-%d").to_string(),
                merek: model
                    .and_then(|m| merek_names.get(&m.merek_id.value()).cloned()),
                model: model.map(|m| m.nama.clone()),
                kategori: model
                    .and_then(|m| kategori_names.get(&m.kategori_id.value()).cloned()),
                lokasi: Uuid::parse_str(&h.lokasi_id)
                    .ok()
                    .and_then(|id| lokasi_names.get(&id).cloned())
                    .unwrap_or_default(),
                kondisi: first.and_then(|d| Kondisi::from_code(&d.kondisi)),
                jumlah_detail: detail_counts.get(&h.id).copied().unwrap_or(0),
            }
        })
        .collect();

    Ok(make_paginated(rows, total, page, per_page, &query))
}

/// The nested representation served to the detail modal
pub async fn view(id: Uuid) -> AppResult<BarangKembaliView> {
    let aggregate = repository::get_by_id(id).await?.ok_or(AppError::NotFound)?;

    let models = a005_model_barang::repository::model_map().await?;
    let kategori_names = a001_kategori::repository::name_map().await?;
    let merek_names = a002_merek::repository::name_map().await?;
    let jenis_names = a003_jenis_barang::repository::name_map().await?;
    let lokasi_names = a004_lokasi::repository::name_map().await?;

    let details = aggregate
        .details
        .iter()
        .map(|line| {
            let model = models.get(&line.model_barang_id.value());
            BarangKembaliDetailView {
                id: line.id,
                model_barang_id: line.model_barang_id,
                model: model.map(|m| m.nama.clone()).unwrap_or_default(),
                merek: model
                    .and_then(|m| merek_names.get(&m.merek_id.value()).cloned())
                    .unwrap_or_default(),
                kategori: model
                    .and_then(|m| kategori_names.get(&m.kategori_id.value()).cloned())
                    .unwrap_or_default(),
                jenis: model
                    .and_then(|m| m.jenis_id)
                    .and_then(|j| jenis_names.get(&j.value()).cloned()),
                serial_number: line.serial_number.clone(),
                kondisi: line.kondisi,
            }
        })
        .collect();

    Ok(BarangKembaliView {
        id: aggregate.id,
        tanggal: aggregate.tanggal.format("%Y-%m-%d").to_string(),
        lokasi: LokasiRef {
            id: aggregate.lokasi_id,
            nama: lokasi_names
                .get(&aggregate.lokasi_id.value())
                .cloned()
                .unwrap_or_default(),
        },
        details,
    })
}

/// Create (`dto.id == None`) or update a returned transaction
pub async fn save(dto: BarangKembaliDto) -> AppResult<Uuid> {
    let mut errors = validate_required(&dto);

    if let Some(lokasi_id) = dto.lokasi_id {
        if !a004_lokasi::service::exists(lokasi_id.value()).await? {
            errors.add("lokasi_id", "Lokasi asal tidak ditemukan");
        }
    }
    for (i, line) in dto.details.iter().enumerate() {
        if let Some(model_id) = line.model_barang_id {
            if a005_model_barang::repository::get_by_id(model_id.value())
                .await?
                .is_none()
            {
                errors.add(
                    format!("details.{}.model_barang_id", i),
                    "Model barang tidak ditemukan",
                );
            }
        }
    }

    if let Err(errors) = errors.into_result() {
        return Err(AppError::Validation(errors));
    }

    let tanggal = parse_tanggal(&dto.tanggal).expect("validated");
    let lokasi_id = dto.lokasi_id.expect("validated");
    let details: Vec<BarangKembaliDetail> = dto
        .details
        .iter()
        .map(|line| BarangKembaliDetail {
            id: Uuid::new_v4(),
            model_barang_id: line.model_barang_id.expect("validated"),
            serial_number: line.serial_number.trim().to_string(),
            kondisi: line.kondisi,
        })
        .collect();

    match dto.id {
        None => {
            let aggregate = BarangKembali {
                id: BarangKembaliId::new_v4(),
                tanggal,
                lokasi_id,
                details,
                metadata: EntityMetadata::new(),
            };
            Ok(repository::insert(&aggregate).await?)
        }
        Some(id) => {
            let mut aggregate = repository::get_by_id(id.value())
                .await?
                .ok_or(AppError::NotFound)?;
            aggregate.tanggal = tanggal;
            aggregate.lokasi_id = lokasi_id;
            aggregate.details = details;
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

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_barang_kembali::dto::BarangKembaliDetailDto;

    #[test]
    fn test_validate_required_empty_dto() {
        let errors = validate_required(&BarangKembaliDto::default());
        assert_eq!(errors.get("tanggal"), Some("Tanggal wajib diisi"));
        assert_eq!(errors.get("lokasi_id"), Some("Lokasi asal wajib dipilih"));
        assert_eq!(errors.get("details"), Some("Minimal satu baris detail barang"));
    }

    #[test]
    fn test_validate_line_errors_keyed_by_index() {
        let dto = BarangKembaliDto {
            tanggal: "2025-04-12".to_string(),
            details: vec![
                BarangKembaliDetailDto {
                    serial_number: "SN-001".to_string(),
                    ..Default::default()
                },
                BarangKembaliDetailDto::default(),
            ],
            ..Default::default()
        };
        let errors = validate_required(&dto);
        assert_eq!(
            errors.get("details.0.model_barang_id"),
            Some("Model barang wajib dipilih")
        );
        assert!(errors.get("details.0.serial_number").is_none());
        assert_eq!(
            errors.get("details.1.serial_number"),
            Some("Nomor seri wajib diisi")
        );
    }
}

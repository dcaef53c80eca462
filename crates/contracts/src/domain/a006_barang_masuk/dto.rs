use crate::domain::a001_kategori::aggregate::KategoriId;
use crate::domain::a002_merek::aggregate::MerekId;
use crate::domain::a004_lokasi::aggregate::{LokasiId, LokasiRef};
use crate::domain::a005_model_barang::aggregate::ModelBarangId;
use crate::domain::a006_barang_masuk::aggregate::BarangMasukId;
use crate::enums::kondisi::Kondisi;
use crate::shared::pagination::DEFAULT_PER_PAGE;
use crate::shared::sort::SortOrder;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One editable detail line of the create/edit form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BarangMasukDetailDto {
    pub model_barang_id: Option<ModelBarangId>,
    pub serial_number: String,
    #[serde(default)]
    pub kondisi: Kondisi,
}

/// Create/update payload; `id == None` creates, `Some` updates.
/// `tanggal` is the raw `YYYY-MM-DD` string of the date input; the service
/// parses and validates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BarangMasukDto {
    pub id: Option<BarangMasukId>,
    pub tanggal: String,
    pub asal_id: Option<LokasiId>,
    pub details: Vec<BarangMasukDetailDto>,
}

/// Listing row: summary of the transaction's first line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarangMasukRow {
    pub id: BarangMasukId,
    pub tanggal: String,
    pub merek: Option<String>,
    pub model: Option<String>,
    pub kategori: Option<String>,
    pub asal: String,
    pub jumlah_detail: usize,
}

/// Fully nested representation served by the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarangMasukView {
    pub id: BarangMasukId,
    pub tanggal: String,
    pub asal: LokasiRef,
    pub details: Vec<BarangMasukDetailView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarangMasukDetailView {
    pub id: Uuid,
    pub model_barang_id: ModelBarangId,
    pub model: String,
    pub merek: String,
    pub kategori: String,
    pub jenis: Option<String>,
    pub serial_number: String,
    pub kondisi: Kondisi,
}

/// Query parameters of the incoming-goods listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarangMasukFilter {
    /// Exact transaction date, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tanggal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kategori_id: Option<KategoriId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asal_id: Option<LokasiId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merek_id: Option<MerekId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    #[serde(default = "default_page")]
    pub page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

impl Default for BarangMasukFilter {
    fn default() -> Self {
        Self {
            tanggal: None,
            kategori_id: None,
            asal_id: None,
            merek_id: None,
            search: None,
            sort: SortOrder::default(),
            per_page: DEFAULT_PER_PAGE,
            page: 1,
        }
    }
}

impl BarangMasukFilter {
    /// Number of restricting filters set, shown on the filter-panel badge.
    /// Sort, page and page size are view settings, not filters.
    pub fn active_count(&self) -> usize {
        [
            self.tanggal.is_some(),
            self.kategori_id.is_some(),
            self.asal_id.is_some(),
            self.merek_id.is_some(),
            self.search.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults() {
        let filter: BarangMasukFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter, BarangMasukFilter::default());
        assert_eq!(filter.active_count(), 0);
    }

    #[test]
    fn test_active_count_ignores_view_settings() {
        let filter = BarangMasukFilter {
            tanggal: Some("2025-03-01".to_string()),
            search: Some("SN-1".to_string()),
            sort: SortOrder::Terlama,
            per_page: 50,
            page: 3,
            ..Default::default()
        };
        assert_eq!(filter.active_count(), 2);
    }

    #[test]
    fn test_blank_search_is_not_active() {
        let filter = BarangMasukFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.active_count(), 0);
    }
}

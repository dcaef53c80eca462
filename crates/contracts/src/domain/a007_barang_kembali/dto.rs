use crate::domain::a001_kategori::aggregate::KategoriId;
use crate::domain::a004_lokasi::aggregate::{LokasiId, LokasiRef};
use crate::domain::a005_model_barang::aggregate::ModelBarangId;
use crate::domain::a007_barang_kembali::aggregate::BarangKembaliId;
use crate::enums::kondisi::Kondisi;
use crate::shared::pagination::DEFAULT_PER_PAGE;
use crate::shared::sort::SortOrder;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One editable detail line of the create/edit form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BarangKembaliDetailDto {
    pub model_barang_id: Option<ModelBarangId>,
    pub serial_number: String,
    #[serde(default)]
    pub kondisi: Kondisi,
}

/// Create/update payload; `id == None` creates, `Some` updates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BarangKembaliDto {
    pub id: Option<BarangKembaliId>,
    pub tanggal: String,
    pub lokasi_id: Option<LokasiId>,
    pub details: Vec<BarangKembaliDetailDto>,
}

/// Listing row: summary of the first line plus how many more there are
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarangKembaliRow {
    pub id: BarangKembaliId,
    pub tanggal: String,
    pub merek: Option<String>,
    pub model: Option<String>,
    pub kategori: Option<String>,
    pub lokasi: String,
    pub kondisi: Option<Kondisi>,
    pub jumlah_detail: usize,
}

/// Fully nested representation served by the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarangKembaliView {
    pub id: BarangKembaliId,
    pub tanggal: String,
    pub lokasi: LokasiRef,
    pub details: Vec<BarangKembaliDetailView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarangKembaliDetailView {
    pub id: Uuid,
    pub model_barang_id: ModelBarangId,
    pub model: String,
    pub merek: String,
    pub kategori: String,
    pub jenis: Option<String>,
    pub serial_number: String,
    pub kondisi: Kondisi,
}

/// Query parameters of the returned-goods listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarangKembaliFilter {
    /// Exact transaction date, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tanggal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kategori_id: Option<KategoriId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lokasi_id: Option<LokasiId>,
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

impl Default for BarangKembaliFilter {
    fn default() -> Self {
        Self {
            tanggal: None,
            kategori_id: None,
            lokasi_id: None,
            search: None,
            sort: SortOrder::default(),
            per_page: DEFAULT_PER_PAGE,
            page: 1,
        }
    }
}

impl BarangKembaliFilter {
    /// Number of restricting filters set, shown on the filter-panel badge
    pub fn active_count(&self) -> usize {
        [
            self.tanggal.is_some(),
            self.kategori_id.is_some(),
            self.lokasi_id.is_some(),
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
        let filter: BarangKembaliFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter, BarangKembaliFilter::default());
    }

    #[test]
    fn test_active_count() {
        let filter = BarangKembaliFilter {
            kategori_id: Some(KategoriId::new_v4()),
            lokasi_id: Some(LokasiId::new_v4()),
            page: 2,
            ..Default::default()
        };
        assert_eq!(filter.active_count(), 2);
    }
}

use crate::domain::a001_kategori::aggregate::KategoriId;
use crate::domain::a002_merek::aggregate::MerekId;
use crate::domain::a003_jenis_barang::aggregate::JenisBarangId;
use crate::domain::a005_model_barang::aggregate::ModelBarangId;
use crate::shared::pagination::DEFAULT_PER_PAGE;
use serde::{Deserialize, Serialize};

/// Create/update payload for an item model.
///
/// `id == None` creates, `Some` updates. Optional ids arrive as `None` when
/// the form select is still on its placeholder; the service reports the
/// missing ones as field-keyed validation errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelBarangDto {
    pub id: Option<ModelBarangId>,
    pub nama: String,
    pub label: Option<String>,
    pub kategori_id: Option<KategoriId>,
    pub merek_id: Option<MerekId>,
    pub jenis_id: Option<JenisBarangId>,
}

/// Listing row with reference names already joined in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBarangRow {
    pub id: ModelBarangId,
    pub nama: String,
    pub label: Option<String>,
    pub kategori: String,
    pub merek: String,
    pub jenis: Option<String>,
    pub kategori_id: KategoriId,
    pub merek_id: MerekId,
    pub jenis_id: Option<JenisBarangId>,
}

/// Compact projection for the transaction-form model dropdowns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBarangRef {
    pub id: ModelBarangId,
    pub nama: String,
    pub merek: String,
}

impl ModelBarangRef {
    /// Display string shown in selects ("Asus ROG Strix G15")
    pub fn display(&self) -> String {
        format!("{} {}", self.merek, self.nama)
    }
}

/// Query parameters of the model listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBarangFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

impl Default for ModelBarangFilter {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_from_empty_query() {
        let filter: ModelBarangFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter, ModelBarangFilter::default());
    }

    #[test]
    fn test_ref_display() {
        let r = ModelBarangRef {
            id: ModelBarangId::new_v4(),
            nama: "ROG Strix G15".to_string(),
            merek: "Asus".to_string(),
        };
        assert_eq!(r.display(), "Asus ROG Strix G15");
    }
}

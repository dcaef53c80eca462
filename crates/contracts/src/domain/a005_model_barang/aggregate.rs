use crate::domain::a001_kategori::aggregate::KategoriId;
use crate::domain::a002_merek::aggregate::MerekId;
use crate::domain::a003_jenis_barang::aggregate::JenisBarangId;
use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of an item model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelBarangId(pub Uuid);

impl ModelBarangId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ModelBarangId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ModelBarangId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Catalog entry combining brand, category, optional type and a free-form
/// label tag ("Asus ROG Strix G15", kategori Laptop, jenis Gaming)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBarang {
    pub id: ModelBarangId,
    pub nama: String,
    /// Free-form tag, lazily accumulated into the client suggestion list
    pub label: Option<String>,
    pub kategori_id: KategoriId,
    pub merek_id: MerekId,
    /// When set, the jenis must belong to `kategori_id`
    pub jenis_id: Option<JenisBarangId>,
    pub metadata: EntityMetadata,
}

impl ModelBarang {
    pub fn new_for_insert(
        nama: String,
        label: Option<String>,
        kategori_id: KategoriId,
        merek_id: MerekId,
        jenis_id: Option<JenisBarangId>,
    ) -> Self {
        Self {
            id: ModelBarangId::new_v4(),
            nama,
            label,
            kategori_id,
            merek_id,
            jenis_id,
            metadata: EntityMetadata::new(),
        }
    }
}

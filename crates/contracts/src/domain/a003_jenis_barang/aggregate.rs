use crate::domain::a001_kategori::aggregate::KategoriId;
use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of an item type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JenisBarangId(pub Uuid);

impl JenisBarangId {
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

impl AggregateId for JenisBarangId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(JenisBarangId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Item type, a sub-classification scoped to exactly one category
/// ("Gaming" under "Laptop", "Inkjet" under "Printer")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JenisBarang {
    pub id: JenisBarangId,
    pub nama: String,
    pub kategori_id: KategoriId,
    pub metadata: EntityMetadata,
}

impl JenisBarang {
    pub fn new_for_insert(nama: String, kategori_id: KategoriId) -> Self {
        Self {
            id: JenisBarangId::new_v4(),
            nama,
            kategori_id,
            metadata: EntityMetadata::new(),
        }
    }
}

/// Option-list projection returned by the cascading lookup endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JenisBarangRef {
    pub id: JenisBarangId,
    pub nama: String,
    pub kategori_id: KategoriId,
}

impl From<&JenisBarang> for JenisBarangRef {
    fn from(j: &JenisBarang) -> Self {
        Self {
            id: j.id,
            nama: j.nama.clone(),
            kategori_id: j.kategori_id,
        }
    }
}

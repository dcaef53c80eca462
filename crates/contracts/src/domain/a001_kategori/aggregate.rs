use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KategoriId(pub Uuid);

impl KategoriId {
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

impl AggregateId for KategoriId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(KategoriId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Item category ("Laptop", "Printer", ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kategori {
    pub id: KategoriId,
    pub nama: String,
    pub metadata: EntityMetadata,
}

impl Kategori {
    pub fn new_for_insert(nama: String) -> Self {
        Self {
            id: KategoriId::new_v4(),
            nama,
            metadata: EntityMetadata::new(),
        }
    }
}

/// Option-list projection used by dropdowns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KategoriRef {
    pub id: KategoriId,
    pub nama: String,
}

impl From<&Kategori> for KategoriRef {
    fn from(k: &Kategori) -> Self {
        Self {
            id: k.id,
            nama: k.nama.clone(),
        }
    }
}

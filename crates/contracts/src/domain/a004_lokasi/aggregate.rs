use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LokasiId(pub Uuid);

impl LokasiId {
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

impl AggregateId for LokasiId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LokasiId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Location: the origin of incoming goods and the source of returns
/// ("Gudang Pusat", "Kantor Cabang Bandung", ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lokasi {
    pub id: LokasiId,
    pub nama: String,
    pub metadata: EntityMetadata,
}

impl Lokasi {
    pub fn new_for_insert(nama: String) -> Self {
        Self {
            id: LokasiId::new_v4(),
            nama,
            metadata: EntityMetadata::new(),
        }
    }
}

/// Option-list projection used by dropdowns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LokasiRef {
    pub id: LokasiId,
    pub nama: String,
}

impl From<&Lokasi> for LokasiRef {
    fn from(l: &Lokasi) -> Self {
        Self {
            id: l.id,
            nama: l.nama.clone(),
        }
    }
}

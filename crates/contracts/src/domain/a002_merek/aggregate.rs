use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerekId(pub Uuid);

impl MerekId {
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

impl AggregateId for MerekId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MerekId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Brand ("Asus", "Epson", ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Merek {
    pub id: MerekId,
    pub nama: String,
    pub metadata: EntityMetadata,
}

impl Merek {
    pub fn new_for_insert(nama: String) -> Self {
        Self {
            id: MerekId::new_v4(),
            nama,
            metadata: EntityMetadata::new(),
        }
    }
}

/// Option-list projection used by dropdowns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerekRef {
    pub id: MerekId,
    pub nama: String,
}

impl From<&Merek> for MerekRef {
    fn from(m: &Merek) -> Self {
        Self {
            id: m.id,
            nama: m.nama.clone(),
        }
    }
}

use crate::domain::a004_lokasi::aggregate::LokasiId;
use crate::domain::a005_model_barang::aggregate::ModelBarangId;
use crate::domain::common::{AggregateId, EntityMetadata};
use crate::enums::kondisi::Kondisi;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of an incoming-goods transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarangMasukId(pub Uuid);

impl BarangMasukId {
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

impl AggregateId for BarangMasukId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BarangMasukId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// One line of an incoming transaction: a unit of some model in some condition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarangMasukDetail {
    pub id: Uuid,
    pub model_barang_id: ModelBarangId,
    pub serial_number: String,
    pub kondisi: Kondisi,
}

/// Incoming-goods transaction: a dated event with one or more detail lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarangMasuk {
    pub id: BarangMasukId,
    pub tanggal: chrono::NaiveDate,
    pub asal_id: LokasiId,
    pub details: Vec<BarangMasukDetail>,
    pub metadata: EntityMetadata,
}

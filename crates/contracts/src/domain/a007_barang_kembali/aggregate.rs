use crate::domain::a004_lokasi::aggregate::LokasiId;
use crate::domain::a005_model_barang::aggregate::ModelBarangId;
use crate::domain::common::{AggregateId, EntityMetadata};
use crate::enums::kondisi::Kondisi;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a returned-goods transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarangKembaliId(pub Uuid);

impl BarangKembaliId {
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

impl AggregateId for BarangKembaliId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BarangKembaliId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// One line of a return: a unit of some model and its condition on return
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarangKembaliDetail {
    pub id: Uuid,
    pub model_barang_id: ModelBarangId,
    pub serial_number: String,
    /// Condition recorded at the moment the unit came back
    pub kondisi: Kondisi,
}

/// Returned-goods transaction: a dated event with one or more detail lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarangKembali {
    pub id: BarangKembaliId,
    pub tanggal: chrono::NaiveDate,
    pub lokasi_id: LokasiId,
    pub details: Vec<BarangKembaliDetail>,
    pub metadata: EntityMetadata,
}

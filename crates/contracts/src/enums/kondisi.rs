use serde::{Deserialize, Serialize};

/// Condition of a single item unit on a transaction line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kondisi {
    Bagus,
    Rusak,
    Hilang,
}

impl Kondisi {
    pub const ALL: [Kondisi; 3] = [Kondisi::Bagus, Kondisi::Rusak, Kondisi::Hilang];

    /// Stable storage/wire code
    pub fn code(&self) -> &'static str {
        match self {
            Kondisi::Bagus => "bagus",
            Kondisi::Rusak => "rusak",
            Kondisi::Hilang => "hilang",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "bagus" => Some(Kondisi::Bagus),
            "rusak" => Some(Kondisi::Rusak),
            "hilang" => Some(Kondisi::Hilang),
            _ => None,
        }
    }

    /// Display label (Indonesian, as shown in the UI)
    pub fn label(&self) -> &'static str {
        match self {
            Kondisi::Bagus => "Bagus",
            Kondisi::Rusak => "Rusak",
            Kondisi::Hilang => "Hilang",
        }
    }
}

impl Default for Kondisi {
    fn default() -> Self {
        Kondisi::Bagus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for k in Kondisi::ALL {
            assert_eq!(Kondisi::from_code(k.code()), Some(k));
        }
        assert_eq!(Kondisi::from_code("baru"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Kondisi::Rusak).unwrap();
        assert_eq!(json, "\"rusak\"");
        let back: Kondisi = serde_json::from_str("\"hilang\"").unwrap();
        assert_eq!(back, Kondisi::Hilang);
    }
}

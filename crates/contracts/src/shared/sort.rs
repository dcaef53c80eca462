use serde::{Deserialize, Serialize};

/// Sort order of transaction listings, newest first by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Terbaru,
    Terlama,
}

impl SortOrder {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Terbaru)
    }

    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::Terbaru => "terbaru",
            SortOrder::Terlama => "terlama",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "terbaru" => Some(SortOrder::Terbaru),
            "terlama" => Some(SortOrder::Terlama),
            _ => None,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Terbaru
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_newest_first() {
        assert_eq!(SortOrder::default(), SortOrder::Terbaru);
        assert!(SortOrder::default().is_descending());
    }

    #[test]
    fn test_code_round_trip() {
        assert_eq!(SortOrder::from_code("terlama"), Some(SortOrder::Terlama));
        assert_eq!(SortOrder::from_code("oldest"), None);
    }
}

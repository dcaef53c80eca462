use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field-keyed validation errors returned by write endpoints with HTTP 422.
///
/// Keys are DTO field names (`nama`, `kategori_id`, `details.2.serial_number`);
/// values are human-readable messages shown inline under the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Convert into `Err(self)` when any error was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("nama", "Nama wajib diisi");
        errors.add("nama", "duplicate message");
        assert_eq!(errors.get("nama"), Some("Nama wajib diisi"));
        assert_eq!(errors.errors.len(), 1);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());
        let mut errors = ValidationErrors::new();
        errors.add("tanggal", "Tanggal wajib diisi");
        assert!(errors.into_result().is_err());
    }
}

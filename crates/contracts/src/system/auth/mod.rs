use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Permission names checked by the UI to gate affordances.
///
/// Membership in the set only controls what the pages render; it is not an
/// authorization mechanism.
pub mod permission {
    pub const CREATE_MODEL_BARANG: &str = "create model barang";
    pub const EDIT_MODEL_BARANG: &str = "edit model barang";
    pub const DELETE_MODEL_BARANG: &str = "delete model barang";

    pub const CREATE_BARANG_MASUK: &str = "create barang masuk";
    pub const EDIT_BARANG_MASUK: &str = "edit barang masuk";
    pub const DELETE_BARANG_MASUK: &str = "delete barang masuk";

    pub const CREATE_BARANG_KEMBALI: &str = "create barang kembali";
    pub const EDIT_BARANG_KEMBALI: &str = "edit barang kembali";
    pub const DELETE_BARANG_KEMBALI: &str = "delete barang kembali";
}

/// The set of permission names granted to the current session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(HashSet<String>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allows(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(names: Vec<String>) -> Self {
        Self(names.into_iter().collect())
    }
}

impl FromIterator<String> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let set = PermissionSet::from(vec![
            permission::CREATE_MODEL_BARANG.to_string(),
            permission::DELETE_BARANG_MASUK.to_string(),
        ]);
        assert!(set.allows(permission::CREATE_MODEL_BARANG));
        assert!(!set.allows(permission::EDIT_MODEL_BARANG));
    }

    #[test]
    fn test_serde_transparent() {
        let set = PermissionSet::from(vec!["create barang masuk".to_string()]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"create barang masuk\"]");
        let back: PermissionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}

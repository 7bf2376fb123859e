//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User record stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Document ID assigned by Firestore on insert; never written back
    /// into the document body.
    #[serde(alias = "_firestore_id", skip_serializing, default)]
    pub id: Option<String>,
    /// Username, stored verbatim (no uniqueness check, no trimming)
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_not_serialized_into_document() {
        let user = User {
            id: Some("abc123".to_string()),
            username: "fcc_test".to_string(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["username"], "fcc_test");
    }

    #[test]
    fn test_id_is_read_from_firestore_alias() {
        let user: User =
            serde_json::from_str(r#"{"_firestore_id":"abc123","username":"fcc_test"}"#).unwrap();
        assert_eq!(user.id.as_deref(), Some("abc123"));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A word in the crossword word list, with its clue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordEntry {
    pub id: String,
    /// Answer text as entered (case-insensitive)
    #[serde(rename = "word")]
    pub text: String,
    pub clue: String,
    /// When the word was added through the admin API
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl WordEntry {
    pub fn new(id: impl Into<String>, text: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            clue: clue.into(),
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_entry_uses_stored_field_names() {
        let json = r#"{"id": "1", "word": "cat", "clue": "pet", "createdAt": "2024-05-01T10:00:00Z"}"#;
        let entry: WordEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id, "1");
        assert_eq!(entry.text, "cat");
        assert_eq!(entry.clue, "pet");
        assert!(entry.created_at.is_some());
    }

    #[test]
    fn test_word_entry_without_timestamp() {
        let json = r#"{"id": "2", "word": "dog", "clue": "barks"}"#;
        let entry: WordEntry = serde_json::from_str(json).unwrap();
        assert!(entry.created_at.is_none());

        let out = serde_json::to_string(&entry).unwrap();
        assert!(!out.contains("createdAt"));
        assert!(out.contains(r#""word":"dog""#));
    }
}

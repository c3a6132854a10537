//! Substitution dictionaries stored as JSON
//!
//! A dictionary file is a flat JSON object whose keys and values are strings.
//! Key order in the file is the order substitutions are applied in.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;

use crate::error::{ComfortError, IoResultExt, Result};

/// Parse a dictionary from JSON text.
///
/// `source` is only used to label errors.
pub fn parse_dictionary(text: &str, source: &Path) -> Result<IndexMap<String, String>> {
    serde_json::from_str::<IndexMap<String, String>>(text).map_err(|e| {
        ComfortError::MalformedInput {
            path: source.to_path_buf(),
            message: format!("expected a flat JSON object of strings ({})", e),
        }
    })
}

/// Load a dictionary file.
///
/// # Errors
///
/// `NotFound` when the file is missing, `MalformedInput` when it is not a
/// flat string-to-string JSON object.
pub fn load_dictionary(path: &Path) -> Result<IndexMap<String, String>> {
    let text = fs::read_to_string(path).at_path(path)?;
    let dictionary = parse_dictionary(&text, path)?;
    debug!("Loaded {} substitutions from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_keep_file_order() {
        let text = r#"{"zeta": "z", "alpha": "a", "mid": "m"}"#;
        let dictionary = parse_dictionary(text, Path::new("d.json")).unwrap();
        let keys: Vec<&str> = dictionary.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_rejects_non_string_values() {
        for text in [r#"{"a": 1}"#, r#"{"a": {"b": "c"}}"#, r#"["a", "b"]"#, "not json"] {
            let err = parse_dictionary(text, Path::new("bad.json")).unwrap_err();
            assert!(matches!(err, ComfortError::MalformedInput { .. }), "accepted {}", text);
        }
    }

    #[test]
    fn test_load_dictionary_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("subs.json");
        fs::write(&path, r#"{"test1": "new1", "test2": "new2"}"#).unwrap();

        let dictionary = load_dictionary(&path).unwrap();
        assert_eq!(dictionary.get("test2").map(String::as_str), Some("new2"));

        let missing = load_dictionary(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, ComfortError::NotFound(_)));
    }
}

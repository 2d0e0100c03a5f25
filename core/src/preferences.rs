use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Flat key/value settings the host keeps on behalf of an extension.
///
/// Values are whatever the host stored: usually strings, sometimes numbers.
/// Extensions read them; only the host writes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    values: HashMap<String, serde_json::Value>,
}

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("Failed to read preferences file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Preferences must be a flat JSON object: {0}")]
    Format(#[from] serde_json::Error),
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, PreferencesError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PreferencesError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PreferencesError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded preferences file");
        Self::from_json_str(&json)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style [`Preferences::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// String value for `key`. `None` if missing or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Overlays `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: Preferences) {
        self.values.extend(other.values);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.values.iter()
    }
}

impl FromIterator<(String, serde_json::Value)> for Preferences {
    fn from_iter<T: IntoIterator<Item = (String, serde_json::Value)>>(iter: T) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn reads_strings_and_numbers() {
        let prefs = Preferences::from_json_str(r#"{"llama_host": "http://localhost:5000/", "llama_top_k": 40}"#).unwrap();
        assert_eq!(prefs.get_str("llama_host"), Some("http://localhost:5000/"));
        assert_eq!(prefs.get("llama_top_k"), Some(&json!(40)));
        assert_eq!(prefs.get_str("llama_top_k"), None);
        assert!(!prefs.contains_key("llama_kw"));
    }

    #[test]
    fn rejects_non_object() {
        assert!(matches!(
            Preferences::from_json_str("[1, 2]"),
            Err(PreferencesError::Format(_))
        ));
    }

    #[test]
    fn merge_overrides_existing_keys() {
        let mut base = Preferences::new().with("a", "1").with("b", "2");
        base.merge(Preferences::new().with("b", "3").with("c", 4));
        assert_eq!(base.get_str("a"), Some("1"));
        assert_eq!(base.get_str("b"), Some("3"));
        assert_eq!(base.get("c"), Some(&json!(4)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"llama_kw": "ask"}}"#).unwrap();
        let prefs = Preferences::from_json_file(file.path()).unwrap();
        assert_eq!(prefs.get_str("llama_kw"), Some("ask"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Preferences::from_json_file(dir.path().join("nope.json"));
        assert!(matches!(result, Err(PreferencesError::Io { .. })));
    }
}

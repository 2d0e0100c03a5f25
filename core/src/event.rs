use serde::{Deserialize, Serialize};

/// Raised while the user types a query that starts with an extension's keyword.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeywordQueryEvent {
    /// Full text of the launcher input, keyword included.
    pub query: String,
}

impl KeywordQueryEvent {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }

    /// First whitespace-separated word of the query.
    pub fn keyword(&self) -> Option<&str> {
        self.query.split_whitespace().next()
    }

    /// Everything after the keyword and the following whitespace.
    pub fn argument(&self) -> Option<&str> {
        let trimmed = self.query.trim_start();
        let (_, rest) = trimmed.split_once(char::is_whitespace)?;
        Some(rest.trim_start()).filter(|s| !s.is_empty())
    }
}

/// Raised when the user selects an item whose action was
/// [`crate::Action::ExtensionCustom`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemEnterEvent {
    pub data: serde_json::Value,
}

impl ItemEnterEvent {
    pub fn new(data: serde_json::Value) -> Self {
        Self { data }
    }

    /// String field of the payload, if present.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }
}

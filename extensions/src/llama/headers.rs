use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use super::error::LlamaError;

/// Extra headers sent with every request, parsed from a `name:value,name:value` string.
///
/// Values usually hold credentials, so they are kept as secrets and redacted
/// from `Debug` output. Names are case-insensitive and stored lowercased.
#[derive(Clone, Debug, Default)]
pub struct HeaderSet {
    entries: Vec<(HeaderName, SecretString)>,
}

impl HeaderSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str().eq_ignore_ascii_case(name))
            .map(|(_, v)| v.expose_secret())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    fn insert(&mut self, name: HeaderName, value: SecretString) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Converts to a `reqwest` header map.
    pub(crate) fn to_header_map(&self) -> Result<HeaderMap, LlamaError> {
        let mut map = HeaderMap::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            let mut value = HeaderValue::from_str(value.expose_secret())
                .map_err(|_| LlamaError::Configuration(format!("Invalid value for header '{}'", name.as_str())))?;
            value.set_sensitive(true);
            map.insert(name.clone(), value);
        }
        Ok(map)
    }
}

/// Parses the header preference.
///
/// An empty (or all-whitespace) string yields no headers. Otherwise every
/// comma-separated segment must contain exactly one `:` with a non-empty name
/// and value on either side. Names compare case-insensitively and later
/// duplicates replace earlier ones.
pub fn build_headers(raw: &str) -> Result<HeaderSet, LlamaError> {
    let mut headers = HeaderSet::default();
    if raw.trim().is_empty() {
        return Ok(headers);
    }

    for segment in raw.split(',') {
        let mut parts = segment.split(':');
        let (name, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(value), None) => (name.trim(), value.trim()),
            _ => {
                return Err(LlamaError::Configuration(format!(
                    "Header entry '{}' must have the form 'name:value'",
                    segment.trim()
                )));
            }
        };
        if name.is_empty() || value.is_empty() {
            return Err(LlamaError::Configuration(format!(
                "Header entry '{}' has an empty name or value",
                segment.trim()
            )));
        }
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| LlamaError::Configuration(format!("Invalid header name '{}'", name)))?;
        HeaderValue::from_str(value)
            .map_err(|_| LlamaError::Configuration(format!("Invalid value for header '{}'", name)))?;

        headers.insert(header_name, SecretString::from(value.to_string()));
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_config_error(raw: &str) {
        match build_headers(raw) {
            Err(LlamaError::Configuration(_)) => {}
            other => panic!("expected configuration error for {raw:?}, got {other:?}"),
        }
    }

    #[test]
    fn parses_and_trims() {
        let headers = build_headers(" k1 : v1 ,k2:v2").unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("k1"), Some("v1"));
        assert_eq!(headers.get("k2"), Some("v2"));
    }

    #[test]
    fn empty_string_means_no_headers() {
        assert!(build_headers("").unwrap().is_empty());
        assert!(build_headers("   ").unwrap().is_empty());
    }

    #[test]
    fn missing_colon_is_rejected() {
        assert_config_error("Authorization");
        assert_config_error("a:b,c");
    }

    #[test]
    fn extra_colon_is_rejected() {
        assert_config_error("Referer:http://example.com");
    }

    #[test]
    fn empty_parts_are_rejected() {
        assert_config_error("a:b,");
        assert_config_error(":value");
        assert_config_error("name: ");
        assert_config_error(",");
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        assert_config_error("bad name:value");
    }

    #[test]
    fn later_duplicates_win() {
        let headers = build_headers("x:1,x:2").unwrap();
        assert_eq!(headers.get("x"), Some("2"));

        let headers = build_headers("x-key:1,X-Key:2").unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X-KEY"), Some("2"));
        let map = headers.to_header_map().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("x-key").unwrap(), "2");
    }

    #[test]
    fn names_are_lowercased_in_insertion_order() {
        let headers = build_headers("X-Api-Key:abc,Accept:json,x-api-key:def").unwrap();
        assert_eq!(headers.names().collect::<Vec<_>>(), ["x-api-key", "accept"]);
    }

    #[test]
    fn debug_output_hides_values() {
        let headers = build_headers("Authorization:Bearer secret-token").unwrap();
        let debug = format!("{headers:?}");
        assert!(debug.contains("authorization"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn converts_to_header_map() {
        let map = build_headers("X-Api-Key:abc,Accept:application/json")
            .unwrap()
            .to_header_map()
            .unwrap();
        assert_eq!(map.get("x-api-key").unwrap(), "abc");
        assert_eq!(map.get("accept").unwrap(), "application/json");
        assert!(map.get("x-api-key").unwrap().is_sensitive());
    }
}

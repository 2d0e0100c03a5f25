use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use ullama_core::Preferences;

use super::error::LlamaError;
use super::headers::{HeaderSet, build_headers};

pub const PREF_HOST: &str = "llama_host";
pub const PREF_HEADERS: &str = "llama_headers";
pub const PREF_KEYWORD: &str = "llama_kw";
pub const PREF_SYSTEM_PROMPT: &str = "llama_system_prompt";

const DEFAULT_KEYWORD: &str = "llama";

/// Sampling parameters forwarded verbatim in the generate request.
///
/// Values are whatever the preferences hold; the server does the type checking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationParams {
    pub llama_max_context_length: serde_json::Value,
    pub llama_max_length: serde_json::Value,
    pub llama_rep_pen: serde_json::Value,
    pub llama_rep_pen_range: serde_json::Value,
    pub llama_rep_pen_slope: serde_json::Value,
    pub llama_temperature: serde_json::Value,
    pub llama_top_k: serde_json::Value,
    pub llama_top_p: serde_json::Value,
}

impl GenerationParams {
    /// Preference keys, in request order.
    pub const KEYS: [&'static str; 8] = [
        "llama_max_context_length",
        "llama_max_length",
        "llama_rep_pen",
        "llama_rep_pen_range",
        "llama_rep_pen_slope",
        "llama_temperature",
        "llama_top_k",
        "llama_top_p",
    ];

    pub fn from_preferences(prefs: &Preferences) -> Result<Self, LlamaError> {
        let get = |key: &str| {
            prefs
                .get(key)
                .cloned()
                .ok_or_else(|| LlamaError::Configuration(format!("Missing preference '{}'", key)))
        };
        Ok(Self {
            llama_max_context_length: get("llama_max_context_length")?,
            llama_max_length: get("llama_max_length")?,
            llama_rep_pen: get("llama_rep_pen")?,
            llama_rep_pen_range: get("llama_rep_pen_range")?,
            llama_rep_pen_slope: get("llama_rep_pen_slope")?,
            llama_temperature: get("llama_temperature")?,
            llama_top_k: get("llama_top_k")?,
            llama_top_p: get("llama_top_p")?,
        })
    }
}

/// Immutable settings for [`super::LlamaClient`], read once from preferences.
#[derive(Clone, Debug)]
pub struct LlamaConfig {
    /// Server root, always ending in `/`.
    pub(crate) host: Url,
    pub(crate) headers: HeaderSet,
    pub(crate) keyword: String,
    pub(crate) system_prompt: String,
    pub(crate) params: GenerationParams,
}

impl LlamaConfig {
    /// Creates a configuration with no extra headers and an empty system prompt.
    ///
    /// # Errors
    /// Returns `LlamaError::Configuration` if `host` is not an absolute URL.
    pub fn new(host: &str, params: GenerationParams) -> Result<Self, LlamaError> {
        Ok(Self {
            host: parse_host(host)?,
            headers: HeaderSet::default(),
            keyword: DEFAULT_KEYWORD.to_string(),
            system_prompt: String::new(),
            params,
        })
    }

    /// Reads `llama_host`, `llama_headers`, `llama_kw`, `llama_system_prompt`
    /// and the eight generation parameters.
    ///
    /// `llama_host` and the generation parameters are required. The string
    /// preferences must actually be strings when present.
    #[instrument(name = "llama_config_from_preferences", skip(prefs))]
    pub fn from_preferences(prefs: &Preferences) -> Result<Self, LlamaError> {
        let host = required_str(prefs, PREF_HOST)?;
        let params = GenerationParams::from_preferences(prefs)?;
        let headers = build_headers(optional_str(prefs, PREF_HEADERS)?.unwrap_or_default())?;

        let config = Self::new(host, params)?
            .with_headers(headers)
            .with_keyword(optional_str(prefs, PREF_KEYWORD)?.unwrap_or(DEFAULT_KEYWORD))
            .with_system_prompt(optional_str(prefs, PREF_SYSTEM_PROMPT)?.unwrap_or_default());

        let header_names: Vec<&str> = config.headers.names().collect();
        debug!(host = %config.host, headers = ?header_names, keyword = %config.keyword, "Loaded llama configuration");
        Ok(config)
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderSet) -> Self {
        self.headers = headers;
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    #[must_use]
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn host(&self) -> &Url {
        &self.host
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Resolves an endpoint path such as `api/v1/model` against the host.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, LlamaError> {
        self.host
            .join(path)
            .map_err(|e| LlamaError::Configuration(format!("Invalid endpoint '{}': {}", path, e)))
    }
}

fn parse_host(host: &str) -> Result<Url, LlamaError> {
    let trimmed = host.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| LlamaError::Configuration(format!("Invalid host URL '{}': {}", host, e)))?;
    if url.cannot_be_a_base() {
        return Err(LlamaError::Configuration(format!("Host URL '{}' cannot be used as a base", host)));
    }
    Ok(url)
}

fn required_str<'a>(prefs: &'a Preferences, key: &str) -> Result<&'a str, LlamaError> {
    optional_str(prefs, key)?
        .ok_or_else(|| LlamaError::Configuration(format!("Missing preference '{}'", key)))
}

fn optional_str<'a>(prefs: &'a Preferences, key: &str) -> Result<Option<&'a str>, LlamaError> {
    match prefs.get(key) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(LlamaError::Configuration(format!(
            "Preference '{}' must be a string, got {}",
            key, other
        ))),
    }
}

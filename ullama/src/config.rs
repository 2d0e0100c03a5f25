use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;
use ullama_core::Preferences;
use ullama_extensions::llama::PREF_HOST;

/// Preference defaults shipped with the binary, like a launcher manifest's.
const DEFAULT_PREFERENCES: &str = include_str!("../preferences.json");

/// Builds the preferences handed to the extension.
///
/// Layers, later wins: bundled defaults, `prefs_file`, `host`, then each
/// `KEY=VALUE` override.
pub fn load_preferences(
    prefs_file: Option<&Path>,
    host: Option<String>,
    overrides: &[String],
) -> Result<Preferences> {
    let mut prefs = Preferences::from_json_str(DEFAULT_PREFERENCES)
        .context("Bundled preferences are not valid JSON")?;

    if let Some(path) = prefs_file {
        let file_prefs = Preferences::from_json_file(path)
            .with_context(|| format!("Failed to load preferences from {}", path.display()))?;
        prefs.merge(file_prefs);
    }

    if let Some(host) = host {
        debug!(%host, "Host overridden");
        prefs.set(PREF_HOST, host);
    }

    for entry in overrides {
        let (key, value) = parse_override(entry)?;
        debug!(%key, "Preference overridden");
        prefs.set(key, value);
    }

    Ok(prefs)
}

/// Splits `KEY=VALUE`. Numbers and booleans become JSON scalars, a quoted
/// value becomes the string inside the quotes, anything else stays a string.
pub fn parse_override(entry: &str) -> Result<(String, serde_json::Value)> {
    let Some((key, raw)) = entry.split_once('=') else {
        bail!("Override '{}' must have the form KEY=VALUE", entry);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Override '{}' has an empty key", entry);
    }

    let value = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value @ (serde_json::Value::Number(_) | serde_json::Value::Bool(_) | serde_json::Value::String(_))) => value,
        _ => serde_json::Value::String(raw.to_string()),
    };
    Ok((key.to_string(), value))
}

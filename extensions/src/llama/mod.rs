//! Launcher extension that forwards queries to a KoboldAI-style `api/v1` server.

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info, instrument};

use ullama_core::extension::Extension;
use ullama_core::{Action, ExtensionError, ItemEnterEvent, KeywordQueryEvent, Preferences, ResultItem};

mod client;
mod config;
mod error;
mod headers;
mod helpers;

pub use client::LlamaClient;
pub use config::{GenerationParams, LlamaConfig, PREF_HEADERS, PREF_HOST, PREF_KEYWORD, PREF_SYSTEM_PROMPT};
pub use error::{LlamaError, REMOTE_SERVICE_MESSAGE};
pub use headers::{HeaderSet, build_headers};
pub use helpers::{GenerationRequest, GenerationResult, ModelResponse};

const EXTENSION_URI: &str = "https://github.com/ullama/ullama/tree/main/extensions/src/llama";

pub const ICON: &str = "images/llama.png";

pub struct LlamaExtension {
    client: LlamaClient,
}

impl LlamaExtension {
    pub fn new(client: LlamaClient) -> Self {
        Self { client }
    }

    pub fn from_preferences(prefs: &Preferences) -> Result<Self, LlamaError> {
        let config = LlamaConfig::from_preferences(prefs)?;
        Ok(Self::new(LlamaClient::new(config)?))
    }

    pub fn client(&self) -> &LlamaClient {
        &self.client
    }

    /// The typed query with the leading `"{keyword} "` removed.
    ///
    /// Only the prefix is stripped, so the keyword may still appear inside the
    /// question itself (`"llama tell me about llama farming"` keeps its second
    /// `llama`).
    fn strip_keyword<'a>(&self, query: &'a str) -> &'a str {
        let keyword = self.client.config().keyword();
        query
            .strip_prefix(keyword)
            .and_then(|rest| rest.strip_prefix(' '))
            .unwrap_or(query)
    }
}

#[async_trait]
impl Extension for LlamaExtension {
    fn uri(&self) -> &str {
        EXTENSION_URI
    }

    fn name(&self) -> &str {
        "Llama"
    }

    fn description(&self) -> &str {
        "Ask a KoboldAI-compatible text generation server and copy the answer."
    }

    fn keyword(&self) -> &str {
        self.client.config().keyword()
    }

    /// Lists the server's models as "Ask {model}..." items. The description is
    /// the query with only its leading keyword removed, see `strip_keyword`.
    #[instrument(skip(self, event))]
    async fn on_keyword_query(&self, event: &KeywordQueryEvent) -> Result<Action, ExtensionError> {
        let models = self.client.list_models().await?;
        let query = self.strip_keyword(&event.query);
        debug!(query, model_count = models.len(), "Rendering model list");

        let items = models
            .into_iter()
            .map(|model| {
                ResultItem::new(
                    ICON,
                    format!("Ask {}...", model),
                    query,
                    Action::custom(json!({ "query": query, "model": model }), true),
                )
            })
            .collect();

        Ok(Action::render(items))
    }

    #[instrument(skip(self, event))]
    async fn on_item_enter(&self, event: &ItemEnterEvent) -> Result<Action, ExtensionError> {
        info!(data = %event.data, "Item selected");
        let query = event
            .get_str("query")
            .ok_or_else(|| ExtensionError::InvalidEvent("Missing 'query' in item data".to_string()))?;

        let result = self.client.generate(query).await?;
        let text = result.display_text().into_owned();
        debug!(response = %text, "Generated response");

        Ok(Action::render(vec![ResultItem::new(
            ICON,
            "Llama says..",
            text.clone(),
            Action::copy_to_clipboard(text),
        )]))
    }
}

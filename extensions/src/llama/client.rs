use reqwest::{Client, Response, StatusCode};
use tracing::{debug, error, instrument, trace};

use super::config::LlamaConfig;
use super::error::LlamaError;
use super::helpers::{GenerationRequest, GenerationResult, ModelResponse};

const MODEL_PATH: &str = "api/v1/model";
const GENERATE_PATH: &str = "api/v1/generate";

/// Client for a KoboldAI-style text generation server.
///
/// Every call is a single request: no retries, no timeouts beyond those of the
/// supplied HTTP client. Transport errors surface as [`LlamaError::Network`].
#[derive(Clone, Debug)]
pub struct LlamaClient {
    config: LlamaConfig,
    http_client: Client,
}

impl LlamaClient {
    pub fn new(config: LlamaConfig) -> Result<Self, LlamaError> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| LlamaError::Configuration(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_http_client(config, http_client))
    }

    pub fn with_http_client(config: LlamaConfig, http_client: Client) -> Self {
        debug!(host = %config.host, "Llama client initialized.");
        Self { config, http_client }
    }

    pub fn config(&self) -> &LlamaConfig {
        &self.config
    }

    /// Lists the models served by the host.
    ///
    /// The API reports exactly one model, so the result always has one entry.
    #[instrument(skip(self), fields(host = %self.config.host))]
    pub async fn list_models(&self) -> Result<Vec<String>, LlamaError> {
        let url = self.config.endpoint(MODEL_PATH)?;
        debug!(target: "llama_api::model", url = %url, "Requesting model list");

        let response = self
            .http_client
            .get(url)
            .headers(self.config.headers.to_header_map()?)
            .send()
            .await?;

        let body = Self::ok_body(response, "llama_api::model").await?;
        let model: ModelResponse = serde_json::from_str(&body).map_err(|source| {
            error!(target: "llama_api::model", error = %source, "Unexpected model response");
            LlamaError::ResponseParsing {
                context: "model response".to_string(),
                source,
            }
        })?;

        debug!(target: "llama_api::model", model = %model.result, "Received model");
        Ok(vec![model.result])
    }

    /// Sends `system_prompt + query` together with the configured sampling
    /// parameters and extracts the generated text.
    #[instrument(skip(self, query), fields(host = %self.config.host, query_len = query.len()))]
    pub async fn generate(&self, query: &str) -> Result<GenerationResult, LlamaError> {
        let url = self.config.endpoint(GENERATE_PATH)?;
        let request = GenerationRequest::new(&self.config.system_prompt, query, &self.config.params);
        debug!(target: "llama_api::generate", url = %url, "Sending generate request");
        trace!(target: "llama_api::generate", ?request, "Generate request body");

        let response = self
            .http_client
            .post(url)
            .headers(self.config.headers.to_header_map()?)
            .json(&request)
            .send()
            .await?;

        let body = Self::ok_body(response, "llama_api::generate").await?;
        let value: serde_json::Value = serde_json::from_str(&body).map_err(|source| {
            error!(target: "llama_api::generate", error = %source, "Generate response is not JSON");
            LlamaError::ResponseParsing {
                context: "generate response".to_string(),
                source,
            }
        })?;
        debug!(target: "llama_api::generate", response = %value, "Received generate response");

        Ok(GenerationResult::from_body(value))
    }

    /// Reads the body of a 200 response; anything else becomes `RemoteService`.
    async fn ok_body(response: Response, target: &'static str) -> Result<String, LlamaError> {
        let status = response.status();
        if status != StatusCode::OK {
            error!(target: "llama_api", endpoint = target, status = status.as_u16(), "Request returned error status");
            return Err(LlamaError::remote_service(status));
        }
        Ok(response.text().await?)
    }
}

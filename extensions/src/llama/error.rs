use reqwest::StatusCode;
use thiserror::Error;

use ullama_core::ExtensionError;

/// Message carried by every [`LlamaError::RemoteService`].
pub const REMOTE_SERVICE_MESSAGE: &str = "Error connecting to llama.";

/// Failures inside the llama extension.
///
/// Converted into the host-facing `ExtensionError` at the `Extension` boundary.
#[derive(Error, Debug)]
pub enum LlamaError {
    /// Malformed header string, missing or mistyped preference, or unusable host URL.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The server answered with anything other than 200 OK.
    #[error("{message} (status={status})")]
    RemoteService {
        status: StatusCode,
        message: String,
    },

    /// Transport failure (DNS, refused connection, reading the body).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 200 response whose body did not have the expected shape.
    #[error("Failed to parse response body ({context}): {source}")]
    ResponseParsing {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LlamaError {
    pub(crate) fn remote_service(status: StatusCode) -> Self {
        LlamaError::RemoteService {
            status,
            message: REMOTE_SERVICE_MESSAGE.to_string(),
        }
    }
}

impl From<LlamaError> for ExtensionError {
    fn from(err: LlamaError) -> Self {
        match err {
            LlamaError::Configuration(msg) => ExtensionError::Configuration(msg),
            LlamaError::RemoteService { status, message } => ExtensionError::RemoteService {
                status: Some(status.as_u16()),
                message,
            },
            LlamaError::Network(source) => ExtensionError::Network(Box::new(source)),
            LlamaError::ResponseParsing { source, .. } => ExtensionError::Parsing(Box::new(source)),
        }
    }
}

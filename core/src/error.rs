use std::error::Error as StdError;
use thiserror::Error;

/// Errors an extension reports back to the host.
///
/// Extensions keep their own internal error types and convert into this one
/// at the [`crate::extension::Extension`] boundary.
#[derive(Error, Debug)]
pub enum ExtensionError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Remote service error: status={status:?}, message={message}")]
    RemoteService { status: Option<u16>, message: String },

    #[error("Network error: {0}")]
    Network(#[source] Box<dyn StdError + Send + Sync>),

    #[error("Response parsing error: {0}")]
    Parsing(#[source] Box<dyn StdError + Send + Sync>),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// Any other failure an extension wants to surface with its own error type.
    #[error("Provider-specific error: {0}")]
    Provider(#[source] Box<dyn StdError + Send + Sync>),
}

//! Host-facing contract for launcher extensions.
//!
//! A host loads one or more [`extension::Extension`]s, turns user input into
//! [`event`]s, and renders or executes the [`action::Action`]s the extensions
//! return. Preferences are owned by the host and handed to extensions read-only.

pub mod action;
pub mod error;
pub mod event;
pub mod extension;
pub mod preferences;

pub use action::{Action, ResultItem};
pub use error::ExtensionError;
pub use event::{ItemEnterEvent, KeywordQueryEvent};
pub use preferences::Preferences;

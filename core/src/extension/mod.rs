mod extension_set;

pub use extension_set::ExtensionSet;

use async_trait::async_trait;

use crate::action::Action;
use crate::error::ExtensionError;
use crate::event::{ItemEnterEvent, KeywordQueryEvent};

/// A launcher extension as seen by the host.
#[async_trait]
pub trait Extension: Send + Sync {
    fn uri(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    /// Word that routes launcher input to this extension.
    fn keyword(&self) -> &str;

    /// Called while the user types a query starting with [`Extension::keyword`].
    async fn on_keyword_query(&self, event: &KeywordQueryEvent) -> Result<Action, ExtensionError>;

    /// Called when the user selects an item carrying an
    /// [`Action::ExtensionCustom`] produced by this extension.
    async fn on_item_enter(&self, _event: &ItemEnterEvent) -> Result<Action, ExtensionError> {
        Ok(Action::DoNothing)
    }
}

use serde::{Deserialize, Serialize};

/// What the host should do in response to an event or a selection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Replace the visible result list.
    RenderResultList { items: Vec<ResultItem> },
    /// Put the text on the system clipboard.
    CopyToClipboard { text: String },
    /// Send `data` back to the extension as an [`crate::ItemEnterEvent`].
    ExtensionCustom {
        data: serde_json::Value,
        keep_app_open: bool,
    },
    DoNothing,
}

impl Action {
    pub fn render(items: Vec<ResultItem>) -> Self {
        Action::RenderResultList { items }
    }

    pub fn copy_to_clipboard(text: impl Into<String>) -> Self {
        Action::CopyToClipboard { text: text.into() }
    }

    pub fn custom(data: serde_json::Value, keep_app_open: bool) -> Self {
        Action::ExtensionCustom { data, keep_app_open }
    }

    /// Items to display, if this action renders a list.
    pub fn items(&self) -> Option<&[ResultItem]> {
        match self {
            Action::RenderResultList { items } => Some(items),
            _ => None,
        }
    }
}

/// A single selectable entry in a rendered result list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResultItem {
    /// Icon path relative to the extension's root.
    pub icon: String,
    pub name: String,
    pub description: String,
    pub on_enter: Action,
}

impl ResultItem {
    pub fn new(
        icon: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        on_enter: Action,
    ) -> Self {
        Self {
            icon: icon.into(),
            name: name.into(),
            description: description.into(),
            on_enter,
        }
    }
}

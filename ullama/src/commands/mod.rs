use std::sync::Arc;

use anyhow::{Context, Result};
use dialoguer::{Select, theme::ColorfulTheme};
use serde_json::json;
use tracing::{debug, info, warn};
use ullama_core::extension::Extension;
use ullama_core::{Action, ItemEnterEvent, KeywordQueryEvent, ResultItem};

use crate::AppContext;
use crate::cli::{AskArgs, QueryArgs};
use crate::render::{item_labels, render_items};

/// How the host resolves selections and clipboard actions.
#[derive(Debug, Clone, Copy)]
pub struct HostOptions {
    /// Take the first item of every list instead of prompting.
    pub pick_first: bool,
    /// Put `CopyToClipboard` text on the clipboard; otherwise only print it.
    pub copy: bool,
}

// --- Handler Functions ---

pub async fn handle_query(args: QueryArgs, cx: &AppContext) -> Result<()> {
    let query = query_text(&args.words, cx.llama.keyword(), |kw| cx.extensions.for_query(kw).is_some());
    let extension = cx
        .extensions
        .for_query(&query)
        .with_context(|| format!("No extension handles '{}'", query))?
        .clone();

    let action = extension.on_keyword_query(&KeywordQueryEvent::new(query)).await?;
    let options = HostOptions { pick_first: args.first, copy: !args.no_copy };
    run_action(extension, action, options).await
}

pub async fn handle_ask(args: AskArgs, cx: &AppContext) -> Result<()> {
    let query = args.words.join(" ");
    let event = ItemEnterEvent::new(json!({ "query": query }));
    let extension: Arc<dyn Extension> = cx.llama.clone();

    let action = extension.on_item_enter(&event).await?;
    let options = HostOptions { pick_first: true, copy: args.copy };
    run_action(extension, action, options).await
}

pub async fn handle_models(cx: &AppContext) -> Result<()> {
    let models = cx.llama.client().list_models().await?;
    for model in models {
        println!("{}", model);
    }
    Ok(())
}

/// Launcher input for `words`: the extension keyword is prepended unless the
/// first word already routes to an extension.
pub fn query_text(words: &[String], keyword: &str, is_routed: impl Fn(&str) -> bool) -> String {
    let joined = words.join(" ");
    match words.first() {
        Some(first) if is_routed(first) => joined,
        _ => format!("{} {}", keyword, joined),
    }
}

/// Executes actions until one ends the interaction.
pub async fn run_action(extension: Arc<dyn Extension>, mut action: Action, options: HostOptions) -> Result<()> {
    loop {
        action = match action {
            Action::RenderResultList { items } => {
                if items.is_empty() {
                    println!("No results.");
                    return Ok(());
                }
                let Some(index) = select_item(&items, options.pick_first).await? else {
                    debug!("Selection cancelled");
                    return Ok(());
                };
                items[index].on_enter.clone()
            }
            Action::ExtensionCustom { data, keep_app_open } => {
                debug!(%data, keep_app_open, "Dispatching item enter");
                extension.on_item_enter(&ItemEnterEvent::new(data)).await?
            }
            Action::CopyToClipboard { text } => {
                println!("{}", text);
                if options.copy {
                    copy_to_clipboard(&text)?;
                    info!(chars = text.chars().count(), "Copied to clipboard");
                }
                return Ok(());
            }
            Action::DoNothing => return Ok(()),
        };
    }
}

async fn select_item(items: &[ResultItem], pick_first: bool) -> Result<Option<usize>> {
    print!("{}", render_items(items));
    if pick_first || !console::user_attended() {
        return Ok(Some(0));
    }

    let labels = item_labels(items);
    // dialoguer blocks, keep it off the runtime threads
    let selection = tokio::task::spawn_blocking(move || {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select an item (Esc to cancel)")
            .items(&labels)
            .default(0)
            .interact_opt()
            .context("Failed to read selection")
    })
    .await
    .context("Blocking task failed (panic)")??;

    Ok(selection)
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => clipboard
            .set_text(text.to_string())
            .context("Failed to write to clipboard"),
        Err(e) => {
            warn!(error = %e, "Clipboard unavailable");
            Err(anyhow::anyhow!("Clipboard unavailable: {}", e))
        }
    }
}

use std::sync::Arc;

use ullama_core::extension::{Extension, ExtensionSet};
use ullama_extensions::llama::LlamaExtension;

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;

pub struct AppContext {
    pub extensions: ExtensionSet,
    pub llama: Arc<LlamaExtension>,
}

impl AppContext {
    pub fn new(llama: Arc<LlamaExtension>) -> Self {
        let extensions = ExtensionSet::new(vec![llama.clone() as Arc<dyn Extension>]);
        Self { extensions, llama }
    }
}

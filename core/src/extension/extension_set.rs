use std::sync::Arc;

use tracing::{debug, trace};

use super::Extension;


pub struct ExtensionSet {
    extensions: Vec<Arc<dyn Extension>>,
}

impl ExtensionSet {
    pub fn new(extensions: Vec<Arc<dyn Extension>>) -> Self {
        Self { extensions }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Extension>> {
        self.extensions.iter()
    }

    pub fn by_uri(&self, uri: &str) -> Option<&Arc<dyn Extension>> {
        self.extensions.iter().find(|ext| ext.uri() == uri)
    }

    /// Extension whose keyword is the first word of `query`.
    pub fn for_query(&self, query: &str) -> Option<&Arc<dyn Extension>> {
        let keyword = query.split_whitespace().next()?;
        let found = self.extensions.iter().find(|ext| ext.keyword() == keyword);
        match found {
            Some(ext) => debug!(keyword, extension = ext.uri(), "Routed query"),
            None => trace!(keyword, "No extension registered for keyword"),
        }
        found
    }
}

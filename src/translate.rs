//! Translator capability for link labels.

use crate::error::Result;
use std::collections::HashMap;

/// Strategy for translating labels before they are escaped and rendered.
///
/// `text_domain` scopes the lookup; the renderer passes its current domain
/// on every call.
pub trait Translate: Send + Sync {
    fn translate(&self, message: &str, text_domain: &str) -> Result<String>;
}

/// In-memory catalog translator. Messages without an entry in the requested
/// text domain pass through unchanged.
#[derive(Debug, Default)]
pub struct CatalogTranslator {
    catalog: HashMap<(String, String), String>,
}

impl CatalogTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a translation for `message` within `text_domain`.
    pub fn insert(
        &mut self,
        text_domain: impl Into<String>,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) -> &mut Self {
        self.catalog
            .insert((text_domain.into(), message.into()), translation.into());
        self
    }
}

impl Translate for CatalogTranslator {
    fn translate(&self, message: &str, text_domain: &str) -> Result<String> {
        let key = (text_domain.to_owned(), message.to_owned());

        Ok(self
            .catalog
            .get(&key)
            .cloned()
            .unwrap_or_else(|| message.to_owned()))
    }
}

//! Link data model - normalizes heterogeneous link inputs into one record shape.

use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Attribute names mapped to string-or-null values, in insertion order.
pub type AttributeMap = IndexMap<String, Option<String>>;

/// One normalized anchor: its `href` plus optional metadata.
///
/// Every `Link` carries an `href` key. Attribute keys the renderer does not
/// know about (e.g. `aria-label`) are kept verbatim and end up on the
/// rendered tag unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    attributes: AttributeMap,
}

impl Link {
    /// Creates a link that carries nothing but its target.
    pub fn from_href(href: impl Into<String>) -> Self {
        let mut attributes = AttributeMap::new();
        attributes.insert("href".to_owned(), Some(href.into()));

        Self { attributes }
    }

    /// Creates a link from an attribute map, keys copied verbatim.
    ///
    /// Fails with [`Error::MissingHref`] when the map has no `href` key.
    pub fn from_map(map: AttributeMap) -> Result<Self> {
        if !map.contains_key("href") {
            return Err(Error::MissingHref);
        }

        Ok(Self { attributes: map })
    }

    /// Projects a page-like object into a link by reading all six page
    /// accessors, null values included.
    pub fn from_page(page: &dyn Page) -> Self {
        let id = page.id();
        let title = page.title();
        let class = page.class();
        let href = page.href();
        let target = page.target();
        let label = page.label();

        let mut attributes = AttributeMap::new();
        attributes.insert("id".to_owned(), id);
        attributes.insert("title".to_owned(), title);
        attributes.insert("class".to_owned(), class);
        attributes.insert("href".to_owned(), Some(href));
        attributes.insert("target".to_owned(), target);
        attributes.insert("label".to_owned(), label);

        Self { attributes }
    }

    /// The full attribute set, `href` included.
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Looks up one attribute; `None` when the key is absent or null.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)?.as_deref()
    }

    /// The link target. Null only when a map or page supplied a null `href`.
    pub fn href(&self) -> Option<&str> {
        self.get("href")
    }

    /// The text rendered between the anchor tags, if any.
    pub fn label(&self) -> Option<&str> {
        self.get("label")
    }
}

/// A page-like object: anything that can describe itself as a link through
/// these six accessors.
pub trait Page {
    fn id(&self) -> Option<String>;
    fn title(&self) -> Option<String>;
    fn class(&self) -> Option<String>;
    fn href(&self) -> String;
    fn target(&self) -> Option<String>;
    fn label(&self) -> Option<String>;
}

/// The accepted link input shapes: a bare target, an attribute map, or a
/// page-like object.
pub enum LinkInput {
    Href(String),
    Map(AttributeMap),
    Page(Box<dyn Page>),
}

impl From<&str> for LinkInput {
    fn from(href: &str) -> Self {
        LinkInput::Href(href.to_owned())
    }
}

impl From<String> for LinkInput {
    fn from(href: String) -> Self {
        LinkInput::Href(href)
    }
}

impl From<AttributeMap> for LinkInput {
    fn from(map: AttributeMap) -> Self {
        LinkInput::Map(map)
    }
}

impl From<Box<dyn Page>> for LinkInput {
    fn from(page: Box<dyn Page>) -> Self {
        LinkInput::Page(page)
    }
}

impl TryFrom<LinkInput> for Link {
    type Error = Error;

    fn try_from(input: LinkInput) -> Result<Self> {
        match input {
            LinkInput::Href(href) => Ok(Link::from_href(href)),
            LinkInput::Map(map) => Link::from_map(map),
            LinkInput::Page(page) => Ok(Link::from_page(page.as_ref())),
        }
    }
}

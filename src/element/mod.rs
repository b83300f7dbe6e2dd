//! Form element holding an ordered list of links plus a separator.

mod link;

use crate::error::Result;

pub use self::link::{AttributeMap, Link, LinkInput, Page};

/// The slice of a form element the renderer consumes: its links, the
/// separator between them and the element-level tag attributes.
pub trait LinksElement {
    fn links(&self) -> &[Link];
    fn separator(&self) -> &str;
    fn attributes(&self) -> &AttributeMap;
}

/// Configuration accepted by [`Links::set_options`].
#[derive(Default)]
pub struct LinksOptions {
    /// Replaces the whole link sequence when present.
    pub links: Option<Vec<LinkInput>>,
    /// Separator string rendered between two links.
    pub separator: Option<String>,
    /// Element-level label, kept for the host form.
    pub label: Option<String>,
}

/// Input specification reported to the host form's input filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub name: String,
    pub required: bool,
}

/// A form element that renders as a list of anchors.
///
/// The element carries no submitted value; it participates in form
/// validation as a no-op and exists purely to be rendered.
pub struct Links {
    name: Option<String>,
    attributes: AttributeMap,
    label: Option<String>,
    links: Vec<Link>,
    separator: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            name: None,
            attributes: AttributeMap::new(),
            label: None,
            links: Vec::new(),
            separator: " | ".to_owned(),
        }
    }
}

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a set of options. A `links` entry replaces the whole link
    /// sequence; `separator` and `label` are plain assignments.
    pub fn set_options(&mut self, options: LinksOptions) -> Result<&mut Self> {
        if let Some(label) = options.label {
            self.label = Some(label);
        }

        if let Some(links) = options.links {
            self.set_links(links)?;
        }

        if let Some(separator) = options.separator {
            self.set_separator(separator);
        }

        Ok(self)
    }

    /// Replaces the link sequence with the normalized form of `links`.
    ///
    /// Inputs are normalized in order; on failure the element may hold a
    /// prefix of the new sequence.
    pub fn set_links<I>(&mut self, links: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<LinkInput>,
    {
        self.links.clear();

        for input in links {
            self.links.push(Link::try_from(input.into())?);
        }

        Ok(self)
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.separator = separator.into();
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: Option<String>) -> &mut Self {
        self.attributes.insert(name.into(), value);
        self
    }

    pub fn set_attributes(&mut self, attributes: AttributeMap) -> &mut Self {
        self.attributes = attributes;
        self
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// The element never requires a submitted value.
    pub fn input_specification(&self) -> InputSpec {
        InputSpec {
            name: self.name.clone().unwrap_or_default(),
            required: false,
        }
    }

    /// As this element has no value to send with the form, the assignment is
    /// discarded.
    pub fn set_value(&mut self, _value: String) -> &mut Self {
        self
    }

    pub fn value(&self) -> Option<&str> {
        None
    }
}

impl LinksElement for Links {
    fn links(&self) -> &[Link] {
        &self.links
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }
}

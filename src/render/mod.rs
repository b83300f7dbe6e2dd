//! Renderer turning a links element into an HTML fragment.

mod attribute;
mod escape;

use crate::element::LinksElement;
use crate::error::Result;
use crate::translate::Translate;

pub use self::attribute::create_attributes_string;
pub use self::escape::{EscapeHtml, HtmlEscaper};

/// Indentation accepted by [`FormLinks::set_indent`]: a number of spaces or
/// a literal string.
pub enum Indent {
    Spaces(usize),
    Literal(String),
}

impl Indent {
    fn into_whitespace(self) -> String {
        match self {
            Indent::Spaces(count) => " ".repeat(count),
            Indent::Literal(literal) => literal,
        }
    }
}

impl From<usize> for Indent {
    fn from(count: usize) -> Self {
        Indent::Spaces(count)
    }
}

impl From<&str> for Indent {
    fn from(literal: &str) -> Self {
        Indent::Literal(literal.to_owned())
    }
}

impl From<String> for Indent {
    fn from(literal: String) -> Self {
        Indent::Literal(literal)
    }
}

/// Renders a links element as a list of `<a>` tags joined by the element's
/// separator.
///
/// Escaping and translation are delegated to the injected collaborators; the
/// renderer itself only merges attributes and formats strings. It never
/// mutates the element it renders.
pub struct FormLinks {
    escape_html: Box<dyn EscapeHtml>,
    translate: Option<Box<dyn Translate>>,
    translator_text_domain: String,
    indent: String,
}

impl FormLinks {
    pub fn new(escape_html: Box<dyn EscapeHtml>, translate: Option<Box<dyn Translate>>) -> Self {
        Self {
            escape_html,
            translate,
            translator_text_domain: "default".to_owned(),
            indent: String::new(),
        }
    }

    /// Creates a renderer with the built-in escaper and no translator.
    pub fn with_defaults() -> Self {
        Self::new(Box::new(HtmlEscaper), None)
    }

    /// Sets the indentation used in [`render`](Self::render), optionally a
    /// number of spaces to indent with.
    pub fn set_indent(&mut self, indent: impl Into<Indent>) -> &mut Self {
        self.indent = indent.into().into_whitespace();
        self
    }

    pub fn indent(&self) -> &str {
        &self.indent
    }

    pub fn set_translator_text_domain(&mut self, text_domain: impl Into<String>) -> &mut Self {
        self.translator_text_domain = text_domain.into();
        self
    }

    pub fn translator_text_domain(&self) -> &str {
        &self.translator_text_domain
    }

    /// Renders the element's links as one HTML fragment.
    ///
    /// Per link, the element-level attributes are merged with the link's own
    /// attributes (the link wins on conflicts), class tokens from both sides
    /// are deduplicated into a single `class` attribute, and the label is
    /// translated and escaped. Tags are joined by the element's separator on
    /// its own indented line.
    pub fn render(&self, element: &dyn LinksElement) -> Result<String> {
        let mut rendered_links = Vec::new();

        for link in element.links() {
            let mut classes: Vec<String> = Vec::new();

            let mut link_attributes = link.attributes().clone();
            let label = link_attributes
                .shift_remove("label")
                .flatten()
                .unwrap_or_default();

            let mut attributes = element.attributes().clone();

            if let Some(class) = attributes.shift_remove("class") {
                classes.extend(class_tokens(class));
            }

            if let Some(class) = link_attributes.shift_remove("class") {
                classes.extend(class_tokens(class));
            }

            for (name, value) in link_attributes {
                attributes.insert(name, value);
            }

            // The merged class list always ends up last, even when empty.
            attributes.insert("class".to_owned(), Some(merge_class_tokens(classes)));

            let label = if label.is_empty() {
                label
            } else {
                let label = match &self.translate {
                    Some(translate) => {
                        translate.translate(&label, &self.translator_text_domain)?
                    }
                    None => label,
                };

                self.escape_html.escape_html(&label)?
            };

            rendered_links.push(format!(
                "<a {}>{}</a>",
                create_attributes_string(&attributes),
                label,
            ));
        }

        let indent = &self.indent;
        let glue = format!("\n{indent}{}\n{indent}", element.separator());

        Ok(format!("{indent}{}", rendered_links.join(glue.as_str())))
    }
}

/// Splits a class attribute value on single spaces. A null value splits like
/// the empty string.
fn class_tokens(value: Option<String>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(' ')
        .map(str::to_owned)
        .collect()
}

/// Deduplicates raw tokens (first occurrence wins), then trims and drops the
/// empty ones.
fn merge_class_tokens(tokens: Vec<String>) -> String {
    let mut unique: Vec<String> = Vec::new();

    for token in tokens {
        if !unique.contains(&token) {
            unique.push(token);
        }
    }

    unique
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

//! # formlinks
//!
//! A link-list form element and the renderer that turns it into an HTML
//! fragment.
//!
//! ## Example
//!
//! ```
//! use formlinks::{FormLinks, Links, LinksOptions};
//!
//! let mut element = Links::new();
//! element
//!     .set_options(LinksOptions {
//!         links: Some(vec!["https://example.org".into()]),
//!         separator: Some("||".into()),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! let helper = FormLinks::with_defaults();
//! let html = helper.render(&element).unwrap();
//! assert_eq!(html, r#"<a href="https://example.org" class=""></a>"#);
//! ```

pub mod element;
pub mod error;
pub mod render;
pub mod translate;

pub use element::{AttributeMap, InputSpec, Link, LinkInput, Links, LinksElement, LinksOptions, Page};
pub use error::{Error, Result};
pub use render::{EscapeHtml, FormLinks, HtmlEscaper, Indent};
pub use translate::{CatalogTranslator, Translate};

//! Error types for formlinks.

use thiserror::Error;

/// Result type for formlinks operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while normalizing or rendering link lists.
#[derive(Error, Debug)]
pub enum Error {
    /// A map-shaped link input was missing its `href` key.
    #[error("href property is required when using a map for links")]
    MissingHref,

    /// An injected collaborator (escaper or translator) failed. The cause is
    /// passed through unchanged.
    #[error(transparent)]
    Capability(#[from] Box<dyn std::error::Error + Send + Sync>),
}

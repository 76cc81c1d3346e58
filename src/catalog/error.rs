use thiserror::Error;

/// Failures visible to callers of a [`Catalog`](super::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON or does not have the
    /// expected shape.
    #[error("invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),

    /// The name pattern of a regular-expression search does not compile.
    #[error("invalid name pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

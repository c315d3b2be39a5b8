//! Visualization Gallery
//!
//! Browses directories of self-contained HTML documents produced offline
//! (heat-maps, clusters, Voronoi zonations) and serves them verbatim.

mod collection;

pub use collection::{Collection, Gallery};

use thiserror::Error;

/// Errors while browsing a gallery
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid document name: {0:?}")]
    InvalidName(String),
    #[error("Document not found: {0}")]
    NotFound(String),
}

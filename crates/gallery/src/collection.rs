//! Gallery Collections

use crate::GalleryError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const EXTENSION: &str = "html";

/// Which set of documents a gallery holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Land value heat-maps and clusters
    HeatMaps,
    /// Per-department Voronoi price zonations
    Interpolations,
}

impl Collection {
    /// Heading shown above the selector
    pub fn title(&self) -> &'static str {
        match self {
            Collection::HeatMaps => "Mapas de valores del suelo",
            Collection::Interpolations => {
                "Interpolación y zonificación de precios por Departamentos"
            }
        }
    }

    /// Selector prompt
    pub fn prompt(&self) -> &'static str {
        match self {
            Collection::HeatMaps => "Selecciona un mapa para visualizar:",
            Collection::Interpolations => "Selecciona un departamento para visualizar:",
        }
    }
}

/// A directory of HTML documents
#[derive(Debug, Clone)]
pub struct Gallery {
    collection: Collection,
    root: PathBuf,
}

impl Gallery {
    pub fn new(collection: Collection, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        info!("Gallery {:?} at {}", collection, root.display());
        Self { collection, root }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Document names (file stem of each `.html` file), sorted
    pub fn list(&self) -> Result<Vec<String>, GalleryError> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| self.io_error(&self.root, source))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|source| self.io_error(&self.root, source))?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();

        debug!("{:?}: {} documents", self.collection, names.len());
        Ok(names)
    }

    /// Content of the named document, verbatim
    pub fn read(&self, name: &str) -> Result<String, GalleryError> {
        validate_name(name)?;

        let path = self.root.join(format!("{}.{}", name, EXTENSION));
        if !path.is_file() {
            return Err(GalleryError::NotFound(name.to_string()));
        }

        std::fs::read_to_string(&path).map_err(|source| self.io_error(&path, source))
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> GalleryError {
        GalleryError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// A name must be a bare file stem
fn validate_name(name: &str) -> Result<(), GalleryError> {
    let bad = name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']);

    if bad {
        Err(GalleryError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}

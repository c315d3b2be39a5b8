//! Inference Engine Implementation

use crate::xgboost::Booster;
use crate::{InferenceError, RegressionModel};
use feature_engine::{FEATURE_DIMENSION, FEATURE_NAMES};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Price model loaded once at startup and shared read-only afterwards
#[derive(Debug)]
pub struct InferenceEngine {
    /// Model path
    model_path: PathBuf,
    booster: Booster,
}

impl InferenceEngine {
    /// Load and validate the model artifact at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let path = path.as_ref();
        info!("Loading price model from {}", path.display());

        let json = std::fs::read_to_string(path).map_err(|e| {
            InferenceError::ModelLoadError(format!("cannot read {}: {}", path.display(), e))
        })?;

        let engine = Self::from_booster(path, Booster::from_json_str(&json)?)?;

        info!(
            "Model loaded successfully: objective={}, trees={}",
            engine.booster.objective(),
            engine.booster.num_trees()
        );
        Ok(engine)
    }

    /// Build an engine from an in-memory document
    pub fn from_json_str(json: &str) -> Result<Self, InferenceError> {
        Self::from_booster(Path::new("<memory>"), Booster::from_json_str(json)?)
    }

    /// Check that the booster was trained on the property feature schema
    fn from_booster(path: &Path, booster: Booster) -> Result<Self, InferenceError> {
        if booster.num_features() != FEATURE_DIMENSION {
            return Err(InferenceError::ModelLoadError(format!(
                "model expects {} features, property records have {}",
                booster.num_features(),
                FEATURE_DIMENSION
            )));
        }

        if booster.feature_names().is_empty() {
            warn!("Model has no feature names; assuming schema order");
        } else if booster.feature_names().iter().map(String::as_str).ne(FEATURE_NAMES) {
            return Err(InferenceError::ModelLoadError(format!(
                "feature names {:?} do not match {:?}",
                booster.feature_names(),
                FEATURE_NAMES
            )));
        }

        Ok(Self {
            model_path: path.to_path_buf(),
            booster,
        })
    }

    /// Get model path
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn booster(&self) -> &Booster {
        &self.booster
    }
}

impl RegressionModel for InferenceEngine {
    fn num_features(&self) -> usize {
        self.booster.num_features()
    }

    fn predict_row(&self, row: &[f64]) -> Result<f64, InferenceError> {
        let start = Instant::now();
        let output = self.booster.predict_row(row)?;
        debug!("Inference completed in {}µs", start.elapsed().as_micros());
        Ok(output)
    }
}

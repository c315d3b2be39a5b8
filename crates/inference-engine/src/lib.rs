//! Price Model Inference
//!
//! Loads a pre-trained gradient-boosted regression model (XGBoost JSON
//! format) once and evaluates it on single feature records.

mod engine;
mod tree;
mod xgboost;

pub use engine::InferenceEngine;
pub use xgboost::{Booster, Link};

use feature_engine::PropertyFeatures;
use thiserror::Error;

/// Errors during model loading and inference
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Prediction failed: {0}")]
    PredictionError(#[from] PredictionFailure),
}

/// Cause of a failed prediction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionFailure {
    #[error("invalid input shape: expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("model produced a non-finite output ({0})")]
    NonFiniteOutput(f64),
}

/// A loaded regression model, shared read-only across requests
pub trait RegressionModel: Send + Sync {
    /// Number of input features
    fn num_features(&self) -> usize;

    /// Raw model output for one numeric row
    fn predict_row(&self, row: &[f64]) -> Result<f64, InferenceError>;

    /// Raw model output for one feature record
    fn predict(&self, features: &PropertyFeatures) -> Result<f64, InferenceError> {
        self.predict_row(&features.to_row())
    }
}

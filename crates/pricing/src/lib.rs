//! Price Prediction Pipeline
//!
//! Sequences category encoding, feature assembly, model inference and the
//! log-price transform for one form submission.

mod predictor;
mod price;

pub use predictor::{predict_price, PredictionRequest, PredictionResult, PricePrediction};
pub use price::{to_price, Price};

use category_encoder::EncodeError;
use feature_engine::FeatureError;
use inference_engine::InferenceError;
use serde::Serialize;
use thiserror::Error;

/// Failure kinds a caller can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MissingCoordinate,
    UnknownCategory,
    PredictionFailed,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::MissingCoordinate => "missing_coordinate",
            FailureKind::UnknownCategory => "unknown_category",
            FailureKind::PredictionFailed => "prediction_failed",
        }
    }
}

/// Errors returned for a single prediction request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("No location selected: pick a point on the map")]
    MissingCoordinate,
    #[error(transparent)]
    UnknownCategory(#[from] EncodeError),
    #[error(transparent)]
    Prediction(#[from] InferenceError),
    #[error("Prediction failed: price out of range for log-price {0}")]
    PriceOutOfRange(f64),
}

impl PricingError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PricingError::MissingCoordinate => FailureKind::MissingCoordinate,
            PricingError::UnknownCategory(_) => FailureKind::UnknownCategory,
            PricingError::Prediction(_) | PricingError::PriceOutOfRange(_) => {
                FailureKind::PredictionFailed
            }
        }
    }
}

impl From<FeatureError> for PricingError {
    fn from(err: FeatureError) -> Self {
        match err {
            FeatureError::MissingCoordinate => PricingError::MissingCoordinate,
        }
    }
}

//! Feature Assembly
//!
//! Turns the dashboard form and the map selection into the single feature
//! record the price model consumes.

mod features;

pub use features::{
    assemble, Coordinate, FormInputs, PropertyFeatures, FEATURE_DIMENSION, FEATURE_NAMES,
};

use thiserror::Error;

/// Errors during feature assembly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("No location selected: pick a point on the map")]
    MissingCoordinate,
}

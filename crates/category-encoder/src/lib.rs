//! Category Encoders
//!
//! Maps the labels offered by the dashboard form to the integer codes the
//! price model was trained on. The codes are label frequencies from the
//! training set and must match the artifact exactly.

mod condition;
mod property_type;

pub use condition::PropertyCondition;
pub use property_type::PropertyType;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Categorical dimension understood by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryDimension {
    /// Kind of property ("apartamento", "casa", ...)
    PropertyType,
    /// State of the property ("Usado", "Nuevo", ...)
    Condition,
}

impl CategoryDimension {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryDimension::PropertyType => "property_type",
            CategoryDimension::Condition => "condition",
        }
    }

    /// Labels of this dimension in table order (most frequent first)
    pub fn labels(&self) -> Vec<&'static str> {
        match self {
            CategoryDimension::PropertyType => {
                PropertyType::ALL.iter().map(|t| t.label()).collect()
            }
            CategoryDimension::Condition => {
                PropertyCondition::ALL.iter().map(|c| c.label()).collect()
            }
        }
    }
}

impl fmt::Display for CategoryDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors during category encoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("Unknown {dimension} label: {label:?}")]
    UnknownCategory {
        dimension: CategoryDimension,
        label: String,
    },
}

/// Encode a label of the given dimension into its training code
pub fn encode(dimension: CategoryDimension, label: &str) -> Result<u32, EncodeError> {
    let code = match dimension {
        CategoryDimension::PropertyType => PropertyType::from_label(label).map(|t| t.code()),
        CategoryDimension::Condition => PropertyCondition::from_label(label).map(|c| c.code()),
    };

    code.ok_or_else(|| EncodeError::UnknownCategory {
        dimension,
        label: label.to_string(),
    })
}

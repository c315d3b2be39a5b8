//! Property condition table

use crate::{CategoryDimension, EncodeError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Condition of the property as listed in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyCondition {
    #[serde(rename = "Usado")]
    Used,
    #[serde(rename = "Sin especificar")]
    Unspecified,
    #[serde(rename = "Bueno")]
    Good,
    #[serde(rename = "Excelente")]
    Excellent,
    #[serde(rename = "Remodelado")]
    Remodeled,
    #[serde(rename = "Nuevo")]
    New,
    #[serde(rename = "Obra gris")]
    Unfinished,
}

impl PropertyCondition {
    /// Every condition, most frequent first
    pub const ALL: [PropertyCondition; 7] = [
        PropertyCondition::Used,
        PropertyCondition::Unspecified,
        PropertyCondition::Good,
        PropertyCondition::Excellent,
        PropertyCondition::Remodeled,
        PropertyCondition::New,
        PropertyCondition::Unfinished,
    ];

    /// Label shown in the form
    pub fn label(&self) -> &'static str {
        match self {
            PropertyCondition::Used => "Usado",
            PropertyCondition::Unspecified => "Sin especificar",
            PropertyCondition::Good => "Bueno",
            PropertyCondition::Excellent => "Excelente",
            PropertyCondition::Remodeled => "Remodelado",
            PropertyCondition::New => "Nuevo",
            PropertyCondition::Unfinished => "Obra gris",
        }
    }

    /// Code the model was trained with
    pub fn code(&self) -> u32 {
        match self {
            PropertyCondition::Used => 116_008,
            PropertyCondition::Unspecified => 78_188,
            PropertyCondition::Good => 20_246,
            PropertyCondition::Excellent => 18_623,
            PropertyCondition::Remodeled => 843,
            PropertyCondition::New => 335,
            PropertyCondition::Unfinished => 1,
        }
    }

    /// Look up a condition by its exact label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl FromStr for PropertyCondition {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| EncodeError::UnknownCategory {
            dimension: CategoryDimension::Condition,
            label: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_codes() {
        let expected = [
            ("Usado", 116_008),
            ("Sin especificar", 78_188),
            ("Bueno", 20_246),
            ("Excelente", 18_623),
            ("Remodelado", 843),
            ("Nuevo", 335),
            ("Obra gris", 1),
        ];

        assert_eq!(expected.len(), PropertyCondition::ALL.len());
        for (label, code) in expected {
            let condition: PropertyCondition = label.parse().unwrap();
            assert_eq!(condition.code(), code, "code for {label}");
            assert_eq!(condition.label(), label);
        }
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert!(PropertyCondition::from_label("usado").is_none());
        assert!("NUEVO".parse::<PropertyCondition>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&PropertyCondition::Unfinished).unwrap();
        assert_eq!(json, "\"Obra gris\"");
        let parsed: PropertyCondition = serde_json::from_str("\"Remodelado\"").unwrap();
        assert_eq!(parsed, PropertyCondition::Remodeled);
    }
}

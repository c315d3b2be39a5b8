//! Feature Record Assembly

use crate::FeatureError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of features the model expects
pub const FEATURE_DIMENSION: usize = 10;

/// Column names of the trained model, in schema order
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "estrato",
    "habitaciones",
    "baños",
    "area_construida",
    "latitud",
    "longitud",
    "antigüedad",
    "area_total",
    "tipo_inmueble_encoded",
    "estado_inmueble_encoded",
];

/// Point selected on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Numeric fields of the prediction form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInputs {
    /// Socioeconomic stratum (1-6)
    pub stratum: u8,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Built area (m²)
    pub built_area: f64,
    /// Age of the property (years)
    pub age: u32,
    /// Total area (m²)
    pub total_area: f64,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            stratum: 1,
            bedrooms: 3,
            bathrooms: 2,
            built_area: 100.0,
            age: 10,
            total_area: 120.0,
        }
    }
}

/// Feature record for one property, in model schema order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyFeatures {
    pub stratum: u8,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub built_area: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub age: u32,
    pub total_area: f64,
    pub property_type_code: u32,
    pub condition_code: u32,
}

impl PropertyFeatures {
    /// Numeric row handed to the model, ordered as [`FEATURE_NAMES`]
    pub fn to_row(&self) -> [f64; FEATURE_DIMENSION] {
        [
            f64::from(self.stratum),
            f64::from(self.bedrooms),
            f64::from(self.bathrooms),
            self.built_area,
            self.latitude,
            self.longitude,
            f64::from(self.age),
            self.total_area,
            f64::from(self.property_type_code),
            f64::from(self.condition_code),
        ]
    }

    /// Pairs of column name and value
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.to_row())
    }
}

/// Map form fields, the selected coordinate and the encoded categories into
/// a feature record.
///
/// Numeric bounds are the form's responsibility; this is a direct mapping.
pub fn assemble(
    inputs: &FormInputs,
    coordinate: Option<Coordinate>,
    property_type_code: u32,
    condition_code: u32,
) -> Result<PropertyFeatures, FeatureError> {
    let coordinate = coordinate.ok_or(FeatureError::MissingCoordinate)?;

    let features = PropertyFeatures {
        stratum: inputs.stratum,
        bedrooms: inputs.bedrooms,
        bathrooms: inputs.bathrooms,
        built_area: inputs.built_area,
        latitude: coordinate.latitude,
        longitude: coordinate.longitude,
        age: inputs.age,
        total_area: inputs.total_area,
        property_type_code,
        condition_code,
    };

    debug!(
        "Assembled features at ({:.6}, {:.6}): type={}, condition={}",
        features.latitude, features.longitude, property_type_code, condition_code
    );

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bogota() -> Coordinate {
        Coordinate::new(4.6097, -74.0817)
    }

    #[test]
    fn test_assemble_maps_every_field() {
        let inputs = FormInputs {
            stratum: 3,
            ..Default::default()
        };

        let features = assemble(&inputs, Some(bogota()), 219_524, 116_008).unwrap();

        assert_eq!(
            features.to_row(),
            [3.0, 3.0, 2.0, 100.0, 4.6097, -74.0817, 10.0, 120.0, 219_524.0, 116_008.0]
        );
    }

    #[test]
    fn test_named_follows_schema_order() {
        let features = assemble(&FormInputs::default(), Some(bogota()), 11, 1).unwrap();
        let names: Vec<&str> = features.named().map(|(name, _)| name).collect();

        assert_eq!(names, FEATURE_NAMES);
        assert_eq!(features.named().nth(4), Some(("latitud", 4.6097)));
        assert_eq!(features.named().last(), Some(("estado_inmueble_encoded", 1.0)));
    }

    #[test]
    fn test_missing_coordinate() {
        let result = assemble(&FormInputs::default(), None, 219_524, 116_008);
        assert_eq!(result, Err(FeatureError::MissingCoordinate));
    }

    #[test]
    fn test_form_inputs_from_json() {
        let json = r#"{"stratum":4,"bedrooms":2,"bathrooms":1,"built_area":55.5,"age":0,"total_area":60}"#;
        let inputs: FormInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.stratum, 4);
        assert_eq!(inputs.total_area, 60.0);
    }

    proptest! {
        #[test]
        fn prop_missing_coordinate_regardless_of_inputs(
            stratum in 1u8..=6,
            bedrooms in 0u32..50,
            bathrooms in 0u32..50,
            built_area in 1.0f64..10_000.0,
            age in 0u32..200,
            total_area in 1.0f64..100_000.0,
            type_code in 0u32..300_000,
            condition_code in 0u32..200_000,
        ) {
            let inputs = FormInputs { stratum, bedrooms, bathrooms, built_area, age, total_area };
            prop_assert_eq!(
                assemble(&inputs, None, type_code, condition_code),
                Err(FeatureError::MissingCoordinate)
            );
        }
    }
}

//! Prediction Orchestrator

use crate::price::{to_price, Price};
use crate::PricingError;
use category_encoder::{encode, CategoryDimension};
use feature_engine::{assemble, Coordinate, FormInputs};
use inference_engine::RegressionModel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One submission of the prediction form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(flatten)]
    pub inputs: FormInputs,
    /// Property type label, e.g. "apartamento"
    pub property_type: String,
    /// Condition label, e.g. "Usado"
    pub condition: String,
}

/// Successful prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePrediction {
    pub price: Price,
    /// Raw model output
    pub log_price: f64,
}

pub type PredictionResult = Result<PricePrediction, PricingError>;

/// Run the pipeline for one request against an already loaded model.
///
/// A location is checked first: without it nothing else matters to the user.
pub fn predict_price<M>(
    model: &M,
    request: &PredictionRequest,
    coordinate: Option<Coordinate>,
) -> PredictionResult
where
    M: RegressionModel + ?Sized,
{
    let coordinate = coordinate.ok_or(PricingError::MissingCoordinate)?;

    let type_code = encode(CategoryDimension::PropertyType, &request.property_type)?;
    let condition_code = encode(CategoryDimension::Condition, &request.condition)?;

    let features = assemble(&request.inputs, Some(coordinate), type_code, condition_code)?;
    let log_price = model.predict(&features)?;

    let price = Price::new(to_price(log_price)).ok_or(PricingError::PriceOutOfRange(log_price))?;
    debug!("Predicted {} (log-price {:.6})", price, log_price);

    Ok(PricePrediction { price, log_price })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureKind;
    use category_encoder::EncodeError;
    use inference_engine::{InferenceEngine, InferenceError, PredictionFailure};

    const FIXTURE: &str = include_str!("../../inference-engine/fixtures/price_model.json");

    fn engine() -> InferenceEngine {
        InferenceEngine::from_json_str(FIXTURE).unwrap()
    }

    fn request() -> PredictionRequest {
        PredictionRequest {
            inputs: FormInputs {
                stratum: 3,
                bedrooms: 3,
                bathrooms: 2,
                built_area: 100.0,
                age: 10,
                total_area: 120.0,
            },
            property_type: "apartamento".to_string(),
            condition: "Usado".to_string(),
        }
    }

    fn bogota() -> Option<Coordinate> {
        Some(Coordinate::new(4.6097, -74.0817))
    }

    /// Model returning a fixed raw output, for exercising the error paths
    struct Constant(Result<f64, InferenceError>);

    impl RegressionModel for Constant {
        fn num_features(&self) -> usize {
            10
        }

        fn predict_row(&self, _row: &[f64]) -> Result<f64, InferenceError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_valid_request_yields_positive_price() {
        let prediction = predict_price(&engine(), &request(), bogota()).unwrap();

        assert!(prediction.price.cop() > 0.0);
        assert!((prediction.log_price - 19.1).abs() < 1e-5);
        assert_eq!(prediction.price.cop(), prediction.log_price.exp());
    }

    #[test]
    fn test_identical_requests_identical_price() {
        let engine = engine();
        let first = predict_price(&engine, &request(), bogota()).unwrap();
        let second = predict_price(&engine, &request(), bogota()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_coordinate_regardless_of_fields() {
        let mut bad_labels = request();
        bad_labels.property_type = "castillo".to_string();
        bad_labels.condition = "???".to_string();

        for req in [request(), bad_labels] {
            let err = predict_price(&engine(), &req, None).unwrap_err();
            assert_eq!(err, PricingError::MissingCoordinate);
            assert_eq!(err.kind(), FailureKind::MissingCoordinate);
        }
    }

    #[test]
    fn test_unknown_property_type() {
        let mut req = request();
        req.property_type = "castillo".to_string();

        let err = predict_price(&engine(), &req, bogota()).unwrap_err();
        assert_eq!(err.kind(), FailureKind::UnknownCategory);
        assert!(matches!(
            err,
            PricingError::UnknownCategory(EncodeError::UnknownCategory {
                dimension: CategoryDimension::PropertyType,
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_condition() {
        let mut req = request();
        req.condition = "usado".to_string();

        let err = predict_price(&engine(), &req, bogota()).unwrap_err();
        assert!(matches!(
            err,
            PricingError::UnknownCategory(EncodeError::UnknownCategory {
                dimension: CategoryDimension::Condition,
                ..
            })
        ));
    }

    #[test]
    fn test_model_failure_is_reported() {
        let model = Constant(Err(InferenceError::PredictionError(
            PredictionFailure::NonFiniteOutput(f64::INFINITY),
        )));

        let err = predict_price(&model, &request(), bogota()).unwrap_err();
        assert_eq!(err.kind(), FailureKind::PredictionFailed);
        assert!(err.to_string().starts_with("Prediction failed"));
    }

    #[test]
    fn test_overflowing_price_is_reported() {
        let err = predict_price(&Constant(Ok(1_000.0)), &request(), bogota()).unwrap_err();
        assert_eq!(err, PricingError::PriceOutOfRange(1_000.0));
        assert_eq!(err.kind(), FailureKind::PredictionFailed);
    }

    #[test]
    fn test_works_through_trait_object() {
        let model: Box<dyn RegressionModel> = Box::new(Constant(Ok(2.0)));
        let prediction = predict_price(model.as_ref(), &request(), bogota()).unwrap();
        assert_eq!(prediction.price.cop(), 2.0f64.exp());
    }

    #[test]
    fn test_request_from_flat_json() {
        let json = r#"{
            "stratum": 3, "bedrooms": 3, "bathrooms": 2, "built_area": 100,
            "age": 10, "total_area": 120,
            "property_type": "apartamento", "condition": "Usado"
        }"#;
        let parsed: PredictionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, request());
    }
}

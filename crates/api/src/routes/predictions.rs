//! Prediction Routes

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use feature_engine::Coordinate;
use pricing::{predict_price, PredictionRequest, PricePrediction, PricingError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::error::ApiError;
use crate::AppState;

/// Form submission: the form fields plus the map selection, if any
#[derive(Debug, Deserialize)]
pub struct PredictionBody {
    #[serde(flatten)]
    pub request: PredictionRequest,
    pub coordinate: Option<Coordinate>,
}

/// Response for a successful prediction
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Price in COP
    pub price: f64,
    /// Display string, e.g. "350,000,000.00 COP"
    pub formatted: String,
    pub log_price: f64,
}

/// Bounds the form widgets enforce
fn check_form_bounds(request: &PredictionRequest) -> Result<(), ApiError> {
    let inputs = &request.inputs;
    if !(1..=6).contains(&inputs.stratum) {
        return Err(ApiError::InvalidInput(format!(
            "stratum must be between 1 and 6, got {}",
            inputs.stratum
        )));
    }
    for (field, value) in [("built_area", inputs.built_area), ("total_area", inputs.total_area)] {
        if !(value.is_finite() && value >= 1.0) {
            return Err(ApiError::InvalidInput(format!(
                "{} must be at least 1 m², got {}",
                field, value
            )));
        }
    }
    Ok(())
}

/// Run checks and the pipeline for one submission, recording its outcome.
///
/// The location is checked before the form bounds so a missing map point is
/// reported whatever else the form holds.
pub(crate) fn evaluate(state: &AppState, body: &PredictionBody) -> Result<PricePrediction, ApiError> {
    let start = Instant::now();

    let result = if body.coordinate.is_none() {
        Err(ApiError::Pricing(PricingError::MissingCoordinate))
    } else {
        check_form_bounds(&body.request).and_then(|_| {
            predict_price(state.model.as_ref(), &body.request, body.coordinate)
                .map_err(ApiError::from)
        })
    };

    let outcome = match &result {
        Ok(_) => "ok",
        Err(ApiError::Pricing(e)) => e.kind().as_str(),
        Err(_) => "invalid_input",
    };
    record_outcome(outcome, start.elapsed().as_secs_f64());

    result
}

fn record_outcome(outcome: &'static str, seconds: f64) {
    metrics::counter!("predictions_total", "outcome" => outcome).increment(1);
    metrics::histogram!("prediction_latency_seconds").record(seconds);
}

/// Predict the price of one property
pub async fn create_prediction(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PredictionBody>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        record_outcome("invalid_input", 0.0);
        ApiError::InvalidInput(rejection.body_text())
    })?;

    let prediction = evaluate(&state, &body)?;
    info!(
        "Prediction for {} ({}): {}",
        body.request.property_type, body.request.condition, prediction.price
    );

    Ok(Json(PredictionResponse {
        price: prediction.price.cop(),
        formatted: prediction.price.to_string(),
        log_price: prediction.log_price,
    }))
}

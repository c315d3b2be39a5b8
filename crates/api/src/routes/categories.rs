//! Category Routes

use axum::Json;
use category_encoder::CategoryDimension;
use serde::Serialize;

/// Options for the form selectors
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub property_types: Vec<&'static str>,
    pub conditions: Vec<&'static str>,
    pub strata: Vec<u8>,
}

/// Get the labels the form may offer
pub async fn get_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        property_types: CategoryDimension::PropertyType.labels(),
        conditions: CategoryDimension::Condition.labels(),
        strata: (1..=6).collect(),
    })
}

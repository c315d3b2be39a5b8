//! Visualization Gallery Routes

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use gallery::{Collection, Gallery};
use serde::Serialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;

/// Documents available in one collection
#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub collection: Collection,
    pub title: &'static str,
    pub prompt: &'static str,
    pub documents: Vec<String>,
}

fn listing(gallery: &Gallery) -> Result<Json<GalleryResponse>, ApiError> {
    let collection = gallery.collection();
    Ok(Json(GalleryResponse {
        collection,
        title: collection.title(),
        prompt: collection.prompt(),
        documents: gallery.list()?,
    }))
}

/// List heat-maps and cluster maps
pub async fn list_maps(State(state): State<Arc<AppState>>) -> Result<Json<GalleryResponse>, ApiError> {
    listing(&state.heat_maps)
}

/// Serve one heat-map document verbatim
pub async fn get_map(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Html<String>, ApiError> {
    Ok(Html(state.heat_maps.read(&name)?))
}

/// List departmental zonations
pub async fn list_interpolations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GalleryResponse>, ApiError> {
    listing(&state.interpolations)
}

/// Serve one zonation document verbatim
pub async fn get_interpolation(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Html<String>, ApiError> {
    Ok(Html(state.interpolations.read(&name)?))
}

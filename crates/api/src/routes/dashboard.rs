//! Dashboard page

use axum::response::Html;

const PAGE: &str = include_str!("../../assets/index.html");

/// Serve the single-page dashboard
pub async fn index() -> Html<&'static str> {
    Html(PAGE)
}

//! HTTP route handlers

pub mod categories;
pub mod dashboard;
pub mod gallery;
pub mod predictions;

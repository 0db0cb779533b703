//! HTTP route handlers.

pub mod health;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for every path without a route.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

//! Request Extractors
//!
//! Wrappers around axum extractors that convert rejections into the API's
//! JSON error shape instead of axum's plain-text defaults.

use axum::extract::FromRequest;

use crate::shared::errors::ApiError;

/// JSON body extractor whose rejection renders as `{"error": "..."}`
///
/// Malformed or non-JSON bodies become a 400 with the rejection message in
/// the standard error envelope.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

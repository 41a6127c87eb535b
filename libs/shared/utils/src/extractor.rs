use axum::extract::{FromRequest, FromRequestParts};

use shared_models::error::AppError;

// axum's built-in extractors answer malformed input with plain-text bodies.
// These wrappers send the rejection through `AppError` so every 4xx uses the
// same `{"success": false, "error": ...}` envelope.

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

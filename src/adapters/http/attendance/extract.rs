//! Request extractors that reject with the API error body.
//!
//! Axum's stock extractors answer malformed input with plain text; these
//! wrappers route the rejection through [`ApiError`] so every failure is
//! `{ code, message }` JSON.

use axum::extract::{FromRequest, FromRequestParts};

use super::handlers::ApiError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

//! Extractors whose rejections render as 422 `{"detail"}` bodies.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::ApiError;

/// JSON body; malformed or mis-shaped payloads are a validation failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string with the same rejection handling as [`ApiJson`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

//! Extract the entry id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Integer id taken from the route's single path parameter. Anything but a plain integer segment is a 400.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for EntryId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        let digits = raw.strip_prefix('-').unwrap_or(&raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::BadRequest(format!("invalid id: {}", raw)));
        }
        raw.parse::<i64>()
            .map(EntryId)
            .map_err(|_| AppError::BadRequest(format!("invalid id: {}", raw)))
    }
}

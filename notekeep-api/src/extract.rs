/// Request body extraction
///
/// Every endpoint takes a JSON body, including `GET /notes` and
/// `DELETE /notes`. Clients routinely send those without a
/// `Content-Type` header, so [`JsonBody`] decodes the raw bytes directly
/// instead of going through `axum::Json`, and reports any failure as a
/// plain 400.

use crate::error::ApiError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON request body decoded regardless of `Content-Type`
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read request body");
            ApiError::BadRequest("Invalid request format".to_string())
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::debug!(error = %e, "Failed to decode request body");
            ApiError::BadRequest("Invalid request format".to_string())
        })
    }
}

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Product id taken from the path. An id that is not a valid key can never
/// name a row, so it is reported as not found.
pub struct ProductId(pub i32);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

        raw.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))
    }
}

/// JSON body that ignores `Content-Type` and reports failures as `AppError`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let body = Bytes::from_request(req, state).await?;
        parse_body(&body).map(Self)
    }
}

/// An empty body reads as `{}`.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}".as_slice()
    } else {
        body
    };

    Ok(serde_json::from_slice(body)?)
}

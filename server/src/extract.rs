//! Request extractors whose rejections are `ApiError`.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use validator::Validate;

use crate::error::ApiError;

/// A JSON body that has been deserialized and then checked with `Validate`.
///
/// The body is first read as a `serde_json::Value` so that syntax and
/// content-type problems keep axum's rejection, then decoded into `T` with
/// the failing field path recorded.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<serde_json::Value>::from_request(req, state).await?;
        let value: T = serde_path_to_error::deserialize(body)?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Path parameters, with deserialization failures reported as `ApiError`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct IdPath<T>(pub T);

/// Query string, with deserialization failures reported as `ApiError`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ListQuery<T>(pub T);

/// Query parameters accepted by `GET /todos`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub first_n: Option<usize>,
}

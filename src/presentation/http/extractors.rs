// src/presentation/http/extractors.rs
use crate::application::{ApplicationResult, dto::AuthenticatedUser, error::ApplicationError};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// The caller placed into request extensions by
/// [`require_authentication`](super::middleware::require_authentication).
///
/// Handlers behind the guard take this instead of touching headers; if the
/// guard was not mounted the extractor still refuses with 401.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .map(Self)
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized("authentication required"))
            })
    }
}

/// Declarative shape contract for request bodies, checked before any handler
/// logic runs.
pub trait Validate {
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` describing the first violation.
    fn validate(&self) -> ApplicationResult<()>;
}

/// JSON body that has been deserialized and passed [`Validate`].
///
/// Malformed JSON and contract violations both surface as 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            HttpError::from_error(ApplicationError::validation(rejection.body_text()))
        })?;

        value.validate().map_err(HttpError::from_error)?;

        Ok(Self(value))
    }
}

// src/presentation/http/middleware/authenticate.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Guard for routes that require a signed-in caller.
///
/// Resolves the bearer token and stores the [`AuthenticatedUser`] in request
/// extensions for the [`Authenticated`] extractor. Short-circuits with 401
/// before the handler runs, so nothing downstream is touched for anonymous
/// requests.
///
/// Usage: `router.route_layer(axum::middleware::from_fn(require_authentication))`
///
/// [`AuthenticatedUser`]: crate::application::dto::AuthenticatedUser
/// [`Authenticated`]: crate::presentation::http::extractors::Authenticated
pub async fn require_authentication(mut req: Request<Body>, next: Next) -> Response {
    let Some(header) = req.headers().typed_get::<Authorization<Bearer>>() else {
        return HttpError::from_error(ApplicationError::unauthorized(
            "missing Authorization header",
        ))
        .into_response();
    };

    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    match state.services.authenticate(header.token()).await {
        Ok(user) => {
            tracing::debug!(user_id = %user.id, "request authenticated");
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(error = %err, "authentication rejected");
            HttpError::from_error(err).into_response()
        }
    }
}

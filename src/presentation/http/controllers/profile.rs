// src/presentation/http/controllers/profile.rs
use crate::application::dto::ProfileDto;
use crate::presentation::http::controllers::profile_requests::UpdateContactInfoRequest;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ValidatedJson};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Profile of the signed-in user.", body = ProfileDto),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Authenticated user has no stored record.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Profile"
)]
pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .profile_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/me/contact-info",
    request_body = UpdateContactInfoRequest,
    responses(
        (status = 200, description = "Contact info replaced; full profile returned.", body = ProfileDto),
        (status = 400, description = "Malformed body or field too long.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Authenticated user has no stored record.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Profile"
)]
pub async fn update_contact_info(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ValidatedJson(payload): ValidatedJson<UpdateContactInfoRequest>,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .profile_commands
        .update_contact_info(&user, payload.into())
        .await
        .into_http()
        .map(Json)
}

// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::profile,
    middleware::{rate_limit, require_authentication},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    /// `None` disables rate limiting, which tests rely on since `oneshot`
    /// requests carry no peer address.
    pub rate_limit: Option<(u64, u32)>,
}

impl RouterOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: Some((config.rate_limit_per_second(), config.rate_limit_burst())),
        }
    }
}

pub fn build_router_with_options(state: HttpState, options: RouterOptions) -> Router {
    let RouterOptions {
        allowed_origins,
        rate_limit: limit,
    } = options;

    let mut api = Router::new()
        .route("/me", get(profile::get_profile))
        .route("/me/contact-info", put(profile::update_contact_info))
        .route_layer(middleware::from_fn(require_authentication));

    if let Some((per_second, burst)) = limit {
        match rate_limit::rate_limit_layer(per_second, burst) {
            Some(layer) => api = api.layer(layer),
            None => tracing::warn!(per_second, burst, "invalid rate limit settings; limiter disabled"),
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .into_iter()
        .filter_map(|origin| {
            HeaderValue::try_from(origin.as_str())
                .inspect_err(|_| tracing::warn!(origin = %origin, "ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

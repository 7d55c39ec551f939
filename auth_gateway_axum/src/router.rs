//! Combined router for the gateway endpoints

use axum::Router;
use http::{
    HeaderValue, Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tower_http::LatencyUnit;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use auth_gateway::GatewayConfig;

/// Create the gateway router with CORS and HTTP tracing
///
/// Routes:
/// - `GET /` redirects to the issuer's authorization endpoint
/// - `GET /callback` completes the code flow and redirects to the front end
/// - `POST /verify` checks a token for other services
/// - `GET /me` returns the authenticated user
/// - everything else is forwarded to the issuer
///
/// Preflight `OPTIONS` requests are answered by the CORS layer for the
/// configured front-end origin, with credentials allowed.
pub fn auth_gateway_router(config: GatewayConfig) -> Router {
    auth_gateway_router_no_trace(config).layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(true),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as `auth_gateway_router()` but without the HTTP tracing middleware.
/// Use this to add your own tracing middleware, or none.
pub fn auth_gateway_router_no_trace(config: GatewayConfig) -> Router {
    let cors = cors_layer(&config);
    super::gateway::router(config).layer(cors)
}

fn cors_layer(config: &GatewayConfig) -> CorsLayer {
    let origin = config.frontend_origin.origin().ascii_serialization();
    let origin: HeaderValue = origin
        .parse()
        .expect("frontend origin must serialize to a header value");

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
}

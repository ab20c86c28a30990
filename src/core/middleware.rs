use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, RequestId};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::Span;
use uuid::Uuid;

const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization";
const CORS_ALLOW_METHODS: &str = "GET, POST, DELETE";

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

/// Answers preflight requests for the configured origin
fn preflight_layer(origin: &HeaderValue) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_origin(origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // tower-http refuses credentials together with a wildcard origin
    if origin == "*" {
        cors
    } else {
        cors.allow_credentials(true)
    }
}

/// Attach the cross-origin policy to every response.
///
/// The four headers are set unconditionally, on top of whatever the preflight
/// layer produced, so errors and fallbacks carry them too.
pub fn with_cors(router: Router, allowed_origin: &str) -> Router {
    let origin = HeaderValue::from_str(allowed_origin).unwrap_or_else(|_| {
        tracing::warn!(
            "Invalid CORS origin '{}', falling back to '*'",
            allowed_origin
        );
        HeaderValue::from_static("*")
    });

    router
        .layer(preflight_layer(&origin))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            origin,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
}

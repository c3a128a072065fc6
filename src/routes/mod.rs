use std::time::Duration;

use axum::{
    Extension, Json, Router,
    extract::OriginalUri,
    http::{HeaderName, HeaderValue, Request, Response},
    routing::get,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::{config::AppConfig, error::AppError, state::AppState, version::ApiVersion};

pub mod doc;
pub mod health;
pub mod products;

const REQUEST_ID_HEADER: &str = "x-request-id";
const SUPPORTED_VERSIONS_HEADER: &str = "api-supported-versions";

// Build the versioned API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    ApiVersion::SUPPORTED
        .into_iter()
        .fold(Router::new(), |router, version| {
            router.nest(&version.prefix(), products::router().layer(Extension(version)))
        })
}

fn swagger_router() -> Router<AppState> {
    ApiVersion::SUPPORTED
        .into_iter()
        .fold(Router::new(), |router, version| {
            let path = format!("/swagger/{}/swagger.json", version.group_name());
            router.route(&path, get(move || async move { Json(doc::versioned_doc(version)) }))
        })
}

/// Full application: API routes, docs, health check, fallback and the tower
/// middleware stack.
pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id
            )
        })
        .on_request(|request: &Request<_>, _span: &tracing::Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "request started"
            );
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &tracing::Span| {
            tracing::info!(
                status = %response.status(),
                ms = %latency.as_millis(),
                "request finished"
            );
        });

    let supported_versions = HeaderValue::from_str(&ApiVersion::supported_header())
        .unwrap_or_else(|_| HeaderValue::from_static("3"));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(swagger_router())
        .merge(doc::scalar_docs())
        .fallback(unsupported_route)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(SUPPORTED_VERSIONS_HEADER),
            supported_versions,
        ))
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(ConcurrencyLimitLayer::new(config.concurrency_limit))
        .with_state(state)
}

async fn unsupported_route(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::RouteNotRecognized(uri.path().to_string())
}

use axum::{Router, extract::Request, middleware, routing::get};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::logging::logging_middleware;
use crate::middleware::auth::authenticate;
use crate::modules::caller::init_caller_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .nest(
            "/api",
            Router::new().nest("/caller", init_caller_router()),
        )
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .with_state(state)
}

/// Request span without the query string, which may carry an access token.
fn request_span(req: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        version = ?req.version(),
    )
}

async fn ping() -> &'static str {
    "pong"
}

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query, Request, State},
    http::{HeaderMap, HeaderValue, Uri, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bookstore_oauth_core::RestError;
use serde::Serialize;
use tracing::{debug, warn};

use crate::modules::access_token::AccessTokenResolver;
use crate::state::AppState;

pub const HEADER_X_PUBLIC: &str = "x-public";
pub const HEADER_X_CLIENT_ID: &str = "x-client-id";
pub const HEADER_X_CALLER_ID: &str = "x-user-id";
pub const PARAM_ACCESS_TOKEN: &str = "access_token";

/// Whether the request is marked public by the upstream router.
///
/// A missing request counts as public.
pub fn is_public<B>(request: Option<&Request<B>>) -> bool {
    request.is_none_or(|request| {
        request
            .headers()
            .get(HEADER_X_PUBLIC)
            .is_some_and(|value| value.as_bytes() == b"true")
    })
}

/// User id stamped by [`authenticate_request`], or 0 when there is none.
pub fn get_caller_id<B>(request: Option<&Request<B>>) -> i64 {
    request.map_or(0, |request| id_header(request.headers(), HEADER_X_CALLER_ID))
}

/// Client id stamped by [`authenticate_request`], or 0 when there is none.
pub fn get_client_id<B>(request: Option<&Request<B>>) -> i64 {
    request.map_or(0, |request| id_header(request.headers(), HEADER_X_CLIENT_ID))
}

fn id_header(headers: &HeaderMap, name: &str) -> i64 {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

/// Removes the trusted identity headers, whatever their origin.
pub fn clean_request<B>(request: &mut Request<B>) {
    let headers = request.headers_mut();
    headers.remove(HEADER_X_CLIENT_ID);
    headers.remove(HEADER_X_CALLER_ID);
}

/// First non-blank `access_token` query parameter, trimmed.
fn access_token_param(uri: &Uri) -> Option<String> {
    let Query(params) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;

    params
        .into_iter()
        .find(|(key, _)| key == PARAM_ACCESS_TOKEN)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Resolves the request's access token and stamps the caller identity onto
/// the trusted headers.
///
/// Passing `None` is a no-op that succeeds. Otherwise the trusted headers are
/// always cleared first; a request without an access token stays anonymous
/// and still succeeds. On a resolver error the request is left without
/// identity headers and the error is returned unchanged.
pub async fn authenticate_request<R, B>(
    resolver: &R,
    request: Option<&mut Request<B>>,
) -> Result<(), RestError>
where
    R: AccessTokenResolver,
{
    let Some(request) = request else {
        return Ok(());
    };

    clean_request(request);

    let Some(access_token_id) = access_token_param(request.uri()) else {
        debug!("No access token on request, continuing anonymously");
        return Ok(());
    };

    let access_token = resolver.get_access_token(&access_token_id).await?;

    let headers = request.headers_mut();
    headers.insert(HEADER_X_CLIENT_ID, HeaderValue::from(access_token.client_id));
    headers.insert(HEADER_X_CALLER_ID, HeaderValue::from(access_token.user_id));

    debug!(
        user_id = access_token.user_id,
        client_id = access_token.client_id,
        "Caller identity stamped on request"
    );

    Ok(())
}

/// Router middleware around [`authenticate_request`].
///
/// Public requests skip token resolution but are still stripped of trusted
/// headers. A failed resolution ends the request with the classified error.
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/books", get(list_books))
///     .layer(middleware::from_fn_with_state(state.clone(), authenticate));
/// ```
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    if is_public(Some(&req)) {
        clean_request(&mut req);
        return next.run(req).await;
    }

    match authenticate_request(&state.oauth, Some(&mut req)).await {
        Ok(()) => next.run(req).await,
        Err(err) => {
            warn!(status = err.status(), error = %err, "Request authentication failed");
            err.into_response()
        }
    }
}

/// Extractor exposing the identity stamped by [`authenticate`].
///
/// Both ids are 0 for anonymous requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Caller {
    pub user_id: i64,
    pub client_id: i64,
}

impl Caller {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            user_id: id_header(headers, HEADER_X_CALLER_ID),
            client_id: id_header(headers, HEADER_X_CLIENT_ID),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_id == 0 && self.client_id == 0
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Caller::from_headers(&parts.headers))
    }
}

use anyhow::{Context, bail};
use axum::http::StatusCode;
use bookstore_oauth_config::OAuthConfig;
use bookstore_oauth_core::RestError;
use reqwest::Url;
use tracing::{debug, instrument, warn};

use crate::modules::access_token::model::AccessToken;

const INVALID_RESPONSE: &str = "invalid response from authorization backend";
const INVALID_ERROR_PAYLOAD: &str = "invalid error payload from authorization backend";
const INVALID_ACCESS_TOKEN_PAYLOAD: &str = "invalid access-token payload";

/// Resolves an access token id into the identity it was issued for.
///
/// Implementations never panic on backend misbehaviour: every failure comes
/// back as a [`RestError`].
pub trait AccessTokenResolver: Send + Sync {
    fn get_access_token(
        &self,
        access_token_id: &str,
    ) -> impl Future<Output = Result<AccessToken, RestError>> + Send;
}

/// HTTP client for the authorization backend.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct OAuthClient {
    http: reqwest::Client,
    base_url: Url,
}

impl OAuthClient {
    /// Builds a client from a fixed configuration.
    ///
    /// # Errors
    ///
    /// Fails if the base URL cannot be used as a base for the access-token
    /// path, or if the HTTP client cannot be built.
    pub fn new(config: &OAuthConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("invalid OAuth base URL: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("OAuth base URL cannot be a base: {}", config.base_url);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build OAuth HTTP client")?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base_url}/oauth/access_token/{id}`, with the id percent-encoded as a
    /// single path segment.
    fn access_token_url(&self, access_token_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["oauth", "access_token", access_token_id]);
        }
        url
    }
}

impl AccessTokenResolver for OAuthClient {
    #[instrument(skip_all, fields(http.status_code = tracing::field::Empty))]
    async fn get_access_token(&self, access_token_id: &str) -> Result<AccessToken, RestError> {
        let response = match self
            .http
            .get(self.access_token_url(access_token_id))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                // The URL carries the credential; keep it out of the logs.
                let e = e.without_url();
                warn!(error = %e, timeout = e.is_timeout(), "Authorization backend request failed");
                return Err(RestError::internal_server_error(INVALID_RESPONSE));
            }
        };

        let status = response.status();
        tracing::Span::current().record("http.status_code", status.as_u16());

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e.without_url(), "Failed to read authorization backend response");
                return Err(RestError::internal_server_error(INVALID_RESPONSE));
            }
        };

        decode_response(status, &body)
    }
}

/// Maps a backend response onto an identity or a classified error.
fn decode_response(status: StatusCode, body: &[u8]) -> Result<AccessToken, RestError> {
    if status.as_u16() > 299 {
        return match serde_json::from_slice::<RestError>(body) {
            Ok(err) => {
                debug!(status = err.status(), kind = %err.kind(), "Authorization backend rejected access token");
                Err(err)
            }
            Err(e) => {
                let payload = serde_json::from_slice::<serde_json::Value>(body).ok();
                let field = |name: &str| {
                    payload
                        .as_ref()
                        .and_then(|p| p.get(name))
                        .map(ToString::to_string)
                        .unwrap_or_default()
                };
                warn!(
                    status = status.as_u16(),
                    backend_status = %field("status"),
                    backend_error = %field("error"),
                    error = %e,
                    "Unclassifiable error payload from authorization backend"
                );
                Err(RestError::internal_server_error(INVALID_ERROR_PAYLOAD))
            }
        };
    }

    serde_json::from_slice::<AccessToken>(body).map_err(|e| {
        warn!(status = status.as_u16(), error = %e, "Unparsable access-token payload");
        RestError::internal_server_error(INVALID_ACCESS_TOKEN_PAYLOAD)
    })
}

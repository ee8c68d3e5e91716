//! # Bookstore OAuth
//!
//! Request-authentication interceptor for the bookstore services.
//!
//! Every inbound request is stripped of the trusted identity headers
//! (`X-Client-Id`, `X-User-Id`). When it carries an `access_token` query
//! parameter, the token is resolved against the OAuth authorization backend
//! (`GET {base_url}/oauth/access_token/{id}`) and the resolved user and client
//! ids are written back onto those headers for downstream handlers.
//!
//! ```text
//! src/
//! ├── middleware/       # authenticate_request, header accessors, axum middleware
//! ├── modules/
//! │   ├── access_token/ # AccessToken model and the backend client
//! │   └── caller/       # caller identity endpoint
//! ├── logging.rs        # tracing subscriber and request logging
//! ├── router.rs         # gateway router
//! └── state.rs          # shared application state
//! ```
//!
//! ## Errors
//!
//! Failures are [`RestError`](bookstore_oauth_core::RestError) values with a
//! closed set of kinds (bad request, not found, internal server error). Errors
//! reported by the backend are passed through; anything the backend returns
//! that cannot be parsed becomes an internal server error.
//!
//! ## Environment Variables
//!
//! ```bash
//! OAUTH_API_BASE_URL=http://localhost:8080
//! OAUTH_API_TIMEOUT_MS=100
//! HOST=0.0.0.0
//! PORT=3000
//! ```

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use bookstore_oauth_config;
pub use bookstore_oauth_core;

pub use middleware::auth::{
    Caller, authenticate, authenticate_request, clean_request, get_caller_id, get_client_id,
    is_public,
};
pub use modules::access_token::{AccessToken, AccessTokenResolver, OAuthClient};

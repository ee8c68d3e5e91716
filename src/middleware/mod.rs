//! Middleware and extractors for request processing.
//!
//! # Authentication Flow
//!
//! 1. The upstream router marks public routes with `X-Public: true`
//! 2. [`auth::authenticate`] strips `X-Client-Id` / `X-User-Id` from every request
//! 3. For non-public requests carrying `?access_token=...`, the token is resolved
//!    against the authorization backend and the caller identity is stamped back
//!    onto those headers
//! 4. Handlers read the identity through the [`auth::Caller`] extractor
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::Caller;
//!
//! async fn list_orders(caller: Caller) -> impl IntoResponse {
//!     if caller.is_anonymous() {
//!         // public listing
//!     }
//!     // ...
//! }
//! ```

pub mod auth;

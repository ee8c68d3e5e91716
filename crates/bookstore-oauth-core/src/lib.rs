//! # Bookstore OAuth Core
//!
//! Error taxonomy shared by the request interceptor and the authorization
//! backend it talks to.
//!
//! - [`errors`]: [`RestError`] and its closed [`ErrorKind`] classification
//!
//! # Example
//!
//! ```ignore
//! use bookstore_oauth_core::RestError;
//!
//! let err = RestError::not_found("access token not found");
//! assert_eq!(err.status(), 404);
//! ```

pub mod errors;

pub use errors::{ErrorKind, RestError};

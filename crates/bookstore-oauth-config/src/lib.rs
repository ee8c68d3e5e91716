//! # Bookstore OAuth Config
//!
//! Configuration types loaded from environment variables:
//!
//! - [`oauth`]: authorization backend address and request timeout
//! - [`server`]: listen address for the gateway binary
//!
//! # Example
//!
//! ```ignore
//! use bookstore_oauth_config::{OAuthConfig, ServerConfig};
//!
//! let oauth_config = OAuthConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod oauth;
pub mod server;

// Re-export commonly used types at crate root
pub use oauth::OAuthConfig;
pub use server::ServerConfig;

pub mod model;
pub mod service;

pub use model::AccessToken;
pub use service::{AccessTokenResolver, OAuthClient};

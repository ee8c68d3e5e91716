use bookstore_oauth_config::OAuthConfig;

use crate::modules::access_token::OAuthClient;

#[derive(Clone, Debug)]
pub struct AppState {
    pub oauth: OAuthClient,
}

impl AppState {
    /// # Errors
    ///
    /// Fails if the OAuth client cannot be built from `config`.
    pub fn new(config: &OAuthConfig) -> anyhow::Result<Self> {
        Ok(Self {
            oauth: OAuthClient::new(config)?,
        })
    }
}

pub fn init_app_state() -> anyhow::Result<AppState> {
    AppState::new(&OAuthConfig::from_env())
}

pub mod access_token;
pub mod caller;

pub use self::access_token::model::AccessToken;

use axum::{Router, routing::get};

use crate::modules::caller::controller::get_caller;
use crate::state::AppState;

pub fn init_caller_router() -> Router<AppState> {
    Router::new().route("/", get(get_caller))
}

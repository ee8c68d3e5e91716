use axum::Json;
use tracing::{debug, instrument};

use crate::middleware::auth::Caller;

/// Echoes the identity the authentication middleware resolved for this request.
#[instrument]
pub async fn get_caller(caller: Caller) -> Json<Caller> {
    if caller.is_anonymous() {
        debug!("Anonymous caller");
    }
    Json(caller)
}

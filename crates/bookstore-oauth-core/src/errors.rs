use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Closed set of error classifications understood by the interceptor and the
/// authorization backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "Bad request")]
    BadRequest,
    #[serde(rename = "Not found")]
    NotFound,
    #[serde(rename = "Internal server error")]
    InternalServerError,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Numeric status as carried in the JSON payload.
    pub fn status(self) -> i32 {
        i32::from(self.status_code().as_u16())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad request",
            ErrorKind::NotFound => "Not found",
            ErrorKind::InternalServerError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified failure: a message plus an [`ErrorKind`] that fixes the HTTP
/// status.
///
/// On the wire it is `{"message": ..., "status": ..., "error": ...}`. Decoding
/// rejects payloads whose `status` does not belong to their `error` kind, so a
/// `RestError` always carries a status consistent with its kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(try_from = "RestErrorPayload", into = "RestErrorPayload")]
#[error("{kind}: {message}")]
pub struct RestError {
    message: String,
    kind: ErrorKind,
}

impl RestError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> i32 {
        self.kind.status()
    }

    pub fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RestErrorPayload {
    message: String,
    status: i32,
    error: ErrorKind,
}

/// Raised when a payload's `status` disagrees with its `error` kind.
#[derive(Debug, thiserror::Error)]
#[error("status {status} does not match error kind \"{kind}\"")]
pub struct StatusMismatch {
    status: i32,
    kind: ErrorKind,
}

impl TryFrom<RestErrorPayload> for RestError {
    type Error = StatusMismatch;

    fn try_from(payload: RestErrorPayload) -> Result<Self, Self::Error> {
        if payload.status != payload.error.status() {
            return Err(StatusMismatch {
                status: payload.status,
                kind: payload.error,
            });
        }

        Ok(RestError::new(payload.error, payload.message))
    }
}

impl From<RestError> for RestErrorPayload {
    fn from(err: RestError) -> Self {
        Self {
            status: err.status(),
            error: err.kind,
            message: err.message,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_constructors_set_status_and_kind() {
        let err = RestError::bad_request("missing field");
        assert_eq!(err.status(), 400);
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.message(), "missing field");

        let err = RestError::not_found("no such token");
        assert_eq!(err.status(), 404);
        assert_eq!(err.kind().as_str(), "Not found");

        let err = RestError::internal_server_error("boom");
        assert_eq!(err.status(), 500);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_serialize_uses_wire_field_names() {
        let err = RestError::not_found("access token not found");
        let value = serde_json::to_value(&err).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "message": "access token not found",
                "status": 404,
                "error": "Not found"
            })
        );
    }

    #[test]
    fn test_deserialize_backend_error() {
        let json = r#"{"message":"invalid access token","status":404,"error":"Not found"}"#;
        let err: RestError = serde_json::from_str(json).unwrap();

        assert_eq!(err, RestError::not_found("invalid access token"));
    }

    #[test]
    fn test_deserialize_rejects_status_kind_mismatch() {
        let json = r#"{"message":"odd","status":418,"error":"Not found"}"#;
        assert!(serde_json::from_str::<RestError>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_kind() {
        let json = r#"{"message":"nope","status":401,"error":"Unauthorized"}"#;
        assert!(serde_json::from_str::<RestError>(json).is_err());
    }

    #[test]
    fn test_display() {
        let err = RestError::bad_request("invalid access token id");
        assert_eq!(err.to_string(), "Bad request: invalid access token id");
    }

    #[tokio::test]
    async fn test_into_response() {
        let response = RestError::not_found("gone").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Not found");
        assert_eq!(body["message"], "gone");
    }
}

//! JSON response builders.
//!
//! Every body the API produces is JSON; errors use the `{"message": ...}`
//! shape.

use bytes::Bytes;
use http::header::{HeaderValue, ALLOW, CONTENT_TYPE};
use http::StatusCode;
use http_body_util::Full;
use hyper::Response;
use serde::Serialize;

use super::content_types;

pub type Resp = Response<Full<Bytes>>;

/// JSON response with a pre-rendered body
pub fn json(status: StatusCode, body: impl Into<Bytes>) -> Resp {
    let mut resp = Response::new(Full::new(body.into()));
    *resp.status_mut() = status;
    resp.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(content_types::JSON));
    resp
}

/// Serialize `value` into a JSON response; a serialization failure becomes a 500
pub fn json_value<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Resp {
    match serde_json::to_vec(value) {
        Ok(body) => json(status, body),
        Err(e) => {
            log::error!("Failed to serialize response body: {}", e);
            message(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// `{"message": text}` with the given status
pub fn message(status: StatusCode, text: &str) -> Resp {
    json(status, serde_json::json!({ "message": text }).to_string())
}

/// 405 Method Not Allowed with Allow header
pub fn method_not_allowed(allowed: &[http::Method]) -> Resp {
    let allow = allowed.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
    let mut resp = message(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    if let Ok(value) = HeaderValue::from_str(&allow) {
        resp.headers_mut().insert(ALLOW, value);
    }
    resp
}

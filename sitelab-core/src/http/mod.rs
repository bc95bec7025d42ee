//! HTTP plumbing shared by the API handlers
//!
//! - [`router`] - method + path-pattern routing with `:param` segments
//! - [`params`] - query-string decoding and lenient integer parsing
//! - [`response`] - JSON response builders
//!
//! Every response body is a fully buffered `Full<Bytes>`; nothing streams.

pub mod params;
pub mod response;
pub mod router;

pub use params::{parse_id, parse_int_lenient, parse_query, QueryParams};
pub use response::{json, json_value, message, method_not_allowed, Resp};
pub use router::{PathParams, Route, RouteHandler, RouteRequest, Router};

/// Common content types
pub mod content_types {
    pub const JSON: &str = "application/json";
}

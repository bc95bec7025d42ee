//! Method + path routing with `:param` segments

use std::collections::HashMap;
use std::sync::Arc;

use http::{Method, StatusCode, Uri};

use super::params::{parse_query, QueryParams};
use super::response::{message, method_not_allowed, Resp};

/// Path parameters extracted from dynamic routes
pub type PathParams = HashMap<String, String>;

/// Route handler: shared state plus the matched request, returns a response
pub type RouteHandler<S> = Arc<dyn Fn(&S, &RouteRequest) -> Resp + Send + Sync>;

/// What a handler sees of the request
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub params: PathParams,
    pub query: QueryParams,
}

impl RouteRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

/// A single route definition
pub struct Route<S> {
    method: Method,
    pattern: String,
    handler: RouteHandler<S>,
}

impl<S> Route<S> {
    pub fn new<F>(method: Method, pattern: &str, handler: F) -> Self
    where
        F: Fn(&S, &RouteRequest) -> Resp + Send + Sync + 'static,
    {
        Self { method, pattern: pattern.to_string(), handler: Arc::new(handler) }
    }

    /// Extract path parameters if `path` fits this route's pattern
    fn extract_params(&self, path: &str) -> Option<PathParams> {
        let pattern_parts: Vec<&str> = self.pattern.split('/').collect();
        let path_parts: Vec<&str> = path.split('/').collect();

        if pattern_parts.len() != path_parts.len() {
            return None;
        }

        let mut params = HashMap::new();

        for (pattern_part, path_part) in pattern_parts.iter().zip(path_parts.iter()) {
            if let Some(param_name) = pattern_part.strip_prefix(':') {
                if path_part.is_empty() {
                    return None;
                }
                let value = urlencoding::decode(path_part)
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| path_part.to_string());
                params.insert(param_name.to_string(), value);
            } else if pattern_part != path_part {
                return None;
            }
        }

        Some(params)
    }
}

/// Route table; first registered match wins
pub struct Router<S> {
    routes: Vec<Route<S>>,
}

impl<S> Router<S> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn route(mut self, route: Route<S>) -> Self {
        self.routes.push(route);
        self
    }

    pub fn get<F>(self, pattern: &str, handler: F) -> Self
    where
        F: Fn(&S, &RouteRequest) -> Resp + Send + Sync + 'static,
    {
        self.route(Route::new(Method::GET, pattern, handler))
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Run the matching handler.
    ///
    /// `HEAD` runs the `GET` handler; hyper leaves the body off the wire.
    /// Unknown paths get 404 `{"message":"Not found"}`; a known path with
    /// another method gets 405 with an `Allow` header.
    pub fn dispatch(&self, state: &S, method: &Method, uri: &Uri) -> Resp {
        let path = normalize_path(uri.path());
        let mut allowed: Vec<Method> = Vec::new();

        for route in &self.routes {
            let Some(params) = route.extract_params(path) else {
                continue;
            };

            if route.method == *method || (*method == Method::HEAD && route.method == Method::GET) {
                let request = RouteRequest {
                    params,
                    query: parse_query(uri.query()),
                };
                return (route.handler)(state, &request);
            }

            if !allowed.contains(&route.method) {
                allowed.push(route.method.clone());
            }
        }

        if allowed.is_empty() {
            message(StatusCode::NOT_FOUND, "Not found")
        } else {
            method_not_allowed(&allowed)
        }
    }
}

impl<S> Default for Router<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// `/api/sites/` routes like `/api/sites`
fn normalize_path(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

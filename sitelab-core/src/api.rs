//! `/api/*` endpoint handlers
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | `/api/mapbox-token` | `{"token": ...}` | never fails |
//! | GET | `/api/sites` | `Site[]` | - |
//! | GET | `/api/sites/:id` | `Site` | 404 `{"message":"Site not found"}` |
//! | GET | `/api/scenarios?siteId=` | `Scenario[]` | - |
//! | GET | `/api/scenarios/:id` | `Scenario` | 404 `{"message":"Scenario not found"}` |
//! | GET | `/api/health` | health document | - |
//!
//! Nothing here writes to the store.

use std::sync::Arc;
use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use http::StatusCode;
use serde::Serialize;

use crate::config::MapConfig;
use crate::http::{json_value, message, parse_id, parse_int_lenient, Resp, RouteRequest, Router};
use crate::model::RecordId;
use crate::store::SiteRepository;

pub const SITE_NOT_FOUND: &str = "Site not found";
pub const SCENARIO_NOT_FOUND: &str = "Scenario not found";

/// State shared by every handler
pub struct ApiState {
    store: Arc<dyn SiteRepository>,
    map: MapConfig,
    started_at: Instant,
}

impl ApiState {
    pub fn new(store: Arc<dyn SiteRepository>, map: MapConfig) -> Self {
        Self { store, map, started_at: Instant::now() }
    }

    pub fn store(&self) -> &dyn SiteRepository {
        self.store.as_ref()
    }
}

/// The API route table
pub fn routes() -> Router<ApiState> {
    Router::new()
        .get("/api/mapbox-token", mapbox_token)
        .get("/api/sites", list_sites)
        .get("/api/sites/:id", get_site)
        .get("/api/scenarios", list_scenarios)
        .get("/api/scenarios/:id", get_scenario)
        .get("/api/health", health)
}

#[derive(Debug, Serialize)]
struct TokenResponse {
    /// Omitted when the variable is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    sites: usize,
    scenarios: usize,
    uptime_seconds: u64,
    timestamp: String,
}

fn mapbox_token(state: &ApiState, _req: &RouteRequest) -> Resp {
    json_value(StatusCode::OK, &TokenResponse { token: state.map.read_token() })
}

fn list_sites(state: &ApiState, _req: &RouteRequest) -> Resp {
    json_value(StatusCode::OK, &state.store.get_all_sites())
}

fn get_site(state: &ApiState, req: &RouteRequest) -> Resp {
    match req.param("id").and_then(parse_id).and_then(|id| state.store.get_site(id)) {
        Some(site) => json_value(StatusCode::OK, &site),
        None => message(StatusCode::NOT_FOUND, SITE_NOT_FOUND),
    }
}

/// `siteId` filters only when it parses; otherwise every scenario is listed
fn list_scenarios(state: &ApiState, req: &RouteRequest) -> Resp {
    let site_id = req.query_param("siteId").and_then(parse_int_lenient);
    let scenarios = match site_id {
        // Parsed but outside the id range: a filter that matches nothing.
        Some(n) => match RecordId::try_from(n) {
            Ok(id) => state.store.get_scenarios(Some(id)),
            Err(_) => Vec::new(),
        },
        None => state.store.get_scenarios(None),
    };
    json_value(StatusCode::OK, &scenarios)
}

fn get_scenario(state: &ApiState, req: &RouteRequest) -> Resp {
    match req.param("id").and_then(parse_id).and_then(|id| state.store.get_scenario(id)) {
        Some(scenario) => json_value(StatusCode::OK, &scenario),
        None => message(StatusCode::NOT_FOUND, SCENARIO_NOT_FOUND),
    }
}

fn health(state: &ApiState, _req: &RouteRequest) -> Resp {
    json_value(
        StatusCode::OK,
        &HealthResponse {
            status: "ok",
            sites: state.store.site_count(),
            scenarios: state.store.scenario_count(),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SiteStore;
    use http::Method;
    use http_body_util::BodyExt;

    fn state_with_token_var(var: &str) -> ApiState {
        ApiState::new(Arc::new(SiteStore::new()), MapConfig { token_env: var.to_string() })
    }

    async fn get(state: &ApiState, uri: &str) -> (StatusCode, serde_json::Value) {
        let resp = routes().dispatch(state, &Method::GET, &uri.parse().unwrap());
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_site_by_id() {
        let state = state_with_token_var("SITELAB_TEST_UNUSED_TOKEN");
        let (status, body) = get(&state, "/api/sites/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Williamsburg R6 Lot");
        assert_eq!(body["blockNumber"], 2382);
        assert_eq!(body["currentFAR"], 2.1);
    }

    #[tokio::test]
    async fn test_site_misses() {
        let state = state_with_token_var("SITELAB_TEST_UNUSED_TOKEN");
        for uri in ["/api/sites/9999", "/api/sites/abc", "/api/sites/-1", "/api/sites/0"] {
            let (status, body) = get(&state, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(body, serde_json::json!({ "message": "Site not found" }));
        }
    }

    #[tokio::test]
    async fn test_lenient_id_parse() {
        let state = state_with_token_var("SITELAB_TEST_UNUSED_TOKEN");
        let (status, body) = get(&state, "/api/sites/3abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 3);
    }

    #[tokio::test]
    async fn test_scenarios_filter() {
        let state = state_with_token_var("SITELAB_TEST_UNUSED_TOKEN");

        let (status, body) = get(&state, "/api/scenarios?siteId=1").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> =
            body.as_array().unwrap().iter().map(|s| s["name"].as_str().unwrap()).collect();
        assert_eq!(names.len(), 4);
        assert!(names.contains(&"Maximum Density Residential"));
        assert!(names.contains(&"Passive House Design"));

        let (_, body) = get(&state, "/api/scenarios?siteId=999").await;
        assert_eq!(body, serde_json::json!([]));

        let (_, body) = get(&state, "/api/scenarios?siteId=-4").await;
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_scenarios_without_usable_filter_lists_all() {
        let state = state_with_token_var("SITELAB_TEST_UNUSED_TOKEN");
        for uri in ["/api/scenarios", "/api/scenarios?siteId=", "/api/scenarios?siteId=abc"] {
            let (status, body) = get(&state, uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body.as_array().unwrap().len(), 4, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_scenario_by_id() {
        let state = state_with_token_var("SITELAB_TEST_UNUSED_TOKEN");

        let (status, body) = get(&state, "/api/scenarios/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["siteId"], 1);

        let (status, body) = get(&state, "/api/scenarios/5").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "message": "Scenario not found" }));
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let state = ApiState::new(Arc::new(SiteStore::empty()), MapConfig::default());
        let (status, body) = get(&state, "/api/sites").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_mapbox_token() {
        let state = state_with_token_var("SITELAB_TEST_API_TOKEN");

        std::env::remove_var("SITELAB_TEST_API_TOKEN");
        let (status, body) = get(&state, "/api/mapbox-token").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({}));

        std::env::set_var("SITELAB_TEST_API_TOKEN", "pk.test-token");
        let (_, body) = get(&state, "/api/mapbox-token").await;
        assert_eq!(body, serde_json::json!({ "token": "pk.test-token" }));
        std::env::remove_var("SITELAB_TEST_API_TOKEN");
    }

    #[tokio::test]
    async fn test_health() {
        let state = state_with_token_var("SITELAB_TEST_UNUSED_TOKEN");
        let (status, body) = get(&state, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["sites"], 3);
        assert_eq!(body["scenarios"], 4);
    }

    #[tokio::test]
    async fn test_reads_are_byte_identical() {
        let state = state_with_token_var("SITELAB_TEST_UNUSED_TOKEN");
        let router = routes();
        let mut bodies = Vec::new();
        for _ in 0..3 {
            let resp = router.dispatch(&state, &Method::GET, &"/api/sites".parse().unwrap());
            bodies.push(resp.into_body().collect().await.unwrap().to_bytes());
        }
        assert_eq!(bodies[0], bodies[1]);
        assert_eq!(bodies[1], bodies[2]);
    }
}

//! Shared test utilities for integration tests.
//!
//! `MockApi` is an in-process axum server that answers from registered
//! fixtures and records every request it receives. Fixtures match on path
//! plus the decoded query pairs, ignoring their order.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use dbv_api::{Client, Environment};
use reqwest::Url;
use serde_json::{json, Value};

pub const API_KEY: &str = "testkey";

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
}

#[derive(Debug, Clone)]
struct Fixture {
    path: String,
    query: Vec<(String, String)>,
    status: u16,
    body: String,
    delay: Duration,
}

#[derive(Clone, Default)]
struct MockState {
    fixtures: Arc<Mutex<Vec<Fixture>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockApi {
    pub base_url: String,
    state: MockState,
}

impl MockApi {
    /// Bind to a random local port and start serving.
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(respond).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let addr = listener.local_addr().expect("mock server has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Answer `path_and_query` with `status` and a JSON body.
    pub fn on(&self, path_and_query: &str, status: u16, body: Value) {
        self.on_raw(path_and_query, status, &body.to_string());
    }

    /// Answer `path_and_query` with `status` and a verbatim body.
    pub fn on_raw(&self, path_and_query: &str, status: u16, body: &str) {
        self.push_fixture(path_and_query, status, body, Duration::ZERO);
    }

    /// Answer `path_and_query` only after `delay` has passed.
    pub fn on_delayed(&self, path_and_query: &str, delay: Duration, status: u16, body: Value) {
        self.push_fixture(path_and_query, status, &body.to_string(), delay);
    }

    fn push_fixture(&self, path_and_query: &str, status: u16, body: &str, delay: Duration) {
        let (path, query) = split_path_and_query(path_and_query);
        self.state.fixtures.lock().unwrap().push(Fixture {
            path,
            query,
            status,
            body: body.to_string(),
            delay,
        });
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("mock server received no requests")
    }

    pub fn environment(&self) -> Environment {
        Environment::Custom(self.base_url.clone())
    }

    /// A facade client pointed at this server.
    pub fn client(&self) -> Client {
        Client::new(API_KEY, self.environment()).expect("failed to build client")
    }
}

async fn respond(State(state): State<MockState>, uri: Uri, headers: HeaderMap) -> Response {
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let (path, query) = split_path_and_query(path_and_query);

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    state.requests.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        query: query.clone(),
        authorization,
    });

    let fixture = state
        .fixtures
        .lock()
        .unwrap()
        .iter()
        .find(|f| f.path == path && f.query == query)
        .cloned();

    match fixture {
        Some(f) => {
            if !f.delay.is_zero() {
                tokio::time::sleep(f.delay).await;
            }
            (
                StatusCode::from_u16(f.status).expect("invalid fixture status"),
                [(header::CONTENT_TYPE, "application/json")],
                f.body,
            )
                .into_response()
        }
        None => (
            StatusCode::NOT_IMPLEMENTED,
            format!("no fixture for {path_and_query}"),
        )
            .into_response(),
    }
}

/// Split into the path and the decoded, sorted query pairs.
fn split_path_and_query(path_and_query: &str) -> (String, Vec<(String, String)>) {
    let url = Url::parse(&format!("http://mock{path_and_query}")).expect("bad path");
    let mut query: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    query.sort();
    (url.path().to_string(), query)
}

/// Query pairs as `key=value` strings, sorted.
pub fn query_keys(request: &RecordedRequest) -> Vec<String> {
    request
        .query
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect()
}

/// One-item list envelope with pagination links.
pub fn list_result() -> Value {
    json!({
        "success": true,
        "_metadata": {
            "total": 2,
            "page": 1,
            "perPage": 1,
            "pageCount": 1,
            "pageLinks": {
                "current": "https://api-databeaver-developer.bluegreensoft.com?page=1&perPage=1",
                "next": "https://api-databeaver-developer.bluegreensoft.com?page=2&perPage=1"
            }
        },
        "data": [{"id": "1", "name": "test"}]
    })
}

/// List envelope that matched nothing.
pub fn empty_result() -> Value {
    json!({
        "success": true,
        "_metadata": {"total": 0, "page": 1, "perPage": 1, "pageCount": 1, "pageLinks": {}},
        "data": []
    })
}

/// Singular envelope for `data`.
pub fn single_result(data: Value) -> Value {
    json!({"success": true, "data": data})
}

/// Register the standard fixtures for one resource:
/// list with `status`, by-field hit and miss, by-id hit, and by-id 404.
pub fn register_resource(mock: &MockApi, resource: &str, status: &str, field: Option<&str>) {
    mock.on(
        &format!("/v1/{resource}?status={status}&page=1"),
        200,
        list_result(),
    );
    if let Some(field) = field {
        mock.on(
            &format!("/v1/{resource}?{field}=test&perPage=1"),
            200,
            list_result(),
        );
        mock.on(
            &format!("/v1/{resource}?{field}=invalidtest&perPage=1"),
            200,
            empty_result(),
        );
    }
    mock.on(
        &format!("/v1/{resource}/1"),
        200,
        single_result(json!({"id": "1", "name": "test"})),
    );
    mock.on(
        &format!("/v1/{resource}/3"),
        404,
        json!({"success": false}),
    );
}

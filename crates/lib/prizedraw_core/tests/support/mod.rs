//! Scripted in-process raffle backend for integration tests.
//!
//! Binds an ephemeral port and mimics the five webapp endpoints with
//! realistic token handling: login and refresh issue serial token pairs
//! (`access-1`/`refresh-1`, `access-2`/...), and authenticated endpoints
//! check the bearer header against the currently issued token. Tests
//! script failures and responses through `BackendState`.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};
use uuid::Uuid;

/// Scripted behavior and call counters, shared with the test body.
pub struct BackendState {
    token_serial: AtomicUsize,
    current_access: Mutex<Option<String>>,
    current_refresh: Mutex<Option<String>>,
    login_body: Mutex<Option<String>>,
    join_body: Mutex<Option<String>>,
    status_body: Mutex<Value>,
    participate_body: Mutex<Value>,

    /// Deny all logins with 403 when set.
    pub reject_login: AtomicBool,
    /// Deny all refreshes with 401 when set.
    pub reject_refresh: AtomicBool,
    /// Deny the status endpoints with 500 when set.
    pub reject_status: AtomicBool,
    /// Deny the participate endpoint with 500 when set.
    pub reject_participate: AtomicBool,
    /// Answer the status endpoints with 401 this many times, regardless of
    /// the presented bearer token.
    pub force_status_unauthorized: AtomicUsize,

    pub login_calls: AtomicUsize,
    pub refresh_calls: AtomicUsize,
    pub status_calls: AtomicUsize,
    pub preview_calls: AtomicUsize,
    pub participate_calls: AtomicUsize,
}

impl BackendState {
    fn new() -> Self {
        Self {
            token_serial: AtomicUsize::new(0),
            current_access: Mutex::new(None),
            current_refresh: Mutex::new(None),
            login_body: Mutex::new(None),
            join_body: Mutex::new(None),
            status_body: Mutex::new(default_status()),
            participate_body: Mutex::new(
                json!({"success": true, "message": "ok", "participants_count": 182}),
            ),
            reject_login: AtomicBool::new(false),
            reject_refresh: AtomicBool::new(false),
            reject_status: AtomicBool::new(false),
            reject_participate: AtomicBool::new(false),
            force_status_unauthorized: AtomicUsize::new(0),
            login_calls: AtomicUsize::new(0),
            refresh_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
            preview_calls: AtomicUsize::new(0),
            participate_calls: AtomicUsize::new(0),
        }
    }

    /// Issue the next serial token pair and remember it as current.
    fn issue_pair(&self) -> Value {
        let serial = self.token_serial.fetch_add(1, Ordering::SeqCst) + 1;
        let access = format!("access-{serial}");
        let refresh = format!("refresh-{serial}");
        *self.current_access.lock().unwrap() = Some(access.clone());
        *self.current_refresh.lock().unwrap() = Some(refresh.clone());
        json!({"access_token": access, "refresh_token": refresh})
    }

    /// Invalidate the issued access token while the refresh token stays
    /// valid; the next authenticated call gets a 401 and must refresh.
    pub fn expire_access(&self) {
        *self.current_access.lock().unwrap() = None;
    }

    /// Replace the JSON served by the status endpoints.
    pub fn set_status(&self, body: Value) {
        *self.status_body.lock().unwrap() = body;
    }

    /// Replace the JSON served by the participate endpoint.
    pub fn set_participate(&self, body: Value) {
        *self.participate_body.lock().unwrap() = body;
    }

    /// Raw body of the last login request.
    pub fn last_login_body(&self) -> Option<String> {
        self.login_body.lock().unwrap().clone()
    }

    /// Raw body of the last participate request.
    pub fn last_participate_body(&self) -> Option<String> {
        self.join_body.lock().unwrap().clone()
    }

    fn serve_status(&self, headers: &HeaderMap) -> Response {
        if self
            .force_status_unauthorized
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return (StatusCode::UNAUTHORIZED, "access token expired").into_response();
        }
        if self.reject_status.load(Ordering::SeqCst) {
            return (StatusCode::INTERNAL_SERVER_ERROR, "status unavailable").into_response();
        }
        if !bearer_matches(headers, &self.current_access) {
            return (StatusCode::UNAUTHORIZED, "access token expired").into_response();
        }
        Json(self.status_body.lock().unwrap().clone()).into_response()
    }
}

/// A running scripted backend.
pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<BackendState>,
}

/// Bind an ephemeral port and serve the scripted backend on it.
pub async fn spawn_backend() -> MockBackend {
    let state = Arc::new(BackendState::new());
    let app = Router::new()
        .route("/prize-draws/webapp/login", post(login))
        .route("/prize-draws/webapp/refresh", post(refresh))
        .route(
            "/prize-draws/webapp/uuid/{raffle_id}/check-subscriptions",
            get(check_subscriptions),
        )
        .route("/prize-draws/webapp/uuid/{raffle_id}/preview", get(preview))
        .route(
            "/prize-draws/webapp/uuid/{raffle_id}/participate",
            post(participate),
        )
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve backend");
    });

    MockBackend {
        base_url: format!("http://{addr}"),
        state,
    }
}

fn default_status() -> Value {
    json!({
        "ends_datetime": "2026-09-01T18:00:00Z",
        "participants_count": 181,
        "participants_amount": 500,
        "is_finished": false,
        "is_participant": false,
        "all_subscribed": false,
        "mandatory_channels": [
            {
                "channel_id": -1001234567890i64,
                "title": "Prize News",
                "is_subscribed": true,
                "photo_url": "https://cdn.example.com/p.jpg"
            },
            {
                "channel_id": -1002233445566i64,
                "title": "Partner Channel",
                "is_subscribed": false,
                "photo_url": null
            }
        ]
    })
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn bearer_matches(headers: &HeaderMap, expected: &Mutex<Option<String>>) -> bool {
    let Some(token) = bearer_token(headers) else {
        return false;
    };
    expected.lock().unwrap().as_deref() == Some(token)
}

async fn login(State(state): State<Arc<BackendState>>, body: String) -> Response {
    state.login_calls.fetch_add(1, Ordering::SeqCst);
    *state.login_body.lock().unwrap() = Some(body);
    if state.reject_login.load(Ordering::SeqCst) {
        return (StatusCode::FORBIDDEN, "init data rejected").into_response();
    }
    Json(state.issue_pair()).into_response()
}

async fn refresh(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    state.refresh_calls.fetch_add(1, Ordering::SeqCst);
    if state.reject_refresh.load(Ordering::SeqCst) {
        return (StatusCode::UNAUTHORIZED, "refresh token rejected").into_response();
    }
    if !bearer_matches(&headers, &state.current_refresh) {
        return (StatusCode::UNAUTHORIZED, "refresh token rejected").into_response();
    }
    Json(state.issue_pair()).into_response()
}

async fn check_subscriptions(
    State(state): State<Arc<BackendState>>,
    Path(_raffle_id): Path<Uuid>,
    headers: HeaderMap,
) -> Response {
    state.status_calls.fetch_add(1, Ordering::SeqCst);
    state.serve_status(&headers)
}

async fn preview(
    State(state): State<Arc<BackendState>>,
    Path(_raffle_id): Path<Uuid>,
    headers: HeaderMap,
) -> Response {
    state.preview_calls.fetch_add(1, Ordering::SeqCst);
    state.serve_status(&headers)
}

async fn participate(
    State(state): State<Arc<BackendState>>,
    Path(_raffle_id): Path<Uuid>,
    headers: HeaderMap,
    body: String,
) -> Response {
    state.participate_calls.fetch_add(1, Ordering::SeqCst);
    *state.join_body.lock().unwrap() = Some(body);
    if state.reject_participate.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "participation unavailable").into_response();
    }
    if !bearer_matches(&headers, &state.current_access) {
        return (StatusCode::UNAUTHORIZED, "access token expired").into_response();
    }
    Json(state.participate_body.lock().unwrap().clone()).into_response()
}

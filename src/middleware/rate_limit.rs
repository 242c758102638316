use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

#[derive(Debug)]
struct Window {
    started: Instant,
    admitted: u32,
}

/// Fixed one-second window limiter. Cheap and global per router layer; the
/// transaction-submission route stacks a second, stricter instance on top of
/// the API-wide one.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    limit: u32,
    window: Arc<Mutex<Window>>,
}

impl RateLimiter {
    fn new(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
            window: Arc::new(Mutex::new(Window {
                started: Instant::now(),
                admitted: 0,
            })),
        }
    }

    fn allow(&self) -> bool {
        let mut guard = self.window.lock().expect("rate limiter mutex poisoned");
        let now = Instant::now();
        if now.duration_since(guard.started) >= Duration::from_secs(1) {
            guard.started = now;
            guard.admitted = 0;
        }
        if guard.admitted < self.limit {
            guard.admitted += 1;
            true
        } else {
            false
        }
    }
}

pub async fn rps_middleware(
    State(state): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !state.allow() {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": "Too many requests" })),
        )
            .into_response();
    }
    next.run(req).await
}

pub fn new_rps_state(limit: u32) -> RateLimiter {
    RateLimiter::new(limit)
}

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Required fields arrive as `Option` so their absence can be reported as a
/// 400 rather than a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResultRequest {
    pub username: Option<String>,
    pub score: Option<i32>,
    pub total: Option<i32>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizResult {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub phone: String,
    pub score: i32,
    pub total: i32,
    #[serde(rename = "date")]
    pub submitted_at: DateTime<Utc>,
}

use crate::error::Result;
use crate::models::quiz_result::QuizResult;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub const PHONE_NOT_PROVIDED: &str = "Not Provided";

#[derive(Clone)]
pub struct ResultService {
    pool: PgPool,
}

impl ResultService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Results are append-only; nothing ever updates or deletes a row.
    pub async fn create(
        &self,
        username: &str,
        name: Option<&str>,
        phone: Option<&str>,
        score: i32,
        total: i32,
        date: Option<DateTime<Utc>>,
    ) -> Result<QuizResult> {
        let result = sqlx::query_as::<_, QuizResult>(
            r#"
            INSERT INTO quiz_results (username, name, phone, score, total, submitted_at)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
            RETURNING id, username, name, phone, score, total, submitted_at
            "#,
        )
        .bind(username)
        .bind(name)
        .bind(phone.unwrap_or(PHONE_NOT_PROVIDED))
        .bind(score)
        .bind(total)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;
        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<QuizResult>> {
        let results = sqlx::query_as::<_, QuizResult>(
            "SELECT id, username, name, phone, score, total, submitted_at \
             FROM quiz_results ORDER BY submitted_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(results)
    }
}

use crate::error::{Error, Result};
use crate::models::admin::Admin;
use crate::utils::crypto::{hash_password, verify_password};
use sqlx::PgPool;

pub const ADMIN_USERNAME: &str = "admin";

#[derive(Clone)]
pub struct AdminService {
    pool: PgPool,
}

impl AdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the singleton admin record if missing. Safe to call on every
    /// startup; a concurrent duplicate insert is absorbed by the singleton
    /// unique constraint.
    pub async fn ensure_default_admin(&self, default_password: &str) -> Result<()> {
        let existing = sqlx::query_scalar::<_, uuid::Uuid>("SELECT id FROM admins LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        let password_hash = hash_password(default_password)
            .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))?;
        sqlx::query(
            r#"
            INSERT INTO admins (username, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (singleton) DO NOTHING
            "#,
        )
        .bind(ADMIN_USERNAME)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;

        tracing::info!("Created default admin account");
        Ok(())
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Admin> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, username, password_hash, created_at, updated_at FROM admins WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::Unauthorized("Invalid credentials".to_string()))?;

        let ok = verify_password(password, &admin.password_hash)
            .map_err(|e| Error::Internal(format!("Password verification failed: {}", e)))?;
        if !ok {
            return Err(Error::Unauthorized("Invalid credentials".to_string()));
        }
        Ok(admin)
    }

    /// Replaces the singleton admin's password hash.
    pub async fn reset_password(&self, new_password: &str) -> Result<()> {
        let password_hash = hash_password(new_password)
            .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))?;
        let result = sqlx::query(
            "UPDATE admins SET password_hash = $1, updated_at = NOW() WHERE singleton",
        )
        .bind(password_hash)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::Internal("Admin account is missing".to_string()));
        }
        Ok(())
    }
}

use crate::error::{Error, Result};
use crate::models::officer::Officer;
use crate::utils::crypto::{hash_password, verify_password};
use sqlx::PgPool;

#[derive(Clone)]
pub struct OfficerService {
    pool: PgPool,
}

impl OfficerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Officer>> {
        let officer = sqlx::query_as::<_, Officer>(
            r#"
            SELECT id, name, address, mobile, username, password_hash,
                   subscribed, transaction_id, subscription_date, created_at
            FROM officers
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(officer)
    }

    pub async fn create(
        &self,
        name: &str,
        address: &str,
        mobile: &str,
        username: &str,
        password: &str,
    ) -> Result<Officer> {
        let taken = sqlx::query_scalar::<_, uuid::Uuid>(
            "SELECT id FROM officers WHERE username = $1 OR mobile = $2",
        )
        .bind(username)
        .bind(mobile)
        .fetch_optional(&self.pool)
        .await?;
        if taken.is_some() {
            return Err(Error::Conflict(
                "Username or mobile number already registered".to_string(),
            ));
        }

        let password_hash = hash_password(password)
            .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))?;

        // The unique indexes are the backstop against a concurrent signup
        // winning the race between the check above and this insert.
        let officer = sqlx::query_as::<_, Officer>(
            r#"
            INSERT INTO officers (name, address, mobile, username, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, address, mobile, username, password_hash,
                      subscribed, transaction_id, subscription_date, created_at
            "#,
        )
        .bind(name)
        .bind(address)
        .bind(mobile)
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match Error::from(e) {
            Error::Conflict(_) => {
                Error::Conflict("Username or mobile number already registered".to_string())
            }
            other => other,
        })?;

        Ok(officer)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Officer> {
        let officer = self
            .find_by_username(username)
            .await?
            .ok_or_else(|| Error::Unauthorized("Invalid credentials".to_string()))?;

        let ok = verify_password(password, &officer.password_hash)
            .map_err(|e| Error::Internal(format!("Password verification failed: {}", e)))?;
        if !ok {
            return Err(Error::Unauthorized("Invalid credentials".to_string()));
        }
        Ok(officer)
    }

    /// Records a payment transaction ID against the officer. Resets
    /// `subscribed` to false so the admin must re-verify the new payment
    /// before the subscription becomes active again.
    pub async fn submit_transaction(
        &self,
        username: &str,
        transaction_id: &str,
    ) -> Result<Officer> {
        let updated = sqlx::query_as::<_, Officer>(
            r#"
            UPDATE officers
            SET transaction_id = $2, subscription_date = NOW(), subscribed = FALSE
            WHERE username = $1
            RETURNING id, name, address, mobile, username, password_hash,
                      subscribed, transaction_id, subscription_date, created_at
            "#,
        )
        .bind(username)
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match Error::from(e) {
            Error::Conflict(_) => {
                Error::Conflict("Transaction ID already used by another officer".to_string())
            }
            other => other,
        })?;

        updated.ok_or_else(|| Error::NotFound("Officer not found".to_string()))
    }

    /// Flips `subscribed` for the officer holding this transaction ID. The
    /// conditional update is the atomicity guarantee: a second activation
    /// with the same ID matches zero rows.
    pub async fn activate_by_transaction(&self, transaction_id: &str) -> Result<Officer> {
        let activated = sqlx::query_as::<_, Officer>(
            r#"
            UPDATE officers
            SET subscribed = TRUE, subscription_date = NOW()
            WHERE transaction_id = $1 AND subscribed = FALSE
            RETURNING id, name, address, mobile, username, password_hash,
                      subscribed, transaction_id, subscription_date, created_at
            "#,
        )
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(officer) = activated {
            return Ok(officer);
        }

        let holder = sqlx::query_scalar::<_, uuid::Uuid>(
            "SELECT id FROM officers WHERE transaction_id = $1",
        )
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await?;
        match holder {
            Some(_) => Err(Error::BadRequest("Subscription already active".to_string())),
            None => Err(Error::NotFound("Transaction ID not found".to_string())),
        }
    }

    pub async fn reset_password(
        &self,
        username: &str,
        mobile: &str,
        new_password: &str,
    ) -> Result<()> {
        let password_hash = hash_password(new_password)
            .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))?;
        let result = sqlx::query(
            "UPDATE officers SET password_hash = $3 WHERE username = $1 AND mobile = $2",
        )
        .bind(username)
        .bind(mobile)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(
                "No officer matches that username and mobile".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<Officer>> {
        let officers = sqlx::query_as::<_, Officer>(
            r#"
            SELECT id, name, address, mobile, username, password_hash,
                   subscribed, transaction_id, subscription_date, created_at
            FROM officers
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(officers)
    }
}

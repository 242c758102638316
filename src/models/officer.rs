use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Officer {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub mobile: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub subscribed: bool,
    pub transaction_id: Option<String>,
    pub subscription_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Wire shape for officer records; the password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerPublic {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub mobile: String,
    pub username: String,
    pub subscribed: bool,
    #[serde(rename = "transactionId")]
    pub transaction_id: Option<String>,
    #[serde(rename = "subscriptionDate")]
    pub subscription_date: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Officer> for OfficerPublic {
    fn from(o: Officer) -> Self {
        Self {
            id: o.id,
            name: o.name,
            address: o.address,
            mobile: o.mobile,
            username: o.username,
            subscribed: o.subscribed,
            transaction_id: o.transaction_id,
            subscription_date: o.subscription_date,
            created_at: o.created_at,
        }
    }
}

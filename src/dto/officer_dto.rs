use crate::models::officer::OfficerPublic;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "mobile is required"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub officer: OfficerPublic,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OfficerLoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfficerLoginResponse {
    pub message: String,
    pub officer: OfficerPublic,
    pub subscribed: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitTransactionRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[serde(rename = "transactionId")]
    #[validate(length(min = 1, message = "transactionId is required"))]
    pub transaction_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitTransactionResponse {
    pub message: String,
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OfficerStatusRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfficerStatusResponse {
    pub activated: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OfficerResetPasswordRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "mobile is required"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::admin_dto::{
    ActivateSubscriptionRequest, AdminLoginRequest, AdminResetPasswordRequest, MessageResponse,
};
use crate::error::{Error, Result};
use crate::models::officer::OfficerPublic;
use crate::utils::validation::is_valid_transaction_id;
use crate::AppState;

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<AdminLoginRequest>,
) -> Result<Json<MessageResponse>> {
    payload.validate()?;
    state
        .admin_service
        .login(&payload.username, &payload.password)
        .await?;
    Ok(Json(MessageResponse {
        message: "Admin login successful".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn list_officers(State(state): State<AppState>) -> Result<Json<Vec<OfficerPublic>>> {
    let officers = state.officer_service.list_all().await?;
    Ok(Json(officers.into_iter().map(OfficerPublic::from).collect()))
}

#[axum::debug_handler]
pub async fn activate_subscription(
    State(state): State<AppState>,
    Json(payload): Json<ActivateSubscriptionRequest>,
) -> Result<Json<MessageResponse>> {
    payload.validate()?;
    if !is_valid_transaction_id(&payload.transaction_id) {
        return Err(Error::BadRequest(
            "Transaction ID must be exactly 12 digits".to_string(),
        ));
    }

    let officer = state
        .officer_service
        .activate_by_transaction(&payload.transaction_id)
        .await?;
    tracing::info!(username = %officer.username, "subscription activated");
    Ok(Json(MessageResponse {
        message: "Subscription activated".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<AdminResetPasswordRequest>,
) -> Result<Json<MessageResponse>> {
    payload.validate()?;
    state.admin_service.reset_password(&payload.password).await?;
    Ok(Json(MessageResponse {
        message: "Admin password updated".to_string(),
    }))
}

use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::admin_dto::MessageResponse;
use crate::dto::officer_dto::{
    OfficerLoginRequest, OfficerLoginResponse, OfficerResetPasswordRequest, OfficerStatusRequest,
    OfficerStatusResponse, SignupRequest, SignupResponse, SubmitTransactionRequest,
    SubmitTransactionResponse,
};
use crate::error::{Error, Result};
use crate::utils::validation::{is_valid_mobile, is_valid_transaction_id};
use crate::AppState;

#[axum::debug_handler]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<SignupResponse>> {
    payload.validate()?;
    if !is_valid_mobile(&payload.mobile) {
        return Err(Error::BadRequest(
            "Mobile number must be exactly 10 digits".to_string(),
        ));
    }

    let officer = state
        .officer_service
        .create(
            &payload.name,
            &payload.address,
            &payload.mobile,
            &payload.username,
            &payload.password,
        )
        .await?;
    tracing::info!(username = %officer.username, "officer registered");
    Ok(Json(SignupResponse {
        message: "Signup successful".to_string(),
        officer: officer.into(),
    }))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<OfficerLoginRequest>,
) -> Result<Json<OfficerLoginResponse>> {
    payload.validate()?;
    let officer = state
        .officer_service
        .login(&payload.username, &payload.password)
        .await?;
    let subscribed = officer.subscribed;
    Ok(Json(OfficerLoginResponse {
        message: "Login successful".to_string(),
        officer: officer.into(),
        subscribed,
    }))
}

#[axum::debug_handler]
pub async fn submit_transaction(
    State(state): State<AppState>,
    Json(payload): Json<SubmitTransactionRequest>,
) -> Result<Json<SubmitTransactionResponse>> {
    payload.validate()?;
    if !is_valid_transaction_id(&payload.transaction_id) {
        return Err(Error::BadRequest(
            "Transaction ID must be exactly 12 digits".to_string(),
        ));
    }

    let officer = state
        .officer_service
        .submit_transaction(&payload.username, &payload.transaction_id)
        .await?;
    tracing::info!(username = %officer.username, "transaction submitted");
    Ok(Json(SubmitTransactionResponse {
        message: "Transaction recorded, awaiting activation".to_string(),
        transaction_id: payload.transaction_id,
    }))
}

#[axum::debug_handler]
pub async fn status(
    State(state): State<AppState>,
    Json(payload): Json<OfficerStatusRequest>,
) -> Result<Json<OfficerStatusResponse>> {
    payload.validate()?;
    let officer = state
        .officer_service
        .find_by_username(&payload.username)
        .await?
        .ok_or_else(|| Error::NotFound("Officer not found".to_string()))?;
    Ok(Json(OfficerStatusResponse {
        activated: officer.subscribed,
    }))
}

#[axum::debug_handler]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<OfficerResetPasswordRequest>,
) -> Result<Json<MessageResponse>> {
    payload.validate()?;
    state
        .officer_service
        .reset_password(&payload.username, &payload.mobile, &payload.password)
        .await?;
    Ok(Json(MessageResponse {
        message: "Password updated".to_string(),
    }))
}

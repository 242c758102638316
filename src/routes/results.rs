use axum::{extract::State, Json};

use crate::dto::admin_dto::MessageResponse;
use crate::dto::result_dto::SubmitResultRequest;
use crate::error::{Error, Result};
use crate::models::quiz_result::QuizResult;
use crate::AppState;

#[axum::debug_handler]
pub async fn submit_result(
    State(state): State<AppState>,
    Json(payload): Json<SubmitResultRequest>,
) -> Result<Json<MessageResponse>> {
    let username = payload
        .username
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| Error::BadRequest("username is required".to_string()))?;
    let score = payload
        .score
        .ok_or_else(|| Error::BadRequest("score is required".to_string()))?;
    let total = payload
        .total
        .ok_or_else(|| Error::BadRequest("total is required".to_string()))?;

    state
        .result_service
        .create(
            username,
            payload.name.as_deref(),
            payload.phone.as_deref(),
            score,
            total,
            payload.date,
        )
        .await?;
    Ok(Json(MessageResponse {
        message: "Result recorded".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn get_results(State(state): State<AppState>) -> Result<Json<Vec<QuizResult>>> {
    let results = state.result_service.list_all().await?;
    Ok(Json(results))
}

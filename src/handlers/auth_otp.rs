use axum::{extract::State, response::Json};

use crate::dtos::auth_dtos::{OTPRequest, OTPRequestResponse, OTPVerifyRequest, OTPVerifyResponse};
use crate::errors::Result;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

pub async fn request_otp(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<OTPRequest>,
) -> Result<Json<OTPRequestResponse>> {
    state.otp_service.request_otp(&req.phone_number).await?;

    Ok(Json(OTPRequestResponse {
        message: "OTP sent successfully".to_string(),
    }))
}

pub async fn verify_otp(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<OTPVerifyRequest>,
) -> Result<Json<OTPVerifyResponse>> {
    let token = state
        .otp_service
        .verify_otp(&req.phone_number, &req.otp)
        .await?;

    Ok(Json(OTPVerifyResponse {
        message: "Phone number verified successfully".to_string(),
        token,
    }))
}

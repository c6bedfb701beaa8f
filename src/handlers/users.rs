use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::dtos::user_dtos::{RegistrationResponse, UserRegistrationRequest};
use crate::errors::{AppError, Result};
use crate::extractors::{AuthSession, ValidatedJson};
use crate::models::identity::Identity;
use crate::models::user::UserResponse;
use crate::services::user_store::UserDirectory;
use crate::state::AppState;

/// Creates the user for the phone number in the caller's token and returns a fresh
/// token carrying the real user id.
pub async fn register(
    State(state): State<AppState>,
    session: AuthSession,
    ValidatedJson(req): ValidatedJson<UserRegistrationRequest>,
) -> Result<(StatusCode, Json<RegistrationResponse>)> {
    let user = state.users.create(&req, &session.phone).await?;
    let user_response = UserResponse::from(&user);
    let token = state.token_issuer.issue(&Identity::Registered(user))?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse {
            user: user_response,
            token,
        }),
    ))
}

pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> Result<Json<UserResponse>> {
    let user = state
        .users
        .find_by_phone(&phone)
        .await
        .ok_or(AppError::UserNotFound)?;

    Ok(Json(UserResponse::from(&user)))
}

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::errors::AppError;
use crate::state::AppState;

/// Rejects requests without a valid bearer token and hands the claims to the handler.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?;
    let claims = state.token_issuer.validate(token)?;

    tracing::debug!(user_id = %claims.user_id, "Authenticated request");
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AppError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AppError::MalformedAuthHeader)?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme == "Bearer" && !token.is_empty() && !token.contains(' ') => {
            Ok(token)
        }
        _ => Err(AppError::MalformedAuthHeader),
    }
}

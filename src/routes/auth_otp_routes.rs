use axum::{routing::post, Router};

use crate::{handlers::auth_otp, state::AppState};

pub fn auth_otp_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/otp/request", post(auth_otp::request_otp))
        .route("/auth/otp/verify", post(auth_otp::verify_otp))
}

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers::users, state::AppState};

// Bearer token required; layered in `build_router`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(users::register))
        .route("/users/:phone", get(users::get_user_profile))
}

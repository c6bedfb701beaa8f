use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers::games, state::AppState};

// Bearer token required; layered in `build_router`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games/create", post(games::create_game))
        .route("/games/list", get(games::get_games))
        .route("/games/join", post(games::join_game))
        .route("/games/:id", get(games::get_game_by_id))
}

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/public/games", get(games::public_games))
}

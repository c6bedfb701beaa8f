use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::dtos::game_dtos::{GameCreationRequest, GameListResponse, JoinGameRequest, JoinGameResponse};
use crate::errors::{AppError, Result};
use crate::extractors::{AuthSession, ValidatedJson};
use crate::models::game::GameResponse;
use crate::services::clock::Clock;
use crate::state::AppState;

pub async fn create_game(
    State(state): State<AppState>,
    session: AuthSession,
    ValidatedJson(req): ValidatedJson<GameCreationRequest>,
) -> Result<(StatusCode, Json<GameResponse>)> {
    let game = state
        .games
        .create(&req, &session.user_id, state.clock.now())
        .await?;

    Ok((StatusCode::CREATED, Json(GameResponse::from(&game))))
}

pub async fn get_games(State(state): State<AppState>) -> Result<Json<GameListResponse>> {
    let games = state.games.list().await;
    Ok(Json(GameListResponse {
        games: games.iter().map(GameResponse::from).collect(),
    }))
}

pub async fn get_game_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameResponse>> {
    let game = state.games.get(&id).await.ok_or(AppError::GameNotFound)?;
    Ok(Json(GameResponse::from(&game)))
}

pub async fn join_game(
    State(state): State<AppState>,
    session: AuthSession,
    ValidatedJson(req): ValidatedJson<JoinGameRequest>,
) -> Result<Json<JoinGameResponse>> {
    let game = state.games.join(&req.game_id, state.clock.now()).await?;
    tracing::info!(game_id = %game.id, user_id = %session.user_id, "Player joined game");

    Ok(Json(JoinGameResponse {
        message: "Successfully joined the game".to_string(),
        game: GameResponse::from(&game),
    }))
}

// Same listing, no token required.
pub async fn public_games(State(state): State<AppState>) -> Result<Json<GameListResponse>> {
    get_games(State(state)).await
}

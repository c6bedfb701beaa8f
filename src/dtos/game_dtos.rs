use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::game::GameResponse;

// Creator comes from the session token.
#[derive(Debug, Deserialize, Validate)]
pub struct GameCreationRequest {
    #[validate(length(min = 1, message = "Event name is required"))]
    pub event_name: String,

    pub start_time: String, // RFC 3339
    pub end_time: String,   // RFC 3339

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[validate(range(min = 0.0, message = "Cost per person cannot be negative"))]
    pub cost_per_person: f64,

    #[validate(range(min = 1, message = "At least one player is required"))]
    pub player_requirement: u32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct JoinGameRequest {
    #[validate(length(min = 1, message = "Game ID is required"))]
    pub game_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameListResponse {
    pub games: Vec<GameResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JoinGameResponse {
    pub message: String,
    pub game: GameResponse,
}

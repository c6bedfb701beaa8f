use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub event_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub cost_per_person: f64,
    pub player_requirement: u32,
    pub current_participants: u32,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    pub fn is_full(&self) -> bool {
        self.current_participants >= self.player_requirement
    }

    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.start_time < now
    }
}

// Response shape (no updated_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    pub id: String,
    pub event_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub cost_per_person: f64,
    pub player_requirement: u32,
    pub current_participants: u32,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id.clone(),
            event_name: game.event_name.clone(),
            start_time: game.start_time,
            end_time: game.end_time,
            location: game.location.clone(),
            cost_per_person: game.cost_per_person,
            player_requirement: game.player_requirement,
            current_participants: game.current_participants,
            creator_id: game.creator_id.clone(),
            created_at: game.created_at,
        }
    }
}

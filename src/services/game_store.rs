use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dtos::game_dtos::GameCreationRequest;
use crate::errors::{AppError, Result};
use crate::models::game::Game;

#[derive(Default)]
pub struct GameStore {
    games: RwLock<HashMap<String, Game>>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(
        &self,
        req: &GameCreationRequest,
        creator_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Game> {
        let start_time = parse_time(&req.start_time, "start time")?;
        let end_time = parse_time(&req.end_time, "end time")?;

        if start_time < now {
            return Err(AppError::bad_request("Start time cannot be in the past"));
        }
        if end_time < start_time {
            return Err(AppError::bad_request("End time must be after start time"));
        }

        let game = Game {
            id: Uuid::new_v4().to_string(),
            event_name: req.event_name.clone(),
            start_time,
            end_time,
            location: req.location.clone(),
            cost_per_person: req.cost_per_person,
            player_requirement: req.player_requirement,
            current_participants: 0,
            creator_id: creator_id.to_string(),
            created_at: now,
            updated_at: now,
        };

        self.games.write().await.insert(game.id.clone(), game.clone());
        tracing::info!(game_id = %game.id, creator_id = %creator_id, "Game created");
        Ok(game)
    }

    pub async fn get(&self, id: &str) -> Option<Game> {
        self.games.read().await.get(id).cloned()
    }

    /// All games, soonest start first.
    pub async fn list(&self) -> Vec<Game> {
        let mut games: Vec<Game> = self.games.read().await.values().cloned().collect();
        games.sort_by(|a, b| a.start_time.cmp(&b.start_time).then_with(|| a.id.cmp(&b.id)));
        games
    }

    /// Capacity check and increment happen under one write lock.
    pub async fn join(&self, id: &str, now: DateTime<Utc>) -> Result<Game> {
        let mut games = self.games.write().await;
        let game = games.get_mut(id).ok_or(AppError::GameNotFound)?;

        if game.is_full() {
            return Err(AppError::GameFull);
        }
        if game.has_started(now) {
            return Err(AppError::GameStarted);
        }

        game.current_participants += 1;
        game.updated_at = now;
        Ok(game.clone())
    }
}

fn parse_time(raw: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| {
            AppError::bad_request(format!(
                "Invalid {} format. Use YYYY-MM-DDThh:mm:ssZ",
                field
            ))
        })
}

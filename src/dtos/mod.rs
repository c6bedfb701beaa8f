pub mod auth_dtos;
pub mod game_dtos;
pub mod user_dtos;

pub mod clock;
pub mod game_store;
pub mod otp_service;
pub mod otp_store;
pub mod sms_service;
pub mod token_service;
pub mod user_store;

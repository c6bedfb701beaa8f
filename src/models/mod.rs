pub mod game;
pub mod identity;
pub mod otp;
pub mod user;

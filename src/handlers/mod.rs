pub mod auth_otp;
pub mod games;
pub mod health;
pub mod users;

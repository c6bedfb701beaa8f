// config.rs
use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}

/// Twilio credentials. Any of them may be empty; the SMS service then runs degraded.
#[derive(Debug, Clone, Default)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

impl TwilioConfig {
    pub fn is_complete(&self) -> bool {
        self.missing_vars().is_empty()
    }

    pub fn missing_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.account_sid.is_empty() {
            missing.push("TWILIO_ACCOUNT_SID");
        }
        if self.auth_token.is_empty() {
            missing.push("TWILIO_AUTH_TOKEN");
        }
        if self.from_number.is_empty() {
            missing.push("TWILIO_FROM_NUMBER");
        }
        missing
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub twilio: TwilioConfig,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;

        let twilio = TwilioConfig {
            account_sid: lookup("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            auth_token: lookup("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            from_number: lookup("TWILIO_FROM_NUMBER").unwrap_or_default(),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => 8080,
        };

        Ok(AppConfig {
            jwt_secret,
            twilio,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn warn_on_missing_values(&self) {
        let missing = self.twilio.missing_vars();
        if !missing.is_empty() {
            tracing::warn!(
                missing = ?missing,
                "One or more Twilio credentials are missing; OTP delivery will fail until they are set"
            );
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

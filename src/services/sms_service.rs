use async_trait::async_trait;
use reqwest::Client;

use crate::config::TwilioConfig;
use crate::errors::{AppError, Result};

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Phone number for log lines: everything but the last four digits is replaced with `*`.
pub fn mask_phone(phone: &str) -> String {
    let visible = phone.len().saturating_sub(4);
    phone
        .char_indices()
        .map(|(i, c)| if i < visible && c != '+' { '*' } else { c })
        .collect()
}

/// Outbound SMS delivery.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<()>;

    /// False when the gateway is known to be unable to deliver anything.
    fn is_configured(&self) -> bool {
        true
    }
}

/// Twilio Messages API client.
#[derive(Clone)]
pub struct SMSService {
    account_sid: String,
    auth_token: String,
    from: String,
    client: Client,
}

impl SMSService {
    pub fn new(config: &TwilioConfig) -> Self {
        Self {
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from: config.from_number.clone(),
            client: Client::new(),
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/Accounts/{}/Messages.json", TWILIO_API_BASE, self.account_sid)
    }
}

#[async_trait]
impl SmsGateway for SMSService {
    async fn send(&self, to: &str, body: &str) -> Result<()> {
        if !self.is_configured() {
            return Err(AppError::delivery("Twilio credentials are not configured"));
        }

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", self.from.as_str()), ("Body", body)])
            .send()
            .await
            .map_err(|e| AppError::delivery(format!("SMS API error: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(to = %mask_phone(to), "SMS accepted by Twilio");
            Ok(())
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(AppError::delivery(format!(
                "SMS sending failed with status {}: {}",
                status, error_body
            )))
        }
    }

    fn is_configured(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty() && !self.from.is_empty()
    }
}

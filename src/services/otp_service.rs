use chrono::Duration;
use rand::{rngs::OsRng, RngCore};
use std::sync::Arc;

use crate::errors::{AppError, Result};
use crate::models::identity::Identity;
use crate::services::clock::Clock;
use crate::services::otp_store::OTPStore;
use crate::services::sms_service::{mask_phone, SmsGateway};
use crate::services::token_service::TokenIssuer;
use crate::services::user_store::UserDirectory;

pub const OTP_TTL_MINUTES: i64 = 5;

const CODE_SPACE: u32 = 1_000_000;
// Largest multiple of CODE_SPACE that fits in a u32.
const REJECTION_LIMIT: u32 = 4_294_000_000;

/// Phone number verification: issues codes, checks them and exchanges them for
/// session tokens.
#[derive(Clone)]
pub struct OTPService {
    store: Arc<dyn OTPStore>,
    sms: Arc<dyn SmsGateway>,
    users: Arc<dyn UserDirectory>,
    tokens: Arc<TokenIssuer>,
    clock: Arc<dyn Clock>,
}

impl OTPService {
    pub fn new(
        store: Arc<dyn OTPStore>,
        sms: Arc<dyn SmsGateway>,
        users: Arc<dyn UserDirectory>,
        tokens: Arc<TokenIssuer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            sms,
            users,
            tokens,
            clock,
        }
    }

    // Generate 6-digit OTP, uniform over 000000..=999999
    pub fn generate_otp() -> String {
        loop {
            if let Some(code) = code_from_draw(OsRng.next_u32()) {
                return format!("{:06}", code);
            }
        }
    }

    pub fn otp_message(code: &str) -> String {
        format!("Hello user, the verification code is: {}", code)
    }

    pub fn sms_configured(&self) -> bool {
        self.sms.is_configured()
    }

    /// Stores a fresh code for `phone`, replacing any earlier one, then sends it.
    ///
    /// A failed send leaves the stored code in place.
    pub async fn request_otp(&self, phone: &str) -> Result<()> {
        let masked = mask_phone(phone);
        let code = Self::generate_otp();
        self.store.put(phone, &code).await;

        if let Err(e) = self.sms.send(phone, &Self::otp_message(&code)).await {
            tracing::error!(phone = %masked, error = %e, "Failed to deliver OTP");
            return Err(e);
        }

        tracing::info!(phone = %masked, "OTP issued");
        Ok(())
    }

    /// Checks `code` against the live record for `phone` and returns a session token.
    ///
    /// Expiry is checked before the code itself. Expired and mismatched attempts leave
    /// the record untouched; a successful one removes it before the token is issued.
    pub async fn verify_otp(&self, phone: &str, code: &str) -> Result<String> {
        let record = self.store.get(phone).await.ok_or(AppError::OTPNotFound)?;

        if record.is_expired(self.clock.now(), Duration::minutes(OTP_TTL_MINUTES)) {
            tracing::debug!(phone = %mask_phone(phone), "OTP expired");
            return Err(AppError::OTPExpired);
        }

        if record.code != code {
            tracing::debug!(phone = %mask_phone(phone), "OTP mismatch");
            return Err(AppError::InvalidOTP);
        }

        // Lost a race with another verifier holding the same code.
        if !self.store.consume(phone, &record).await {
            return Err(AppError::OTPNotFound);
        }

        let identity = match self.users.find_by_phone(phone).await {
            Some(user) => Identity::Registered(user),
            None => Identity::provisional(phone),
        };

        let token = self.tokens.issue(&identity)?;
        tracing::info!(
            phone = %mask_phone(phone),
            provisional = identity.is_provisional(),
            "Phone number verified"
        );
        Ok(token)
    }
}

fn code_from_draw(draw: u32) -> Option<u32> {
    if draw >= REJECTION_LIMIT {
        None
    } else {
        Some(draw % CODE_SPACE)
    }
}

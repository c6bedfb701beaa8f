use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::clock::{Clock, SystemClock};
use crate::services::game_store::GameStore;
use crate::services::otp_service::OTPService;
use crate::services::otp_store::{InMemoryOTPStore, OTPStore};
use crate::services::sms_service::{SMSService, SmsGateway};
use crate::services::token_service::TokenIssuer;
use crate::services::user_store::InMemoryUserStore;

#[derive(Clone)]
pub struct AppState {
    pub otp_service: Arc<OTPService>,
    pub token_issuer: Arc<TokenIssuer>,
    pub users: Arc<InMemoryUserStore>,
    pub games: Arc<GameStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Wires the services around the given OTP store, gateway and clock.
    pub fn new(
        jwt_secret: &str,
        otp_store: Arc<dyn OTPStore>,
        sms: Arc<dyn SmsGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let token_issuer = Arc::new(TokenIssuer::new(jwt_secret));
        let users = Arc::new(InMemoryUserStore::new());

        let otp_service = Arc::new(OTPService::new(
            otp_store,
            sms,
            users.clone(),
            token_issuer.clone(),
            clock.clone(),
        ));

        AppState {
            otp_service,
            token_issuer,
            users,
            games: Arc::new(GameStore::new()),
            clock,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let otp_store = Arc::new(InMemoryOTPStore::new(clock.clone()));
        let sms = Arc::new(SMSService::new(&config.twilio));
        Self::new(&config.jwt_secret, otp_store, sms, clock)
    }
}

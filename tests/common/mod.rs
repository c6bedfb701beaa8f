#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use rondo_api::errors::{AppError, Result};
use rondo_api::routes::build_router;
use rondo_api::services::clock::ManualClock;
use rondo_api::services::otp_store::InMemoryOTPStore;
use rondo_api::services::sms_service::SmsGateway;
use rondo_api::state::AppState;

pub const JWT_SECRET: &str = "integration-test-secret";

/// Keeps every message instead of sending it.
#[derive(Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<(String, String)>>,
    failing: Mutex<bool>,
}

impl RecordingGateway {
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// The code from the most recent message sent to `phone`.
    pub fn last_code_for(&self, phone: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == phone)
            .and_then(|(_, body)| body.rsplit(' ').next().map(str::to_string))
    }
}

#[async_trait]
impl SmsGateway for RecordingGateway {
    async fn send(&self, to: &str, body: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        if *self.failing.lock().unwrap() {
            Err(AppError::delivery("recording gateway set to fail"))
        } else {
            Ok(())
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub gateway: Arc<RecordingGateway>,
    pub clock: Arc<ManualClock>,
    pub otp_store: Arc<InMemoryOTPStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let gateway = Arc::new(RecordingGateway::default());
        let clock = Arc::new(ManualClock::default());
        let otp_store = Arc::new(InMemoryOTPStore::new(clock.clone()));
        let state = AppState::new(JWT_SECRET, otp_store.clone(), gateway.clone(), clock.clone());
        TestApp {
            router: build_router(state.clone()),
            state,
            gateway,
            clock,
            otp_store,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn post_json(&self, uri: &str, body: Value, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// Runs request + verify and returns the session token.
    pub async fn login(&self, phone: &str) -> String {
        let (status, _) = self
            .post_json(
                "/auth/otp/request",
                serde_json::json!({ "phone_number": phone }),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let code = self.gateway.last_code_for(phone).unwrap();
        let (status, body) = self
            .post_json(
                "/auth/otp/verify",
                serde_json::json!({ "phone_number": phone, "otp": code }),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }
}

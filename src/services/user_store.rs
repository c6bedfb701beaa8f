use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dtos::user_dtos::UserRegistrationRequest;
use crate::errors::{AppError, Result};
use crate::models::user::User;

/// Read-only user lookup used by the OTP flow.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_phone(&self, phone: &str) -> Option<User>;
}

/// Users keyed by phone number.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, req: &UserRegistrationRequest, phone: &str) -> Result<User> {
        let dob = NaiveDate::parse_from_str(&req.dob, "%Y-%m-%d")
            .map_err(|_| AppError::invalid_data("Invalid date format. Use YYYY-MM-DD"))?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            first_name: req.first_name.trim().to_string(),
            last_name: req.last_name.trim().to_string(),
            dob,
            phone: phone.to_string(),
            created_at: now,
            updated_at: now,
        };

        let mut users = self.users.write().await;
        if users.contains_key(phone) {
            return Err(AppError::UserAlreadyExists);
        }
        users.insert(phone.to_string(), user.clone());

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserStore {
    async fn find_by_phone(&self, phone: &str) -> Option<User> {
        self.users.read().await.get(phone).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(dob: &str) -> UserRegistrationRequest {
        UserRegistrationRequest {
            first_name: "Ada".to_string(),
            last_name: "Okafor".to_string(),
            dob: dob.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_find() {
        let store = InMemoryUserStore::new();
        let user = store.create(&request("1994-03-14"), "+15551234567").await.unwrap();

        let found = store.find_by_phone("+15551234567").await.unwrap();
        assert_eq!(found, user);
        assert!(Uuid::parse_str(&found.id).is_ok());
        assert!(store.find_by_phone("+15550000000").await.is_none());
    }

    #[tokio::test]
    async fn duplicate_phone_is_rejected() {
        let store = InMemoryUserStore::new();
        store.create(&request("1994-03-14"), "+15551234567").await.unwrap();

        let err = store.create(&request("1990-01-01"), "+15551234567").await.unwrap_err();
        assert!(matches!(err, AppError::UserAlreadyExists));
    }

    #[tokio::test]
    async fn bad_date_is_a_validation_error() {
        let store = InMemoryUserStore::new();
        let err = store.create(&request("14/03/1994"), "+15551234567").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.find_by_phone("+15551234567").await.is_none());
    }
}

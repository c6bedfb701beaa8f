use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::otp::OTPRecord;
use crate::services::clock::Clock;

/// Volatile phone number -> OTP mapping. At most one live record per phone number.
#[async_trait]
pub trait OTPStore: Send + Sync {
    /// Overwrite any record for `phone` with `code`, stamped with the current time.
    async fn put(&self, phone: &str, code: &str);

    /// Read-only lookup. Does not check expiry.
    async fn get(&self, phone: &str) -> Option<OTPRecord>;

    /// Remove the record if present.
    async fn delete(&self, phone: &str);

    /// Remove the record only if it is still exactly `expected`. Returns whether it did.
    async fn consume(&self, phone: &str, expected: &OTPRecord) -> bool;
}

pub struct InMemoryOTPStore {
    records: RwLock<HashMap<String, OTPRecord>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryOTPStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            clock,
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl OTPStore for InMemoryOTPStore {
    async fn put(&self, phone: &str, code: &str) {
        let record = OTPRecord::new(code, self.clock.now());
        self.records.write().await.insert(phone.to_string(), record);
    }

    async fn get(&self, phone: &str) -> Option<OTPRecord> {
        self.records.read().await.get(phone).cloned()
    }

    async fn delete(&self, phone: &str) {
        self.records.write().await.remove(phone);
    }

    async fn consume(&self, phone: &str, expected: &OTPRecord) -> bool {
        let mut records = self.records.write().await;
        match records.get(phone) {
            Some(current) if current == expected => {
                records.remove(phone);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::ManualClock;
    use chrono::Duration;

    fn store() -> (Arc<ManualClock>, InMemoryOTPStore) {
        let clock = Arc::new(ManualClock::default());
        let store = InMemoryOTPStore::new(clock.clone());
        (clock, store)
    }

    #[tokio::test]
    async fn put_overwrites_and_restamps() {
        let (clock, store) = store();
        store.put("+15551234567", "111111").await;
        let first = store.get("+15551234567").await.unwrap();

        clock.advance(Duration::seconds(30));
        store.put("+15551234567", "222222").await;
        let second = store.get("+15551234567").await.unwrap();

        assert_eq!(second.code, "222222");
        assert_eq!(second.issued_at - first.issued_at, Duration::seconds(30));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn delete_is_a_noop_for_unknown_phone() {
        let (_, store) = store();
        store.delete("+15550000000").await;
        assert!(store.get("+15550000000").await.is_none());

        store.put("+15550000000", "123456").await;
        store.delete("+15550000000").await;
        assert!(store.get("+15550000000").await.is_none());
    }

    #[tokio::test]
    async fn consume_only_removes_the_expected_record() {
        let (clock, store) = store();
        store.put("+15551234567", "111111").await;
        let stale = store.get("+15551234567").await.unwrap();

        clock.advance(Duration::seconds(1));
        store.put("+15551234567", "222222").await;

        assert!(!store.consume("+15551234567", &stale).await);
        let live = store.get("+15551234567").await.unwrap();
        assert!(store.consume("+15551234567", &live).await);
        assert!(!store.consume("+15551234567", &live).await);
        assert!(store.get("+15551234567").await.is_none());
    }
}

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OTPRecord {
    pub code: String,           // 6 ASCII digits, zero-padded
    pub issued_at: DateTime<Utc>,
}

impl OTPRecord {
    pub fn new(code: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            issued_at,
        }
    }

    /// A record is still live at exactly `issued_at + ttl`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.issued_at) > ttl
    }
}

use crate::models::user::User;

pub const PROVISIONAL_ID_PREFIX: &str = "temp_";

/// Who a session token is issued for.
///
/// `Provisional` covers a verified phone number that has no user record yet; it lets
/// the holder call the registration endpoint. It is never stored.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    Registered(User),
    Provisional { phone: String },
}

impl Identity {
    pub fn provisional(phone: impl Into<String>) -> Self {
        Identity::Provisional {
            phone: phone.into(),
        }
    }

    pub fn user_id(&self) -> String {
        match self {
            Identity::Registered(user) => user.id.clone(),
            Identity::Provisional { phone } => format!("{}{}", PROVISIONAL_ID_PREFIX, phone),
        }
    }

    pub fn phone(&self) -> &str {
        match self {
            Identity::Registered(user) => &user.phone,
            Identity::Provisional { phone } => phone,
        }
    }

    pub fn first_name(&self) -> &str {
        match self {
            Identity::Registered(user) => &user.first_name,
            Identity::Provisional { .. } => "",
        }
    }

    pub fn last_name(&self) -> &str {
        match self {
            Identity::Registered(user) => &user.last_name,
            Identity::Provisional { .. } => "",
        }
    }

    pub fn is_provisional(&self) -> bool {
        matches!(self, Identity::Provisional { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provisional_id_is_derived_from_phone() {
        let a = Identity::provisional("+15551234567");
        let b = Identity::provisional("+15551234567");

        assert_eq!(a.user_id(), "temp_+15551234567");
        assert_eq!(a.user_id(), b.user_id());
        assert_eq!(a.phone(), "+15551234567");
        assert_eq!(a.first_name(), "");
        assert_eq!(a.last_name(), "");
        assert!(a.is_provisional());
    }
}

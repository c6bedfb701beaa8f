use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::user::UserResponse;

// Phone number comes from the session token, not the body.
#[derive(Debug, Deserialize, Validate)]
pub struct UserRegistrationRequest {
    #[validate(custom(function = "validate_name"))]
    pub first_name: String,

    #[validate(custom(function = "validate_name"))]
    pub last_name: String,

    pub dob: String, // YYYY-MM-DD
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub user: UserResponse,
    pub token: String,
}

/// 1 to 100 characters once surrounding whitespace is trimmed.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.trim().chars().count();
    if (1..=100).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::new("name").with_message("Name must be 1-100 characters".into()))
    }
}

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate)]
pub struct OTPRequest {
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct OTPVerifyRequest {
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,

    #[validate(custom(function = "validate_otp_code"))]
    pub otp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OTPRequestResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OTPVerifyResponse {
    pub message: String,
    pub token: String,
}

/// Optional leading `+`, then 7 to 15 ASCII digits.
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let valid = (7..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("phone_number")
            .with_message("Phone number must be 7-15 digits with an optional leading +".into()))
    }
}

pub fn validate_otp_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("otp").with_message("OTP must be 6 digits".into()))
    }
}

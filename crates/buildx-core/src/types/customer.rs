//! Customer contact details collected at the review step.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;
use crate::result::AppResult;

/// Customer contact details attached to a submitted order.
///
/// Name, email, and phone are required; the submission gate rejects the
/// order if any is blank after trimming. Address is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CustomerInfo {
    /// Customer name. Required.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Contact email. Required, must be a valid address.
    #[validate(email(message = "a valid email address is required"))]
    pub email: String,
    /// Contact phone number. Required.
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    /// Shipping address. Optional.
    #[serde(default)]
    pub address: String,
}

impl CustomerInfo {
    /// Build customer info with all fields trimmed.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            phone: phone.into().trim().to_string(),
            address: address.into().trim().to_string(),
        }
    }

    /// Run the submission-gate validation.
    pub fn check(&self) -> AppResult<()> {
        self.validate().map_err(AppError::from)
    }
}

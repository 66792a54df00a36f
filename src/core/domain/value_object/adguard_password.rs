use crate::core::domain::{
    error::{AdGuardResult, ValidationError},
    value_object::base_value_object::ValueObject,
};
use async_trait::async_trait;

/// Represents a validated AdGuard Home password
///
/// The password is sent with every request as the password part of the
/// Basic authentication header. No strength policy is applied; the
/// credential must match what the server was provisioned with.
#[derive(Debug, Clone)]
pub struct AdGuardPassword {
    value: String,
}

impl AdGuardPassword {
    /// Creates a new AdGuardPassword instance with validation
    ///
    /// # Arguments
    ///
    /// * `password` - The password to validate and wrap
    ///
    /// # Returns
    ///
    /// * `Ok(AdGuardPassword)` if validation succeeds
    /// * `Err(AdGuardError)` if validation fails
    pub async fn new(password: String) -> AdGuardResult<Self> {
        <Self as ValueObject>::new(password).await
    }

    #[cfg(test)]
    pub(crate) fn new_unchecked(password: String) -> Self {
        Self { value: password }
    }

    /// Returns the password as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[async_trait]
impl ValueObject for AdGuardPassword {
    type Value = String;

    fn as_inner(&self) -> &Self::Value {
        &self.value
    }

    async fn validate(value: &Self::Value) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Field {
                field: "password".to_string(),
                message: "Password cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    fn create(value: Self::Value) -> Self {
        Self { value }
    }
}

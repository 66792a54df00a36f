use crate::core::domain::{
    error::{AdGuardResult, ValidationError},
    value_object::base_value_object::ValueObject,
};
use async_trait::async_trait;

/// Represents a validated AdGuard Home username
///
/// The username is sent with every request as the user part of the
/// Basic authentication header.
#[derive(Debug, Clone)]
pub struct AdGuardUsername {
    value: String,
}

impl AdGuardUsername {
    /// Creates a new AdGuardUsername instance with validation
    ///
    /// # Arguments
    ///
    /// * `username` - The username to validate and wrap
    ///
    /// # Returns
    ///
    /// * `Ok(AdGuardUsername)` if validation succeeds
    /// * `Err(AdGuardError)` if validation fails
    pub async fn new(username: String) -> AdGuardResult<Self> {
        <Self as ValueObject>::new(username).await
    }

    #[cfg(test)]
    pub(crate) fn new_unchecked(username: String) -> Self {
        Self { value: username }
    }

    /// Returns the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[async_trait]
impl ValueObject for AdGuardUsername {
    type Value = String;

    fn as_inner(&self) -> &Self::Value {
        &self.value
    }

    async fn validate(value: &Self::Value) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Field {
                field: "username".to_string(),
                message: "Username cannot be empty".to_string(),
            });
        }

        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ValidationError::Format(
                "Username cannot contain whitespace or control characters".to_string(),
            ));
        }

        Ok(())
    }

    fn create(value: Self::Value) -> Self {
        Self { value }
    }
}

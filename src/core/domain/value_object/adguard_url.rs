use crate::core::domain::{
    error::{AdGuardResult, ValidationError},
    value_object::base_value_object::ValueObject,
};
use async_trait::async_trait;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];
const MAX_URL_LENGTH: usize = 2083;

/// Represents a validated AdGuard Home base URL
///
/// This value object ensures the URL parses per RFC 3986, uses an
/// `http`/`https` scheme, and names a host. Control endpoint paths are
/// appended to it by the request executor.
#[derive(Debug, Clone)]
pub struct AdGuardUrl {
    value: String,
}

impl AdGuardUrl {
    /// Creates a new AdGuardUrl instance with validation
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL to validate and wrap
    ///
    /// # Returns
    ///
    /// * `Ok(AdGuardUrl)` if validation succeeds
    /// * `Err(AdGuardError)` if validation fails
    pub async fn new(url: String) -> AdGuardResult<Self> {
        <Self as ValueObject>::new(url).await
    }

    #[cfg(test)]
    pub(crate) fn new_unchecked(url: String) -> Self {
        Self { value: url }
    }

    /// Returns the URL as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[async_trait]
impl ValueObject for AdGuardUrl {
    type Value = String;

    fn as_inner(&self) -> &Self::Value {
        &self.value
    }

    async fn validate(value: &Self::Value) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Field {
                field: "base_url".to_string(),
                message: "Base URL cannot be empty".to_string(),
            });
        }

        if value.len() > MAX_URL_LENGTH {
            return Err(ValidationError::Format(format!(
                "URL exceeds maximum length of {} characters",
                MAX_URL_LENGTH
            )));
        }

        let parsed = url::Url::parse(value)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

        if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
            return Err(ValidationError::ConstraintViolation(format!(
                "Invalid scheme. Must be one of: {}",
                ALLOWED_SCHEMES.join(", ")
            )));
        }

        if parsed.host_str().is_none() {
            return Err(ValidationError::ConstraintViolation(
                "URL must name a host".to_string(),
            ));
        }

        Ok(())
    }

    fn create(value: Self::Value) -> Self {
        Self { value }
    }
}

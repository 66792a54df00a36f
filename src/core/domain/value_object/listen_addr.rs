use crate::core::domain::{
    error::{AdGuardResult, ValidationError},
    value_object::base_value_object::ValueObject,
};
use async_trait::async_trait;
use std::net::IpAddr;

/// Represents a validated listen address for the launched service
///
/// The service binds its web interface to this address, passed on the
/// command line as `-h <addr>`.
#[derive(Debug, Clone)]
pub struct ListenAddr {
    value: String,
}

impl ListenAddr {
    /// Creates a new ListenAddr instance with validation
    ///
    /// # Arguments
    ///
    /// * `addr` - The IP address to validate and wrap
    ///
    /// # Returns
    ///
    /// * `Ok(ListenAddr)` if validation succeeds
    /// * `Err(AdGuardError)` if validation fails
    pub async fn new(addr: String) -> AdGuardResult<Self> {
        <Self as ValueObject>::new(addr).await
    }

    /// Returns the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[async_trait]
impl ValueObject for ListenAddr {
    type Value = String;

    fn as_inner(&self) -> &Self::Value {
        &self.value
    }

    async fn validate(value: &Self::Value) -> Result<(), ValidationError> {
        value.parse::<IpAddr>().map_err(|_| {
            ValidationError::Format(format!("'{}' is not a valid IP address", value))
        })?;

        Ok(())
    }

    fn create(value: Self::Value) -> Self {
        Self { value }
    }
}

use crate::core::domain::error::{AdGuardResult, ValidationError};
use async_trait::async_trait;
use std::fmt::Display;

/// A trait representing a domain value object with built-in validation.
///
/// This trait provides a foundation for implementing domain value objects
/// that must be proven valid before they participate in a connection or a
/// launch. Values are immutable after construction.
///
/// # Type Parameters
///
/// * `Value`: The underlying type of the value object
#[async_trait]
pub trait ValueObject: Send + Sync + Sized + 'static {
    /// The underlying type of the value
    type Value: Send + Sync + Clone + Display;

    /// Returns a reference to the inner value
    fn as_inner(&self) -> &Self::Value;

    /// Validates the value according to domain rules
    ///
    /// # Arguments
    ///
    /// * `value` - The value to validate
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation passes
    /// * `Err(ValidationError)` if validation fails
    async fn validate(value: &Self::Value) -> Result<(), ValidationError>;

    /// Creates a new instance without validating
    ///
    /// # Arguments
    ///
    /// * `value` - The value to wrap in the value object
    fn create(value: Self::Value) -> Self;

    /// Creates a new validated instance asynchronously
    ///
    /// # Arguments
    ///
    /// * `value` - The value to validate and wrap
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` if creation and validation succeed
    /// * `Err(AdGuardError)` if validation fails
    async fn new(value: Self::Value) -> AdGuardResult<Self> {
        Self::validate(&value).await?;
        Ok(Self::create(value))
    }
}

mod core;

pub use crate::core::domain::error::{AdGuardError, AdGuardResult, ValidationError};
pub use crate::core::domain::model::{AdGuardConnection, DnsConfig, RewriteRecord, ServerStatus};
pub use crate::core::domain::value_object::{
    AdGuardPassword, AdGuardUrl, AdGuardUsername, ListenAddr,
};
pub use crate::core::infrastructure::launcher::{ServiceHandle, ServiceLauncher};

use crate::core::infrastructure::api_client::ApiClient;

/// A client for interacting with the AdGuard Home control API
///
/// This client provides a safe, ergonomic interface for:
/// - Reading and writing the DNS resolver configuration
/// - Managing domain rewrite rules
/// - Querying the running server's status
///
/// The client holds no mutable state after construction, so it can be
/// shared freely across tasks.
///
/// # Examples
///
/// ```no_run
/// use leeca_adguard::{AdGuardClient, AdGuardResult};
///
/// #[tokio::main]
/// async fn main() -> AdGuardResult<()> {
///     let client = AdGuardClient::builder()
///         .base_url("http://192.168.1.10:3000")
///         .credentials("admin", "password")
///         .build()
///         .await?;
///
///     let status = client.status().await?;
///     println!("AdGuard Home {} running: {}", status.version, status.running);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdGuardClient {
    api_client: ApiClient,
}

/// Builder for AdGuardClient configuration
#[derive(Debug, Default)]
pub struct AdGuardClientBuilder {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl AdGuardClientBuilder {
    /// Sets the base URL of the server (e.g., `http://192.168.1.10:3000`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the credentials used for Basic authentication.
    pub fn credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Validates the configuration and builds the client.
    ///
    /// # Errors
    ///
    /// Returns `AdGuardError::Validation` if a field is missing or fails
    /// validation, and `AdGuardError::Transport` if the underlying HTTP
    /// client cannot be constructed.
    pub async fn build(self) -> AdGuardResult<AdGuardClient> {
        let base_url = AdGuardUrl::new(self.base_url.ok_or_else(|| {
            AdGuardError::from(ValidationError::Field {
                field: "base_url".to_string(),
                message: "Base URL is required".to_string(),
            })
        })?)
        .await?;

        let username = AdGuardUsername::new(self.username.ok_or_else(|| {
            AdGuardError::from(ValidationError::Field {
                field: "username".to_string(),
                message: "Username is required".to_string(),
            })
        })?)
        .await?;

        let password = AdGuardPassword::new(self.password.ok_or_else(|| {
            AdGuardError::from(ValidationError::Field {
                field: "password".to_string(),
                message: "Password is required".to_string(),
            })
        })?)
        .await?;

        let connection = AdGuardConnection::new(base_url, username, password);

        Ok(AdGuardClient {
            api_client: ApiClient::new(connection)?,
        })
    }
}

impl AdGuardClient {
    /// Creates a new builder for AdGuardClient configuration
    pub fn builder() -> AdGuardClientBuilder {
        AdGuardClientBuilder::default()
    }

    /// Returns the connection details the client was built with.
    pub fn connection(&self) -> &AdGuardConnection {
        self.api_client.connection()
    }

    /// Fetches the current DNS resolver configuration.
    ///
    /// # Errors
    ///
    /// Returns `AdGuardError` if the request fails, the server answers
    /// with a status other than 200, or the body cannot be decoded.
    pub async fn dns_config(&self) -> AdGuardResult<DnsConfig> {
        self.api_client.get("/control/dns_info").await
    }

    /// Saves a DNS resolver configuration.
    pub async fn set_dns_config(&self, config: &DnsConfig) -> AdGuardResult<()> {
        self.api_client.post("/control/dns_config", config).await
    }

    /// Lists all configured rewrite rules.
    pub async fn rewrites(&self) -> AdGuardResult<Vec<RewriteRecord>> {
        self.api_client.get("/control/rewrite/list").await
    }

    /// Adds a rewrite rule.
    pub async fn add_rewrite(&self, record: &RewriteRecord) -> AdGuardResult<()> {
        self.api_client.post("/control/rewrite/add", record).await
    }

    /// Deletes a rewrite rule. The record must match an existing rule.
    pub async fn delete_rewrite(&self, record: &RewriteRecord) -> AdGuardResult<()> {
        self.api_client.post("/control/rewrite/delete", record).await
    }

    /// Fetches a snapshot of the server's running status.
    pub async fn status(&self) -> AdGuardResult<ServerStatus> {
        self.api_client.get("/control/status").await
    }
}

#[cfg(test)]
mod tests;

//! Domain model for server state from the `/control/status` endpoint.

use serde::{Deserialize, Serialize};

/// A point-in-time snapshot of an AdGuard Home server's state.
///
/// Returned by the `/control/status` endpoint. The snapshot has no
/// identity beyond the moment it was fetched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerStatus {
    /// Server version string (e.g., "v0.107.43").
    pub version: String,
    /// Configured interface language code.
    pub language: String,
    /// Addresses the DNS server listens on.
    pub dns_addresses: Vec<String>,
    /// Port the DNS server listens on.
    pub dns_port: u16,
    /// Port the web interface listens on.
    pub http_port: String,
    /// Seconds remaining on a temporary protection pause, zero if none.
    pub protection_disabled_duration: i64,
    /// Whether filtering protection is enabled.
    pub protection_enabled: bool,
    /// Whether the built-in DHCP server is available.
    pub dhcp_available: bool,
    /// Whether the DNS server is running.
    pub running: bool,
}

//! Domain model for resolver configuration from the `/control/dns_info`
//! and `/control/dns_config` endpoints.

use serde::{Deserialize, Serialize};

/// DNS resolver configuration of an AdGuard Home server.
///
/// Returned by `/control/dns_info` and accepted by `/control/dns_config`.
/// The server rejects `null` and `[]` for the optional fields, so they
/// are omitted from the serialized form whenever they are empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Resolver addresses used only to resolve the upstream resolvers.
    pub bootstrap_dns: Vec<String>,
    /// Upstream selection mode (e.g., "parallel"); empty means default.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub upstream_mode: String,
    /// Whether client hostnames are resolved via reverse DNS.
    pub resolve_clients: bool,
    /// Upstreams used for PTR queries of private addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_ptr_upstreams: Vec<String>,
    /// Upstream resolver addresses.
    pub upstream_dns: Vec<String>,
}

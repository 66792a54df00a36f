//! Domain model for DNS rewrite rules from the `/control/rewrite/*`
//! endpoints.

use serde::{Deserialize, Serialize};

/// A DNS domain-to-answer override rule managed by the server.
///
/// The same shape is returned by `/control/rewrite/list` and sent to
/// `/control/rewrite/add` and `/control/rewrite/delete`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RewriteRecord {
    /// The domain (or wildcard) to override.
    pub domain: String,
    /// The answer to serve: an IP address or a canonical name.
    pub answer: String,
}

impl RewriteRecord {
    /// Creates a rewrite rule mapping `domain` to `answer`.
    pub fn new(domain: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            answer: answer.into(),
        }
    }
}

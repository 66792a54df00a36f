use crate::core::domain::value_object::{AdGuardPassword, AdGuardUrl, AdGuardUsername};

/// The validated coordinates of one AdGuard Home server.
///
/// All fields are immutable after construction; the connection is owned
/// by the client for its whole lifetime.
#[derive(Debug, Clone)]
pub struct AdGuardConnection {
    base_url: AdGuardUrl,
    username: AdGuardUsername,
    password: AdGuardPassword,
}

impl AdGuardConnection {
    pub fn new(base_url: AdGuardUrl, username: AdGuardUsername, password: AdGuardPassword) -> Self {
        Self {
            base_url,
            username,
            password,
        }
    }

    pub fn base_url(&self) -> &AdGuardUrl {
        &self.base_url
    }

    pub fn username(&self) -> &AdGuardUsername {
        &self.username
    }

    pub fn password(&self) -> &AdGuardPassword {
        &self.password
    }
}

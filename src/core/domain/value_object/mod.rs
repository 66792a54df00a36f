mod adguard_password;
mod adguard_url;
mod adguard_username;
pub(crate) mod base_value_object;
mod listen_addr;

pub use adguard_password::AdGuardPassword;
pub use adguard_url::AdGuardUrl;
pub use adguard_username::AdGuardUsername;
pub use listen_addr::ListenAddr;

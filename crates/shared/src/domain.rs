use serde::{Deserialize, Serialize};

/// Network address of one ship device. The roster is built once at startup
/// and never changes for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipAddress {
    pub host: String,
    pub port: u16,
}

impl ShipAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

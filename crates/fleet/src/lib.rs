use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::domain::ShipAddress;
use thiserror::Error;
use tracing::{info, warn};

/// Upper bound on a single delivery attempt, connection included.
pub const DELIVERY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Error communicating with ship at {host}: {source}")]
    Unreachable {
        host: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to send message to {host}. Ship responded with status code {status}.")]
    Rejected { host: String, status: u16 },
}

impl DeliveryError {
    pub fn host(&self) -> &str {
        match self {
            Self::Unreachable { host, .. } | Self::Rejected { host, .. } => host,
        }
    }
}

/// Delivery seam between the hub and the fleet. Production speaks HTTP;
/// tests substitute recording fakes.
#[async_trait]
pub trait ShipTransport: Send + Sync {
    async fn deliver(&self, ship: &ShipAddress, message: &str) -> Result<(), DeliveryError>;
}

pub fn receive_message_url(ship: &ShipAddress) -> String {
    format!("http://{}:{}/receive-message", ship.host, ship.port)
}

pub struct HttpShipTransport {
    http: Client,
}

impl HttpShipTransport {
    pub fn new() -> anyhow::Result<Self> {
        let http = Client::builder().timeout(DELIVERY_TIMEOUT).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl ShipTransport for HttpShipTransport {
    async fn deliver(&self, ship: &ShipAddress, message: &str) -> Result<(), DeliveryError> {
        let response = self
            .http
            .post(receive_message_url(ship))
            .form(&[("message", message)])
            .send()
            .await
            .map_err(|source| DeliveryError::Unreachable {
                host: ship.host.clone(),
                source,
            })?;

        // Ships acknowledge with exactly 200; anything else is a rejection.
        let status = response.status();
        if status != StatusCode::OK {
            warn!(host = %ship.host, status = status.as_u16(), "ship rejected delivery");
            return Err(DeliveryError::Rejected {
                host: ship.host.clone(),
                status: status.as_u16(),
            });
        }

        info!(host = %ship.host, "message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_receive_endpoint_from_host_and_port() {
        let ship = ShipAddress::new("198.51.100.10", 80);
        assert_eq!(
            receive_message_url(&ship),
            "http://198.51.100.10:80/receive-message"
        );
    }

    #[test]
    fn rejection_names_ship_and_status_code() {
        let err = DeliveryError::Rejected {
            host: "203.0.113.45".into(),
            status: 500,
        };
        assert_eq!(err.host(), "203.0.113.45");
        assert_eq!(
            err.to_string(),
            "Failed to send message to 203.0.113.45. Ship responded with status code 500."
        );
    }
}

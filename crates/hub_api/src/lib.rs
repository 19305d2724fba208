use std::sync::Arc;

use fleet::{DeliveryError, ShipTransport};
use shared::{
    domain::ShipAddress,
    error::{ApiError, ErrorCode},
};
use tracing::debug;

mod log;

pub use log::MessageLog;

pub const UNKNOWN_SENDER: &str = "Unknown";
pub const UNKNOWN_SHIP: &str = "Unknown Ship";

#[derive(Clone)]
pub struct ApiContext {
    pub log: MessageLog,
    pub fleet: Arc<Vec<ShipAddress>>,
    pub transport: Arc<dyn ShipTransport>,
}

/// Delivers `message` to every ship in roster order. The first failed
/// delivery ends the broadcast; ships after it are not attempted, and the
/// prefix that already succeeded is not reported back.
pub async fn broadcast_message(ctx: &ApiContext, message: &str) -> Result<String, ApiError> {
    if message.is_empty() {
        return Err(ApiError::new(ErrorCode::Validation, "Message is empty."));
    }

    let mut feedback = String::new();
    for ship in ctx.fleet.iter() {
        match ctx.transport.deliver(ship, message).await {
            Ok(()) => feedback = format!("Message '{message}' sent to Ships."),
            Err(err) => return Err(delivery(err)),
        }
    }
    Ok(feedback)
}

/// Formats an inbound ship report and appends it to the log. `sender` and
/// `ship` fall back to placeholders when the report omits them.
pub async fn record_inbound(
    ctx: &ApiContext,
    message: Option<String>,
    sender: Option<String>,
    ship: Option<String>,
) -> Result<(), ApiError> {
    let message = message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ApiError::new(ErrorCode::Validation, "No message received"))?;
    let sender = sender.unwrap_or_else(|| UNKNOWN_SENDER.to_string());
    let ship = ship.unwrap_or_else(|| UNKNOWN_SHIP.to_string());

    ctx.log
        .append(format!("From {ship} ({sender}): {message}"))
        .await;
    debug!(%ship, %sender, "inbound message recorded");
    Ok(())
}

pub async fn list_messages(ctx: &ApiContext) -> Vec<String> {
    ctx.log.snapshot().await
}

fn delivery(err: DeliveryError) -> ApiError {
    let code = match &err {
        DeliveryError::Unreachable { .. } => ErrorCode::Unreachable,
        DeliveryError::Rejected { .. } => ErrorCode::Rejected,
    };
    ApiError::new(code, err.to_string())
}

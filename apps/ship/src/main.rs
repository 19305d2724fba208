use std::{net::SocketAddr, time::Duration};

use anyhow::Result;
use axum::{http::StatusCode, routing::post, Form, Router};
use clap::Parser;
use reqwest::Client;
use shared::protocol::InboundMessageForm;
use tracing::{info, warn};

/// Simulates one ship device: listens for hub broadcasts and reports a
/// status line back to the hub on a fixed interval.
#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the hub.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    hub_url: String,
    /// Ship name reported with every status message.
    #[arg(long, default_value = "Ship1")]
    ship: String,
    /// Crew member reported as the sender.
    #[arg(long, default_value = "Deck")]
    sender: String,
    /// Address this ship listens on for hub broadcasts.
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen: String,
    /// Seconds between status reports to the hub.
    #[arg(long, default_value_t = 120)]
    report_interval_secs: u64,
    /// Status line posted on every interval.
    #[arg(long, default_value = "All systems nominal")]
    status: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let addr: SocketAddr = args.listen.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, ship = %args.ship, "ship listening for hub broadcasts");

    tokio::spawn(report_status(
        args.hub_url,
        args.ship,
        args.sender,
        args.status,
        args.report_interval_secs,
    ));

    let app = Router::new().route("/receive-message", post(receive_message));
    axum::serve(listener, app).await?;
    Ok(())
}

async fn receive_message(Form(form): Form<InboundMessageForm>) -> (StatusCode, &'static str) {
    match form.message.filter(|m| !m.is_empty()) {
        Some(message) => {
            info!(%message, "broadcast received from hub");
            (StatusCode::OK, "Message received")
        }
        None => (StatusCode::BAD_REQUEST, "No message received"),
    }
}

async fn report_status(
    hub_url: String,
    ship: String,
    sender: String,
    status_line: String,
    interval_secs: u64,
) {
    let client = match Client::builder().timeout(Duration::from_secs(5)).build() {
        Ok(client) => client,
        Err(err) => {
            warn!(%err, "could not build http client; status reports disabled");
            return;
        }
    };

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    loop {
        ticker.tick().await;
        let report = InboundMessageForm {
            message: Some(status_line.clone()),
            sender: Some(sender.clone()),
            ship: Some(ship.clone()),
        };
        match client
            .post(format!("{hub_url}/receive-message"))
            .form(&report)
            .send()
            .await
        {
            Ok(response) if response.status() == reqwest::StatusCode::OK => {
                info!("status report delivered");
            }
            Ok(response) => {
                warn!(status = response.status().as_u16(), "hub rejected status report");
            }
            Err(err) => {
                warn!(%err, "could not reach hub");
            }
        }
    }
}

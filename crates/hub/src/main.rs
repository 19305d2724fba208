use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use fleet::HttpShipTransport;
use hub_api::{broadcast_message, list_messages, record_inbound, ApiContext, MessageLog};
use shared::protocol::{BroadcastForm, InboundMessageForm};
use tracing::info;

mod config;
mod views;

use config::{load_settings, roster};

#[derive(Clone)]
struct AppState {
    api: ApiContext,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let api = ApiContext {
        log: MessageLog::new(),
        fleet: Arc::new(roster(&settings)),
        transport: Arc::new(HttpShipTransport::new()?),
    };

    let app = build_router(Arc::new(AppState { api }));

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, ships = settings.ships.len(), "hub listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard).post(send_to_fleet))
        .route("/receive-message", post(receive_message))
        .route("/get-messages", get(get_messages))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let messages = list_messages(&state.api).await;
    Html(views::dashboard("", "", &messages))
}

async fn send_to_fleet(
    State(state): State<Arc<AppState>>,
    Form(form): Form<BroadcastForm>,
) -> Html<String> {
    let message = form.message.unwrap_or_default();
    let (feedback, error) = match broadcast_message(&state.api, &message).await {
        Ok(feedback) => (feedback, String::new()),
        Err(err) => (String::new(), err.message),
    };
    let messages = list_messages(&state.api).await;
    Html(views::dashboard(&feedback, &error, &messages))
}

async fn receive_message(
    State(state): State<Arc<AppState>>,
    Form(form): Form<InboundMessageForm>,
) -> (StatusCode, &'static str) {
    match record_inbound(&state.api, form.message, form.sender, form.ship).await {
        Ok(()) => (StatusCode::OK, "Message received"),
        Err(_) => (StatusCode::BAD_REQUEST, "No message received"),
    }
}

async fn get_messages(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(list_messages(&state.api).await)
}

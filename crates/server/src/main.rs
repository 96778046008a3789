mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::{get, post};
use nearmark::request::{Config, FieldPolicy};
use std::sync::Arc;
use tracing::{error, info};

const PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    let port = match args.get(1).map(|value| value.parse::<u16>()) {
        None => PORT,
        Some(Ok(port)) => port,
        Some(Err(err)) => {
            error!("Invalid port {:?}: {err}", args[1]);
            std::process::exit(1);
        }
    };
    let policy = match args.get(2).map(String::as_str) {
        None | Some("permissive") => FieldPolicy::Permissive,
        Some("strict") => FieldPolicy::Strict,
        Some(other) => {
            error!("Unknown field policy {other:?}, expected permissive or strict");
            std::process::exit(1);
        }
    };
    let config = Config::default().with_policy(policy);
    info!("Using {config:?}");
    let state = Arc::new(AppState::new(config));

    let app = axum::Router::new()
        .route("/health", get(api::health))
        .route("/nearest", post(api::nearest))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Could not bind port {port}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {port}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}

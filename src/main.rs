// src/main.rs
mod config;
mod dtos;
mod error;
mod handlers;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use crate::config::Config;
use crate::services::{form::SalesForm, gemini::GeminiClient};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    if config.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, coaching reports will fall back to the error notice");
    }

    let coach = GeminiClient::new(&config.api_base, &config.model, config.api_key.clone());
    let app_state = state::AppState::new(SalesForm::new(config.monthly_target), Arc::new(coach));
    let app = routes::build_app(app_state);

    // Try port..port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!(model = %config.model, "Server running on {}", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", config.port, config.host);
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}

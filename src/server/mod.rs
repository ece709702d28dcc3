// src/server/mod.rs
//! Larder HTTP server
//!
//! This module provides the HTTP surface over the recipe store:
//! - Shared server state constructed explicitly (no ambient singleton)
//! - Axum router with the recipe CRUD and search endpoints
//! - Handlers performing direct store translations, no business layer

mod handlers;
mod routes;

pub use routes::create_router;

use crate::store::RecipeStore;
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".parse().unwrap(),
        }
    }
}

/// Shared server state, passed to every handler via axum `State`
pub struct ServerState {
    pub config: ServerConfig,
    pub store: RecipeStore,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            store: RecipeStore::new(),
        }
    }
}

/// Shared state type used by the router and handlers
pub type SharedState = Arc<ServerState>;

/// Start the Larder server and serve until the process exits
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting Larder server on {}", config.bind_addr);

    let state = Arc::new(ServerState::new(config.clone()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Larder is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}

//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::NotificationService;
use crate::config::Settings;
use crate::domain::ConnectionRegistry;
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};
use crate::presentation::websocket::ConnectionHub;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub hub: Arc<ConnectionHub>,
    pub notifications: Arc<NotificationService>,
}

impl AppState {
    /// Wire a fresh registry, hub and notifier. Every call yields an
    /// isolated instance.
    pub fn new(settings: Settings) -> Self {
        let registry = Arc::new(ConnectionRegistry::new());
        let hub = Arc::new(ConnectionHub::new());
        let notifications = Arc::new(NotificationService::new(registry, hub.clone()));

        Self {
            settings: Arc::new(settings),
            hub,
            notifications,
        }
    }
}

/// Build the full router with middleware
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let addr = settings.server_addr();
        let state = AppState::new(settings);
        let router = build_router(state);

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

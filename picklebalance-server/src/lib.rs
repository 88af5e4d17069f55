//! PickleBalance Server - HTTP API for the schedule engine
//!
//! This crate provides the web backend:
//! - Schedule reconstruction from raw pairings
//! - Partner/opponent statistics
//! - Player-scoped schedule views
//! - Local schedule generation
//! - Static file serving for a frontend

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir};

pub use routes::ErrorResponse;
pub use state::ServerState;

/// Route paths, shared by the router and anything that lists the API
pub mod paths {
    pub const STATUS: &str = "/api/status";
    pub const DEMO_ROSTER: &str = "/api/roster/demo";
    pub const BUILD: &str = "/api/schedule/build";
    pub const STATS: &str = "/api/schedule/stats";
    pub const FILTER: &str = "/api/schedule/filter";
    pub const GENERATE: &str = "/api/generate";
}

/// One exposed endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiRoute {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
}

pub const API_ROUTES: [ApiRoute; 6] = [
    ApiRoute {
        method: "GET",
        path: paths::STATUS,
        summary: "version and generation limits",
    },
    ApiRoute {
        method: "GET",
        path: paths::DEMO_ROSTER,
        summary: "sample roster",
    },
    ApiRoute {
        method: "POST",
        path: paths::BUILD,
        summary: "reconstruct a schedule from raw pairings",
    },
    ApiRoute {
        method: "POST",
        path: paths::STATS,
        summary: "partner/opponent matrices",
    },
    ApiRoute {
        method: "POST",
        path: paths::FILTER,
        summary: "one player's rounds",
    },
    ApiRoute {
        method: "POST",
        path: paths::GENERATE,
        summary: "generate and analyse a schedule",
    },
];

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Frontend files served for any non-API path
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8002,
            static_dir: "web".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<String>) -> Self {
        self.static_dir = static_dir.into();
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        .route(paths::STATUS, get(routes::status::status_handler))
        .route(paths::DEMO_ROSTER, get(routes::roster::get_demo_roster))
        // Post-processing
        .route(paths::BUILD, post(routes::schedule::build_schedule))
        .route(paths::STATS, post(routes::schedule::schedule_stats))
        .route(paths::FILTER, post(routes::schedule::filter_schedule))
        // Generation
        .route(paths::GENERATE, post(routes::generate::generate))
        .with_state(state)
        .layer(CorsLayer::permissive())
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let state = Arc::new(ServerState::new());
    let router = create_router(&config, state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!(
        "PickleBalance API listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, router).await?;

    Ok(())
}

//! Serve command - expose the engine over HTTP
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: server_config(), announce()
//! - Level 3: (delegated to picklebalance-server crate)
//! - Level 4: route listing

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use picklebalance_server::{run_server, ServerConfig, API_ROUTES};

#[derive(Args)]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port number to listen on
    #[arg(long, default_value = "8002")]
    pub port: u16,

    /// Frontend directory served for non-API paths (default: ./web if present)
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run serve command
///
/// 1. Resolve bind address and frontend directory
/// 2. List the API
/// 3. Serve until interrupted
pub fn run(args: ServerArgs) -> Result<()> {
    let config = server_config(&args)?;
    announce(&config);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(run_server(config))
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// An explicit `--static-dir` must exist; the default may be absent
fn server_config(args: &ServerArgs) -> Result<ServerConfig> {
    let config = ServerConfig::default()
        .with_host(args.host)
        .with_port(args.port);

    match &args.static_dir {
        Some(dir) if dir.is_dir() => Ok(config.with_static_dir(dir.to_string_lossy())),
        Some(dir) => anyhow::bail!("--static-dir is not a directory: {}", dir.display()),
        None => {
            if !PathBuf::from(&config.static_dir).is_dir() {
                tracing::info!("No {} directory, serving the API only", config.static_dir);
            }
            Ok(config)
        }
    }
}

fn announce(config: &ServerConfig) {
    tracing::info!("PickleBalance API on http://{}", config.addr());
    for line in route_lines(config) {
        tracing::info!("  {}", line);
    }
}

// ============================================================================
// LEVEL 4 - ROUTE LISTING
// ============================================================================

fn route_lines(config: &ServerConfig) -> Vec<String> {
    API_ROUTES
        .iter()
        .map(|route| {
            format!(
                "{:<4} http://{}{}  {}",
                route.method,
                config.addr(),
                route.path,
                route.summary
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn args(static_dir: Option<&str>) -> ServerArgs {
        ServerArgs {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 9000,
            static_dir: static_dir.map(PathBuf::from),
        }
    }

    #[test]
    fn test_server_config_binds_host_and_port() {
        let config = server_config(&args(None)).unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.static_dir, "web");
    }

    #[test]
    fn test_explicit_static_dir_must_exist() {
        let err = server_config(&args(Some("/nonexistent/frontend"))).unwrap_err();
        assert!(err.to_string().contains("not a directory"));

        let dir = std::env::temp_dir();
        let config = server_config(&args(dir.to_str())).unwrap();
        assert_eq!(PathBuf::from(config.static_dir), dir);
    }

    #[test]
    fn test_route_lines_list_every_endpoint() {
        let config = server_config(&args(None)).unwrap();
        let lines = route_lines(&config);

        assert_eq!(lines.len(), API_ROUTES.len());
        assert!(lines[0].starts_with("GET  http://127.0.0.1:9000/api/status"));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("POST http://127.0.0.1:9000/api/generate")));
    }
}

//! HTTP Server
//!
//! Configuration, router construction and the serve loop for the registry API.

use anyhow::{Context, Result};
use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::Level;

use crate::membership::handlers::{
    handle_cancel, handle_get_member, handle_list_active, handle_not_found, handle_register,
    handle_update_start_date,
};
use crate::membership::protocol::{
    ENDPOINT_MEMBER, ENDPOINT_MEMBERS, ENDPOINT_MEMBERS_SLASH, ENDPOINT_REGISTER,
};
use crate::membership::registry::MembershipRegistry;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration for the registry HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: Level,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: Level::INFO,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `LOG_LEVEL` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_port(&port)?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            config.log_level = parse_level(&level)?;
        }

        Ok(config)
    }

    /// Applies `--host`, `--port` and `--log-level` overrides. Unknown
    /// arguments are skipped.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--host" => {
                    self.host = flag_value(args, i)?.to_string();
                    i += 2;
                }
                "--port" => {
                    self.port = parse_port(flag_value(args, i)?)?;
                    i += 2;
                }
                "--log-level" => {
                    self.log_level = parse_level(flag_value(args, i)?)?;
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        Ok(self)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

fn flag_value<'a>(args: &'a [String], i: usize) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("Missing value for {}", args[i]))
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid port: {raw}"))
}

fn parse_level(raw: &str) -> Result<Level> {
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid log level: {raw}"))
}

/// Build the Axum router with every registry route.
pub fn build_router(registry: Arc<MembershipRegistry>) -> Router {
    Router::new()
        .route(ENDPOINT_REGISTER, post(handle_register))
        .route(ENDPOINT_MEMBERS, get(handle_list_active))
        .route(ENDPOINT_MEMBERS_SLASH, get(handle_list_active))
        .route(
            ENDPOINT_MEMBER,
            get(handle_get_member)
                .put(handle_update_start_date)
                .delete(handle_cancel),
        )
        .fallback(handle_not_found)
        .layer(Extension(registry))
}

/// Bind the configured address and serve until Ctrl+C.
pub async fn run(config: ServerConfig, registry: Arc<MembershipRegistry>) -> Result<()> {
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(
        "Gym Membership Management System is running on {}",
        listener.local_addr()?
    );

    axum::serve(listener, build_router(registry))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutting down..."),
        Err(e) => tracing::error!("Failed to listen for Ctrl+C: {}", e),
    }
}

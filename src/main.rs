use gym_membership::membership::registry::MembershipRegistry;
use gym_membership::server::{self, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: gym-membership [--host <addr>] [--port <port>] [--log-level <level>]");
        eprintln!("Environment: HOST, PORT, LOG_LEVEL (flags take precedence)");
        return Ok(());
    }

    let config = ServerConfig::from_env()?.apply_args(&args)?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let registry = Arc::new(MembershipRegistry::new());

    server::run(config, registry).await
}

//! # Warden DNS
//!
//! Per-device filtering DNS resolver with a loopback control plane.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use warden_dns_domain::CliOverrides;

#[derive(Parser)]
#[command(name = "warden-dns")]
#[command(version)]
#[command(about = "Per-device filtering DNS resolver")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// DNS bind address (default 0.0.0.0:53)
    #[arg(long)]
    dns_bind: Option<String>,

    /// Control-plane bind address (default 127.0.0.1:8081)
    #[arg(long)]
    http_bind: Option<String>,

    /// Upstream resolver address (default 1.1.1.1:53)
    #[arg(long)]
    upstream: Option<String>,

    /// Blocking mode: redirect, null or nxdomain
    #[arg(long)]
    blocking_mode: Option<String>,

    /// Blocklist directory (default ./blocklist)
    #[arg(long)]
    lists_dir: Option<String>,

    /// SQLite database of the auth collaborator; enables sessions and
    /// per-device list policies
    #[arg(long)]
    auth_db: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        dns_bind: cli.dns_bind,
        http_bind: cli.http_bind,
        upstream: cli.upstream,
        blocking_mode: cli.blocking_mode,
        lists_dir: cli.lists_dir,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    tracing::info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        dns_bind = %config.server.dns_bind,
        http_bind = %config.server.http_bind,
        upstream = %config.upstream.address,
        mode = config.blocking.mode.as_str(),
        "Configuration loaded"
    );

    let services = di::build_services(&config, cli.auth_db.as_deref()).await?;

    // A directory that cannot be read at startup is fatal.
    services.reload_lists.execute().await?;

    services.start_jobs().await;

    let dns = tokio::spawn(server::start_dns_server(config.clone(), services.clone()));
    let http = tokio::spawn(server::start_http_server(config.clone(), services.app_state()));

    tokio::select! {
        result = dns => result??,
        result = http => result??,
    }

    Ok(())
}

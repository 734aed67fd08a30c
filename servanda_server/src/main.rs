//! # servanda-server
//!
//! ```bash
//! # Local development: plain HTTP cookies, verbose logs
//! servanda-server --dev --log-level debug
//!
//! # Production, with overrides on top of servanda.toml
//! servanda-server --config /etc/servanda.toml --listen 0.0.0.0:8080
//! ```
//!
//! `RUST_LOG` takes precedence over `--log-level`.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use servanda_core::config::CONFIG_FILE;
use servanda_core::{Environment, SiteConfig};
use servanda_server::Server;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "servanda-server")]
#[command(about = "Serves the Servanda landing page")]
#[command(version)]
struct Args {
    /// Config file (missing file means defaults)
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Address to listen on (overrides config)
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    /// Development mode: cookies without `Secure`
    #[arg(long)]
    dev: bool,

    /// Directory with `pkg/` and `images/` (overrides config)
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Directory with `{code}.json` message bundles (overrides config)
    #[arg(long)]
    messages_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn apply(self, mut config: SiteConfig) -> SiteConfig {
        if let Some(listen) = self.listen {
            config.listen = listen;
        }
        if self.dev {
            config.environment = Environment::Development;
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = dir;
        }
        if let Some(dir) = self.messages_dir {
            config.messages_dir = Some(dir);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::load(&args.config);
    let config = args.apply(config);

    info!(
        environment = ?config.environment,
        default_locale = %config.default_locale,
        static_dir = %config.static_dir.display(),
        "Starting servanda-server v{}",
        env!("CARGO_PKG_VERSION")
    );

    Server::new(&config).run().await?;

    info!("Server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::parse_from([
            "servanda-server",
            "--dev",
            "--listen",
            "0.0.0.0:9000",
            "--messages-dir",
            "msgs",
        ]);
        assert_eq!(args.config, PathBuf::from(CONFIG_FILE));
        assert_eq!(args.log_level, "info");

        let config = args.apply(SiteConfig::default());
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.listen.port(), 9000);
        assert_eq!(config.messages_dir, Some(PathBuf::from("msgs")));
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_defaults_leave_config_alone() {
        let args = Args::parse_from(["servanda-server"]);
        assert_eq!(args.apply(SiteConfig::default()), SiteConfig::default());
    }
}

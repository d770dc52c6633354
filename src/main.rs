use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hirearchy::auth::decode_claims;
use hirearchy::environment::DEFAULT_CONFIG_FILE;
use hirearchy::{start_web_server, EnvironmentConfig};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "hirearchy=info,hirearchy_web=info,rocket=warn";

#[derive(Parser)]
#[command(name = "hirearchy-web")]
#[command(about = "Server-rendered front end for the Hire-Archy job-matching API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Overrides the configured port
        #[arg(long)]
        port: Option<u16>,
        /// Overrides the configured API base URL
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Print the claims read from a session token
    DecodeToken { token: String },
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let json_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true) // Clear file on startup
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(json_layer)
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config_path, port, api_url) = match cli.command {
        Some(Command::DecodeToken { token }) => {
            match decode_claims(&token) {
                Some(claims) => {
                    println!("role:    {}", claims.role.as_deref().unwrap_or("-"));
                    println!("user_id: {}", claims.user_id.as_deref().unwrap_or("-"));
                    println!("sub:     {}", claims.sub.as_deref().unwrap_or("-"));
                    println!("email:   {}", claims.email.as_deref().unwrap_or("-"));
                }
                None => anyhow::bail!("Token payload could not be decoded"),
            }
            return Ok(());
        }
        Some(Command::Serve {
            config,
            port,
            api_url,
        }) => (config, port, api_url),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), None, None),
    };

    let mut config = EnvironmentConfig::load(&config_path)?;
    if let Some(url) = api_url {
        config = config.with_api_base_url(url);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }

    init_logging(config.log_file.as_deref())?;

    info!(
        "Environment: {}",
        EnvironmentConfig::get_environment()
    );
    info!("Configuration: {}", config_path.display());

    start_web_server(config).await
}

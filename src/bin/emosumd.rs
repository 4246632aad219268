//! emosumd — emotion-conditioned summarization daemon.
//!
//! Serves the `/api/summarize`, `/api/health`, and `/api/emotions` endpoints
//! over HTTP/JSON.

use std::net::SocketAddr;
use std::sync::LazyLock;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use emosum::EmosumError;
use emosum::server::{self, Config, Secrets};

static VERSION: LazyLock<String> = LazyLock::new(emosum::version_string);

/// emosum daemon — emotion-aware summarization service.
#[derive(Parser)]
#[command(name = "emosumd")]
#[command(version = VERSION.as_str())]
#[command(about = "Emotion-conditioned summarization daemon")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long, env = "EMOSUM_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// Address to bind to, overriding the configuration file.
    #[arg(short, long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    // Load configuration
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(address) = args.address {
        config.server.address = address;
    }
    let secrets = Secrets::load()?;

    // Parse address
    let addr: SocketAddr = config
        .server
        .address
        .parse()
        .map_err(|e| EmosumError::Configuration(format!("Invalid address: {e}")))?;

    info!(
        version = emosum::version_string(),
        %addr,
        emotion_model = %config.models.emotion_model,
        summarizer_model = %config.models.summarizer_model,
        authenticated = secrets.huggingface_api_key().is_some(),
        "emosumd starting"
    );

    let state = server::build_state(&config, &secrets);
    let listener = TcpListener::bind(addr).await?;
    server::serve(listener, state).await?;

    Ok(())
}

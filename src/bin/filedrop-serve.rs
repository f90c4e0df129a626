use clap::Parser;
use filedrop::host::{AssetServer, HostConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "filedrop-serve", about = "Serve the file drop widget", version)]
struct Args {
  #[arg(short, long, env = "FILEDROP_CONFIG")]
  config: Option<PathBuf>,
  #[arg(long, env = "FILEDROP_HOST")]
  host: Option<String>,
  #[arg(short, long, env = "FILEDROP_PORT")]
  port: Option<u16>,
  /// Directory holding the built WASM bundle
  #[arg(short, long, env = "FILEDROP_ASSETS")]
  assets: Option<PathBuf>,
  #[arg(long)]
  log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
  let args = Args::parse();

  // Load config: explicit path > auto-detect > defaults
  let mut config = if let Some(path) = &args.config {
    HostConfig::from_file(path)?
  } else {
    HostConfig::find_and_load()?.unwrap_or_default()
  };

  // CLI args override config file
  if let Some(host) = args.host {
    config.server.host = host;
  }
  if let Some(port) = args.port {
    config.server.port = port;
  }
  if let Some(dir) = args.assets {
    config.assets.dir = dir;
  }
  if let Some(level) = args.log_level {
    config.logging.level = level;
  }

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  AssetServer::new(config).run(shutdown_signal()).await?;
  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!("Failed to listen for Ctrl+C: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install SIGTERM handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => tracing::info!("Received SIGINT"),
    _ = terminate => tracing::info!("Received SIGTERM"),
  }
}

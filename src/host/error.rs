use std::path::PathBuf;

/// Errors raised while configuring or starting the host
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
  #[error("failed to read config {}: {source}", path.display())]
  ConfigRead {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid config {}: {source}", path.display())]
  ConfigParse {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },

  #[error("cannot bind {addr}: {source}")]
  Bind {
    addr: String,
    #[source]
    source: std::io::Error,
  },

  #[error("assets directory not found: {}", .0.display())]
  Assets(PathBuf),

  #[error(transparent)]
  Io(#[from] std::io::Error),
}

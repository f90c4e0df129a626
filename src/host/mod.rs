//! Static host that serves the compiled widget bundle

mod config;
mod error;
mod server;

pub use config::{AssetsSection, HostConfig, LoggingSection, ServerSection};
pub use error::ServeError;
pub use server::{router, AssetServer, STYLESHEET};

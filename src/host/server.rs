use super::{HostConfig, ServeError};
use axum::{
  http::{header, HeaderValue},
  response::IntoResponse,
  routing::get,
  Json, Router,
};
use serde::Serialize;
use std::future::Future;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// The page only loads its own WASM bundle and stylesheet
const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'self' 'wasm-unsafe-eval'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; connect-src 'self'; object-src 'none'; frame-ancestors 'none';";

/// Widget stylesheet, linked from the page as `/filedrop.css`
pub const STYLESHEET: &str = include_str!("../ui/styles.css");

#[derive(Serialize)]
struct Health {
  status: &'static str,
  version: &'static str,
}

async fn serve_css() -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "text/css")], STYLESHEET)
}

async fn health() -> Json<Health> {
  Json(Health {
    status: "ok",
    version: env!("CARGO_PKG_VERSION"),
  })
}

fn cors_layer(origins: &[String]) -> CorsLayer {
  if origins.is_empty() || origins.iter().any(|o| o == "*") {
    return CorsLayer::permissive();
  }
  let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
  CorsLayer::new()
    .allow_origin(origins)
    .allow_methods(Any)
    .allow_headers(Any)
}

fn set_header(name: header::HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
  SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

/// Routes for the stylesheet and health check; everything else comes from
/// the assets directory, falling back to the index page.
pub fn router(config: &HostConfig) -> Router {
  Router::new()
    .route("/filedrop.css", get(serve_css))
    .route("/health", get(health))
    .fallback_service(
      ServeDir::new(&config.assets.dir).not_found_service(ServeFile::new(config.index_path())),
    )
    .layer(TraceLayer::new_for_http())
    .layer(set_header(header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
    .layer(set_header(header::X_FRAME_OPTIONS, "DENY"))
    .layer(set_header(header::REFERRER_POLICY, "no-referrer"))
    .layer(set_header(header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY))
    .layer(cors_layer(&config.server.cors_origins))
}

pub struct AssetServer {
  config: HostConfig,
}

impl AssetServer {
  pub fn new(config: HostConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &HostConfig {
    &self.config
  }

  /// The bundle must be built before the host can serve it
  pub fn check_assets(&self) -> Result<(), ServeError> {
    if self.config.assets.dir.is_dir() {
      Ok(())
    } else {
      Err(ServeError::Assets(self.config.assets.dir.clone()))
    }
  }

  pub async fn run<F>(self, shutdown: F) -> Result<(), ServeError>
  where
    F: Future<Output = ()> + Send + 'static,
  {
    self.check_assets()?;
    if !self.config.index_path().is_file() {
      tracing::warn!(
        "Index page {} missing, unknown paths will 404",
        self.config.index_path().display()
      );
    }

    let addr = self.config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
      .await
      .map_err(|source| ServeError::Bind {
        addr: addr.clone(),
        source,
      })?;
    tracing::info!("Serving {} at http://{}", self.config.assets.dir.display(), addr);

    axum::serve(listener, router(&self.config))
      .with_graceful_shutdown(async move {
        shutdown.await;
        tracing::info!("Host shutting down");
      })
      .await?;
    Ok(())
  }
}

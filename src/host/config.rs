use super::ServeError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Replace `$VAR` and `${VAR}` with the variable's value.
/// Unset variables become empty; an unterminated `${` is kept as written.
fn expand_env_vars(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut rest = input;

  while let Some(pos) = rest.find('$') {
    out.push_str(&rest[..pos]);
    let after = &rest[pos + 1..];

    if let Some(braced) = after.strip_prefix('{') {
      match braced.find('}') {
        Some(end) => {
          out.push_str(&std::env::var(&braced[..end]).unwrap_or_default());
          rest = &braced[end + 1..];
        }
        None => {
          out.push_str(&rest[pos..]);
          rest = "";
        }
      }
      continue;
    }

    let name_len = after
      .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
      .unwrap_or(after.len());
    if name_len == 0 {
      out.push('$');
    } else {
      out.push_str(&std::env::var(&after[..name_len]).unwrap_or_default());
    }
    rest = &after[name_len..];
  }

  out.push_str(rest);
  out
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub assets: AssetsSection,
  #[serde(default)]
  pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  /// Allowed CORS origins; empty or `*` means any
  #[serde(default)]
  pub cors_origins: Vec<String>,
}
fn default_host() -> String {
  "127.0.0.1".into()
}
fn default_port() -> u16 {
  8080
}
impl Default for ServerSection {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
      cors_origins: Vec::new(),
    }
  }
}

/// Where the built WASM bundle lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsSection {
  #[serde(default = "default_assets_dir")]
  pub dir: PathBuf,
  /// Served for any path that is not a file (SPA fallback)
  #[serde(default = "default_index")]
  pub index: String,
}
fn default_assets_dir() -> PathBuf {
  PathBuf::from("target/ui")
}
fn default_index() -> String {
  "index.html".into()
}
impl Default for AssetsSection {
  fn default() -> Self {
    Self {
      dir: default_assets_dir(),
      index: default_index(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
  #[serde(default = "default_level")]
  pub level: String,
}
fn default_level() -> String {
  "info".into()
}
impl Default for LoggingSection {
  fn default() -> Self {
    Self {
      level: default_level(),
    }
  }
}

impl HostConfig {
  pub fn from_yaml(content: &str, origin: impl AsRef<Path>) -> Result<Self, ServeError> {
    serde_yaml::from_str(&expand_env_vars(content)).map_err(|source| ServeError::ConfigParse {
      path: origin.as_ref().to_path_buf(),
      source,
    })
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ServeError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ServeError::ConfigRead {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_yaml(&content, path)
  }

  /// Look for `filedrop.yaml` / `filedrop.yml` in the working directory
  pub fn find_and_load() -> Result<Option<Self>, ServeError> {
    Self::find_in(Path::new("."))
  }

  pub fn find_in(dir: &Path) -> Result<Option<Self>, ServeError> {
    for name in ["filedrop.yaml", "filedrop.yml"] {
      let p = dir.join(name);
      if p.exists() {
        tracing::info!("Loading config from {}", p.display());
        return Ok(Some(Self::from_file(&p)?));
      }
    }
    Ok(None)
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.server.host, self.server.port)
  }

  pub fn index_path(&self) -> PathBuf {
    self.assets.dir.join(&self.assets.index)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_expand_braced() {
    std::env::set_var("FILEDROP_TEST_BRACED", "9000");
    assert_eq!(expand_env_vars("port: ${FILEDROP_TEST_BRACED}"), "port: 9000");
  }

  #[test]
  fn test_expand_bare() {
    std::env::set_var("FILEDROP_TEST_BARE", "/srv/ui");
    assert_eq!(expand_env_vars("dir: $FILEDROP_TEST_BARE/dist"), "dir: /srv/ui/dist");
  }

  #[test]
  fn test_expand_unset_is_empty() {
    assert_eq!(expand_env_vars("a${FILEDROP_TEST_UNSET_XYZ}b"), "ab");
  }

  #[test]
  fn test_expand_leaves_lone_dollar() {
    assert_eq!(expand_env_vars("cost: $ 5"), "cost: $ 5");
    assert_eq!(expand_env_vars("end$"), "end$");
  }

  #[test]
  fn test_expand_unterminated_brace() {
    assert_eq!(expand_env_vars("x ${OPEN"), "x ${OPEN");
  }
}

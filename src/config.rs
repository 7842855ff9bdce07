use crate::error::{Result, TodoError};
use serde::Deserialize;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "TODO_BFF_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serve the GraphiQL IDE at `/graphiql`
    pub graphiql: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            graphiql: true,
        }
    }
}

impl ServerConfig {
    /// Resolves `host` to the address to bind. Accepts IPv4 and IPv6 literals,
    /// bracketed IPv6 and hostnames; the first resolved address wins.
    pub async fn socket_addr(&self) -> Result<SocketAddr> {
        let host = self.host.trim();
        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);

        tokio::net::lookup_host((host, self.port))
            .await
            .map_err(|e| TodoError::Config(format!("Cannot resolve host '{}': {}", self.host, e)))?
            .next()
            .ok_or_else(|| TodoError::Config(format!("Host '{}' has no addresses", self.host)))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub seed_demo_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub file_name: String,
    /// Used when `RUST_LOG` is unset
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            file_name: "todo_bff.log".to_string(),
            default_filter: "todo_bff=info,tower_http=info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Config {
    /// Loads configuration from `explicit`, then `$TODO_BFF_CONFIG`, then
    /// `./config.toml` when present, falling back to defaults. Environment
    /// overrides are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(|| {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                default.exists().then_some(default)
            });

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TodoError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `PORT`, `TODO_BFF_HOST`, `TODO_BFF_SEED` and `TODO_BFF_METRICS`
    /// as returned by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| TodoError::Config(format!("Invalid PORT value '{}'", port)))?;
        }
        if let Some(host) = lookup("TODO_BFF_HOST") {
            self.server.host = host;
        }
        if let Some(seed) = lookup("TODO_BFF_SEED") {
            self.store.seed_demo_data = parse_flag("TODO_BFF_SEED", &seed)?;
        }
        if let Some(metrics) = lookup("TODO_BFF_METRICS") {
            self.metrics.enabled = parse_flag("TODO_BFF_METRICS", &metrics)?;
        }
        Ok(())
    }

    /// `host:port` for display, with IPv6 literals bracketed
    pub fn bind_address(&self) -> String {
        match self.server.host.trim().parse::<IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.server.port).to_string(),
            Err(_) => format!("{}:{}", self.server.host, self.server.port),
        }
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(TodoError::Config(format!(
            "Invalid boolean for {}: '{}'",
            name, other
        ))),
    }
}

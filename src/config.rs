// Configuration module
// Startup-time settings: listen address, served directory, logging switches.
// Nothing here is reconfigurable at runtime.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Served-directory configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Document root. Defaults to the process working directory.
    pub root: Option<PathBuf>,
    /// File names tried, in order, when a directory is requested.
    pub index_files: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Config {
    /// Load configuration using the default file name "config.toml".
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension),
    /// layered under `SERVER_`-prefixed environment variables. The file is
    /// optional; defaults cover every key.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("files.index_files", vec!["index.html", "index.htm"])?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Resolve the document root: the configured path, or the process
    /// working directory. Canonicalized so the traversal guard has a
    /// stable prefix to compare against.
    pub fn root_dir(&self) -> std::io::Result<PathBuf> {
        let root = match &self.files.root {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };
        root.canonicalize()
    }
}

/// Immutable per-process state shared with every request handler.
///
/// `root` must be canonical; the traversal guard compares resolved
/// paths against it by prefix.
pub struct ServerState {
    pub root: PathBuf,
    pub index_files: Vec<String>,
    pub access_log: bool,
}

impl ServerState {
    pub fn new(config: &Config, root: PathBuf) -> Self {
        Self {
            root,
            index_files: config.files.index_files.clone(),
            access_log: config.logging.access_log,
        }
    }
}

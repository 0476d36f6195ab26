use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Path of the config file when `KIOSK_CONFIG` is not set.
const DEFAULT_CONFIG_PATH: &str = "kiosk.yaml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the listener binds to, e.g. "127.0.0.1:8080".
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StaticFilesConfig {
    /// Document root. Every served file must resolve beneath it.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File served when a request path names a directory.
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Upper bound for the single socket read per connection. Requests
    /// larger than this are truncated.
    #[serde(default = "default_read_buffer_size")]
    pub read_buffer_size: usize,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from("www")
}

fn default_index_file() -> String {
    "index.html".to_string()
}

fn default_read_buffer_size() -> usize {
    4096
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            index_file: default_index_file(),
            read_buffer_size: default_read_buffer_size(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `KIOSK_CONFIG`
    /// (default `kiosk.yaml`). A missing file yields the defaults; a file
    /// that exists but does not parse is an error. The `LISTEN` environment
    /// variable overrides the bind address either way.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("KIOSK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_yaml(&contents)
                .with_context(|| format!("invalid config file {}", path))?,
            Err(_) => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = listen_addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }
}

use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Server configuration supplied by the caller at construction time.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the listening socket binds to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Resource an empty or `/` request path is rewritten to before routing.
    #[serde(default = "default_resource")]
    pub default_resource: String,

    /// Root directory the static file handler serves from.
    #[serde(default = "default_static_root")]
    pub static_root: PathBuf,
}

fn default_port() -> u16 {
    8080
}

fn default_resource() -> String {
    "/index.html".to_string()
}

fn default_static_root() -> PathBuf {
    PathBuf::from("static")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            default_resource: default_resource(),
            static_root: default_static_root(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn load() -> Self {
        let defaults = Config::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let default_resource = std::env::var("DEFAULT_RESOURCE")
            .unwrap_or(defaults.default_resource);

        let static_root = std::env::var("STATIC_ROOT")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_root);

        Self {
            port,
            default_resource,
            static_root,
        }
    }

    /// Loads configuration from a YAML file.
    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let cfg = serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        Ok(cfg)
    }
}

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Built frontend (`trunk build` output)
    pub dist_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 8000
dist_dir = "dist"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Loads once, later calls return the same config
pub fn init_config() -> anyhow::Result<&'static Config> {
    CONFIG.get_or_try_init(load_config)
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid host/port {}:{}: {e}", self.host, self.port))?;
        Ok(addr)
    }
}

/// Directory with the built frontend
///
/// Relative paths are tried against the working directory first (`cargo run`
/// from the workspace root), then against the executable directory.
pub fn get_dist_path(config: &Config) -> PathBuf {
    let dist = Path::new(&config.server.dist_dir);

    if dist.is_absolute() || dist.exists() {
        return dist.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dist);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    dist.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.dist_dir, "dist");
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "0.0.0.0:8000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_custom_port() {
        let config = parse_config(
            r#"
[server]
host = "127.0.0.1"
port = 9090
dist_dir = "/srv/pharma"
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(get_dist_path(&config), PathBuf::from("/srv/pharma"));
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[database]\npath = \"x\"").is_err());
    }

    #[test]
    fn test_bad_host_is_reported() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        config.server.host = "not a host".into();
        assert!(config.server.socket_addr().is_err());
    }
}

//! Roster API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                    | Default                           |
//! |-----------------------------|-----------------------------------|
//! | `ROSTER_BIND_ADDR`          | `127.0.0.1`                       |
//! | `ROSTER_HTTP_PORT`          | `3000`                            |
//! | `ROSTER_DB_PATH`            | platform data dir + `roster.db`   |
//! | `ROSTER_DB_MAX_CONNECTIONS` | `5`                               |
//! | `ROSTER_CORS_ORIGIN`        | unset: any origin is allowed      |

use directories::ProjectDirs;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use roster_db::DbConfig;

/// Roster API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface the HTTP server binds to
    pub bind_addr: IpAddr,

    /// HTTP server port
    pub http_port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Pool size for the database
    pub db_max_connections: u32,

    /// Single origin allowed by CORS; `None` allows any origin
    pub cors_origin: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    ///
    /// Kept separate from [`ApiConfig::load`] so tests don't touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("ROSTER_BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("ROSTER_BIND_ADDR".to_string()))?;

        let http_port = lookup("ROSTER_HTTP_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("ROSTER_HTTP_PORT".to_string()))?;

        let database_path = match lookup("ROSTER_DB_PATH") {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_database_path()?,
        };

        let db_max_connections: u32 = lookup("ROSTER_DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("ROSTER_DB_MAX_CONNECTIONS".to_string()))?;

        if db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "ROSTER_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        let cors_origin = lookup("ROSTER_CORS_ORIGIN").filter(|origin| !origin.trim().is_empty());

        Ok(ApiConfig {
            bind_addr,
            http_port,
            database_path,
            db_max_connections,
            cors_origin,
        })
    }

    /// Socket address the server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }

    /// Database pool settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).max_connections(self.db_max_connections)
    }
}

/// Determines the default database file location.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.roster.roster/roster.db`
/// - **Windows**: `%APPDATA%\roster\roster\data\roster.db`
/// - **Linux**: `~/.local/share/roster/roster.db`
fn default_database_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("com", "roster", "roster").ok_or_else(|| {
        ConfigError::MissingRequired("ROSTER_DB_PATH (no home directory found)".to_string())
    })?;

    let data_dir = proj_dirs.data_dir();

    std::fs::create_dir_all(data_dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {}", data_dir.display(), e)))?;

    Ok(data_dir.join("roster.db"))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Could not create data directory {0}")]
    DataDir(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup_from(&[("ROSTER_DB_PATH", "/tmp/roster.db")]))
            .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.database_path, PathBuf::from("/tmp/roster.db"));
        assert_eq!(config.db_max_connections, 5);
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("ROSTER_BIND_ADDR", "0.0.0.0"),
            ("ROSTER_HTTP_PORT", "8080"),
            ("ROSTER_DB_PATH", "/srv/roster.db"),
            ("ROSTER_DB_MAX_CONNECTIONS", "12"),
            ("ROSTER_CORS_ORIGIN", "http://localhost:5173"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.db_config().max_connections, 12);
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:5173"));
    }

    #[test]
    fn test_invalid_values() {
        let err = ApiConfig::from_lookup(lookup_from(&[
            ("ROSTER_DB_PATH", "/tmp/roster.db"),
            ("ROSTER_HTTP_PORT", "eighty"),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for ROSTER_HTTP_PORT");

        let err = ApiConfig::from_lookup(lookup_from(&[
            ("ROSTER_DB_PATH", "/tmp/roster.db"),
            ("ROSTER_DB_MAX_CONNECTIONS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }
}

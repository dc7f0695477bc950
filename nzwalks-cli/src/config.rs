//! Layered configuration
//!
//! Precedence, lowest first: built-in defaults, the TOML file
//! (`--config` or `~/.nzwalks/config.toml`), environment (`.env` included),
//! command-line flags.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use nzwalks_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use nzwalks_server::http::ServerConfig;

/// Contents of the config file; every key is optional.
///
/// ```toml
/// [server]
/// bind = "0.0.0.0:5080"
/// cors_permissive = false
///
/// [database]
/// url = "postgres://localhost/nzwalks"
/// max_connections = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

impl FileConfig {
    /// Default config file path: ~/.nzwalks/config.toml
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".nzwalks/config.toml")
    }

    /// Load an explicit path (must exist) or the default path (optional).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::from_path(&path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config = toml::from_str(&content)
            .context(format!("Failed to parse config file (invalid TOML): {:?}", path))?;
        tracing::debug!(path = %path.display(), "config file loaded");
        Ok(config)
    }
}

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: bool,
    pub database_url: Option<String>,
    pub max_connections: Option<u32>,
}

/// Fully resolved settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl Settings {
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Self {
        let defaults = ServerConfig::default();

        Self {
            server: ServerConfig {
                bind_addr: overrides
                    .bind
                    .or(file.server.bind)
                    .unwrap_or(defaults.bind_addr),
                cors_permissive: overrides.cors_permissive
                    || file.server.cors_permissive.unwrap_or(defaults.cors_permissive),
            },
            database_url: overrides.database_url.or(file.database.url),
            max_connections: overrides
                .max_connections
                .or(file.database.max_connections)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        }
    }

    /// Database URL, or an actionable error when none was configured.
    pub fn require_database_url(&self) -> Result<&str> {
        self.database_url.as_deref().context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, \
             or [database].url in ~/.nzwalks/config.toml",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file_or_flags() {
        let settings = Settings::resolve(FileConfig::default(), Overrides::default());
        assert_eq!(settings.server.bind_addr, ServerConfig::default().bind_addr);
        assert!(!settings.server.cors_permissive);
        assert_eq!(settings.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(settings.require_database_url().is_err());
    }

    #[test]
    fn flags_override_file() {
        let file = FileConfig {
            server: ServerSection {
                bind: Some("0.0.0.0:8080".parse().unwrap()),
                cors_permissive: Some(true),
            },
            database: DatabaseSection {
                url: Some("postgres://file/nzwalks".into()),
                max_connections: Some(20),
            },
        };
        let overrides = Overrides {
            bind: Some("127.0.0.1:9000".parse().unwrap()),
            database_url: Some("postgres://flag/nzwalks".into()),
            ..Overrides::default()
        };

        let settings = Settings::resolve(file, overrides);
        assert_eq!(settings.server.bind_addr.port(), 9000);
        assert!(settings.server.cors_permissive);
        assert_eq!(settings.require_database_url().unwrap(), "postgres://flag/nzwalks");
        assert_eq!(settings.max_connections, 20);
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nbind = \"0.0.0.0:5081\"\n\n[database]\nurl = \"postgres://localhost/walks\""
        )
        .unwrap();

        let config = FileConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server.bind.map(|a| a.port()), Some(5081));
        assert_eq!(config.database.url.as_deref(), Some("postgres://localhost/walks"));
        assert_eq!(config.database.max_connections, None);
    }

    #[test]
    fn rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 80").unwrap();

        assert!(FileConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}

//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! ```text
//! database path:   --db  >  TALLY_DB_PATH  >  <platform data dir>/tally.db
//! pool size:       TALLY_DB_MAX_CONNECTIONS  (default 5)
//! acquire timeout: TALLY_DB_TIMEOUT_SECS     (default 30)
//! ```

use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tally_db::DbConfig;

pub const DB_PATH_VAR: &str = "TALLY_DB_PATH";
pub const MAX_CONNECTIONS_VAR: &str = "TALLY_DB_MAX_CONNECTIONS";
pub const TIMEOUT_SECS_VAR: &str = "TALLY_DB_TIMEOUT_SECS";

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file
    pub db_path: PathBuf,

    /// Pool size
    pub max_connections: u32,

    /// How long to wait for a connection
    pub connect_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `db_override` is the `--db` flag and wins over `TALLY_DB_PATH`.
    pub fn load(db_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::from_lookup(db_override, |key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(db_override: Option<PathBuf>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match db_override.or_else(|| lookup(DB_PATH_VAR).map(PathBuf::from)) {
            Some(path) => path,
            None => default_db_path()?,
        };

        let config = AppConfig {
            db_path,

            max_connections: lookup(MAX_CONNECTIONS_VAR)
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue(MAX_CONNECTIONS_VAR.to_string()))?,

            connect_timeout: lookup(TIMEOUT_SECS_VAR)
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidValue(TIMEOUT_SECS_VAR.to_string()))?,
        };

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue(MAX_CONNECTIONS_VAR.to_string()));
        }

        Ok(config)
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.db_path)
            .max_connections(self.max_connections)
            .connect_timeout(self.connect_timeout)
    }
}

/// Platform data directory path, created if missing.
///
/// - **Linux**: `~/.local/share/tally/tally.db`
/// - **macOS**: `~/Library/Application Support/tally/tally.db`
/// - **Windows**: `%APPDATA%\tally\data\tally.db`
fn default_db_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("", "", "tally").ok_or(ConfigError::NoDataDir)?;

    let data_dir = proj_dirs.data_dir();

    std::fs::create_dir_all(data_dir).map_err(|source| ConfigError::CreateDataDir {
        path: data_dir.to_path_buf(),
        source,
    })?;

    Ok(data_dir.join("tally.db"))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not determine app data directory; pass --db or set TALLY_DB_PATH")]
    NoDataDir,

    #[error("Could not create data directory {}: {source}", path.display())]
    CreateDataDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_env_path_and_defaults() {
        let env = vars(&[(DB_PATH_VAR, "/data/shop.db")]);

        let config = AppConfig::from_lookup(None, |k| env.get(k).cloned()).unwrap();

        assert_eq!(config.db_path, PathBuf::from("/data/shop.db"));
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_flag_beats_env() {
        let env = vars(&[(DB_PATH_VAR, "/data/shop.db")]);

        let config =
            AppConfig::from_lookup(Some(PathBuf::from("local.db")), |k| env.get(k).cloned())
                .unwrap();

        assert_eq!(config.db_path, PathBuf::from("local.db"));
    }

    #[test]
    fn test_pool_settings_from_env() {
        let env = vars(&[
            (DB_PATH_VAR, "shop.db"),
            (MAX_CONNECTIONS_VAR, "2"),
            (TIMEOUT_SECS_VAR, "3"),
        ]);

        let config = AppConfig::from_lookup(None, |k| env.get(k).cloned()).unwrap();
        let db = config.db_config();

        assert_eq!(db.max_connections, 2);
        assert_eq!(db.connect_timeout, Duration::from_secs(3));
        assert_eq!(db.database_path, PathBuf::from("shop.db"));
    }

    #[test]
    fn test_invalid_values() {
        for (key, value) in [
            (MAX_CONNECTIONS_VAR, "many"),
            (MAX_CONNECTIONS_VAR, "0"),
            (TIMEOUT_SECS_VAR, "-1"),
        ] {
            let env = vars(&[(DB_PATH_VAR, "shop.db"), (key, value)]);

            let err = AppConfig::from_lookup(None, |k| env.get(k).cloned()).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue(ref v) if v == key));
        }
    }
}

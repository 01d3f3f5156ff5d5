use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the working directory unless absolute.
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Create missing parent directories of `path` before connecting.
    #[serde(default = "default_create_dirs")]
    pub create_dirs: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            create_dirs: default_create_dirs(),
        }
    }
}

impl DatabaseConfig {
    /// SQLite DSN for `path`; `mode=rwc` creates the file when absent.
    #[must_use]
    pub fn dsn(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path.display())
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("buildings.db")
}

fn default_create_dirs() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_is_relative_buildings_db() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, PathBuf::from("buildings.db"));
        assert!(config.create_dirs);
    }

    #[test]
    fn test_dsn_requests_create_mode() {
        let config = DatabaseConfig {
            path: PathBuf::from("/var/lib/buildings/data.db"),
            create_dirs: false,
        };
        assert_eq!(config.dsn(), "sqlite:///var/lib/buildings/data.db?mode=rwc");
    }
}

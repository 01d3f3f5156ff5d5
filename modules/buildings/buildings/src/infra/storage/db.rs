//! Persistence gateway over the SQLite file.
//!
//! There is no long-lived pool: every operation opens a single connection,
//! runs, and closes it again through [`Gateway::with_connection`].

use std::future::Future;
use std::path::Path;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info, warn};

use super::migrations::Migrator;
use crate::config::DatabaseConfig;

#[derive(Debug, Clone)]
pub struct Gateway {
    dsn: String,
}

impl Gateway {
    /// Prepare the gateway for `config`, creating parent directories of the
    /// database file when `create_dirs` is set.
    ///
    /// # Errors
    /// Returns an error if the parent directories cannot be created.
    pub fn new(config: &DatabaseConfig) -> std::io::Result<Self> {
        if config.create_dirs {
            prepare_parent_dir(&config.path)?;
        }
        Ok(Self { dsn: config.dsn() })
    }

    #[must_use]
    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    /// Open one connection to the store.
    ///
    /// # Errors
    /// Returns `DbErr` if the database file cannot be opened or created.
    pub async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        let mut opts = ConnectOptions::new(self.dsn.clone());
        opts.max_connections(1)
            .min_connections(0)
            .sqlx_logging(false);
        Database::connect(opts).await
    }

    /// Create the `buildings` table if it does not exist yet.
    ///
    /// # Errors
    /// Returns `DbErr` if the store cannot be opened or the statement fails.
    pub async fn initialize_schema(&self) -> Result<(), DbErr> {
        info!(dsn = %self.dsn, "Initializing buildings schema");
        self.with_connection(|conn| async move { Migrator::up(&conn, None).await })
            .await
    }

    /// Run `f` with a fresh connection and close it afterwards, whatever `f`
    /// returned.
    ///
    /// # Errors
    /// Returns the connect error, or whatever `f` returns.
    pub async fn with_connection<T, E, F, Fut>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(DatabaseConnection) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<DbErr>,
    {
        let conn = self.connect().await?;
        let result = f(conn.clone()).await;
        if let Err(e) = conn.close().await {
            warn!(error = %e, "Failed to close database connection");
        } else {
            debug!("Database connection released");
        }
        result
    }
}

fn prepare_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Statement};
    use tempfile::TempDir;

    fn config_in(dir: &TempDir, file: &str) -> DatabaseConfig {
        DatabaseConfig {
            path: dir.path().join(file),
            create_dirs: true,
        }
    }

    #[tokio::test]
    async fn test_initialize_schema_creates_file_and_table() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "nested/buildings.db");
        let gateway = Gateway::new(&config).unwrap();

        gateway.initialize_schema().await.unwrap();

        assert!(config.path.exists());
        let count = gateway
            .with_connection(|conn| async move {
                let backend = conn.get_database_backend();
                let row = conn
                    .query_one(Statement::from_string(
                        backend,
                        "SELECT COUNT(*) AS n FROM sqlite_master WHERE type = 'table' AND name = 'buildings'",
                    ))
                    .await?
                    .ok_or_else(|| DbErr::Custom("no row".to_owned()))?;
                row.try_get::<i64>("", "n")
            })
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_initialize_schema_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let gateway = Gateway::new(&config_in(&dir, "buildings.db")).unwrap();

        gateway.initialize_schema().await.unwrap();
        gateway.initialize_schema().await.unwrap();
    }

    #[tokio::test]
    async fn test_with_connection_returns_closure_error() {
        let dir = TempDir::new().unwrap();
        let gateway = Gateway::new(&config_in(&dir, "buildings.db")).unwrap();

        let result: Result<(), DbErr> = gateway
            .with_connection(|_conn| async move { Err(DbErr::Custom("boom".to_owned())) })
            .await;

        assert!(matches!(result, Err(DbErr::Custom(msg)) if msg == "boom"));
    }

    #[test]
    fn test_new_without_create_dirs_leaves_filesystem_alone() {
        let dir = TempDir::new().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("missing/buildings.db"),
            create_dirs: false,
        };

        let gateway = Gateway::new(&config).unwrap();

        assert!(!dir.path().join("missing").exists());
        assert!(gateway.dsn().ends_with("missing/buildings.db?mode=rwc"));
    }
}

//! Warehouse connection management.

use crate::error::{DatabaseError, Result};
use operario_core::{AppConfig, WarehouseConfig};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;

/// `SQLite` connection pool for the local metrics warehouse.
#[derive(Debug, Clone)]
pub struct Warehouse {
    pool: Pool<Sqlite>,
}

impl Warehouse {
    /// Open (or create) the warehouse at `path`.
    ///
    /// `":memory:"` gives an in-memory database, used by tests.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path_str = path
            .as_ref()
            .to_str()
            .ok_or_else(|| DatabaseError::Open("database path is not valid UTF-8".to_string()))?;

        let options = SqliteConnectOptions::from_str(path_str)
            .map_err(|e| DatabaseError::Open(format!("invalid connection string: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::Open(format!("failed to connect: {e}")))?;

        tracing::info!(path = path_str, "warehouse pool created");
        Ok(Self { pool })
    }

    /// Open the warehouse described by config, defaulting to
    /// `<data_dir>/metrics.db`.
    pub async fn from_config(config: &WarehouseConfig) -> Result<Self> {
        let path = match &config.database_path {
            Some(path) => path.clone(),
            None => AppConfig::data_dir()
                .map_err(|e| DatabaseError::Open(e.to_string()))?
                .join("metrics.db"),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DatabaseError::Open(format!("cannot create {}: {e}", parent.display())))?;
        }
        Self::new(path).await
    }

    /// Apply all pending migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DatabaseError::Migration(e.to_string()))?;
        tracing::info!("warehouse migrations applied");
        Ok(())
    }

    /// Underlying `SQLx` pool, for direct queries.
    #[must_use]
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Close the pool gracefully.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_warehouse() {
        let warehouse = Warehouse::new(":memory:").await.expect("create warehouse");
        warehouse.run_migrations().await.expect("run migrations");

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' \
             AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(warehouse.pool())
        .await
        .expect("query tables");
        assert_eq!(tables, vec!["run_log"]);
    }

    #[tokio::test]
    async fn test_migrations_idempotent() {
        let warehouse = Warehouse::new(":memory:").await.expect("create warehouse");
        warehouse.run_migrations().await.expect("first run");
        warehouse.run_migrations().await.expect("second run");
    }
}

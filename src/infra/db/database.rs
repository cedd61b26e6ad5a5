//! SQLite database setup and connection management for Stockroom
//! Resolves the database file, creates the schema, and hands out one
//! short-lived connection per operation.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::infra::app_config::{self, AppConfig};

pub const DB_PATH_ENV: &str = "STOCKROOM_DB_PATH";

const DB_FILE_NAME: &str = "products.db";

const SCHEMA_VERSION: i32 = 1;

/// Handle to the product database file.
///
/// Holds no open connection; every call to [`Database::connect`] opens a
/// fresh one that is closed when dropped.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Create or open the database at a specific path
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let db = Self { path };
        let conn = db.connect()?;
        Self::init(&conn)?;
        Ok(db)
    }

    /// Pick the database file: explicit path, then `STOCKROOM_DB_PATH`, then
    /// the config file, then the data directory.
    pub fn resolve_path(explicit: Option<PathBuf>, config: &AppConfig) -> PathBuf {
        Self::resolve_path_with(
            explicit,
            std::env::var_os(DB_PATH_ENV),
            config,
            &app_config::app_data_dir(),
        )
    }

    /// [`Database::resolve_path`] with the environment value and data
    /// directory supplied by the caller.
    pub fn resolve_path_with(
        explicit: Option<PathBuf>,
        env_path: Option<OsString>,
        config: &AppConfig,
        data_dir: &Path,
    ) -> PathBuf {
        explicit
            .or_else(|| env_path.map(PathBuf::from))
            .or_else(|| config.db_path.clone())
            .unwrap_or_else(|| data_dir.join(DB_FILE_NAME))
    }

    /// Get the default database path
    pub fn default_path() -> PathBuf {
        app_config::app_data_dir().join(DB_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection scoped to the caller.
    pub fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path)
            .with_context(|| format!("failed to open database at {}", self.path.display()))
    }

    pub fn product_repo(&self) -> crate::infra::db::repository::ProductRepository {
        crate::infra::db::repository::ProductRepository::new(self.clone())
    }

    /// Initialize database schema
    fn init(conn: &Connection) -> Result<()> {
        let existing_version: i32 =
            conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

        if existing_version == 0 {
            Self::create_schema(conn)?;
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        } else if existing_version > SCHEMA_VERSION {
            anyhow::bail!(
                "database schema version {} is newer than supported version {}",
                existing_version,
                SCHEMA_VERSION
            );
        }

        Ok(())
    }

    fn create_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                quantity INTEGER NOT NULL CHECK (quantity >= 0),
                date_created TEXT NOT NULL,
                date_updated TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }
}

//! SQLite persistence layer for the Roster user API.
//!
//! This crate provides the async data-access operations for user accounts
//! using SQLx with SQLite. Each operation returns `Result<_, ApiError>`:
//! the error value already carries the client-safe message and status
//! classification, so the HTTP boundary has a single uniform branch.
//!
//! # Example
//!
//! ```no_run
//! use database::{Database, NewUser, user};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:roster.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Register a user
//!     let input = NewUser {
//!         firstname: "Alice".to_string(),
//!         lastname: "Martin".to_string(),
//!         mail: "alice@example.com".to_string(),
//!         password: "correct horse".to_string(),
//!     };
//!     let created = user::create_user(db.pool(), &input).await?;
//!     println!("registered user {}", created.id);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod password;
pub mod user;

pub use error::{ApiError, ErrorKind, Result};
pub use models::{Credentials, NewUser, User, UserUpdate};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use thiserror::Error;

/// Errors from establishing the connection or applying migrations.
///
/// Startup-only: once the pool exists, operations report failures through
/// [`ApiError`] instead.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLx error (connection, configuration, etc.)
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `sqlite::memory:` for an in-memory database (tests).
    pub async fn connect(url: &str) -> std::result::Result<Self, DatabaseError> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(
        url: &str,
        pool_size: u32,
    ) -> std::result::Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is
    /// up to date.
    pub async fn migrate(&self) -> std::result::Result<(), DatabaseError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

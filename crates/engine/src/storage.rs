//! Opening the SQLite store.
//!
//! Every open switches the database to WAL journaling and runs the schema
//! migrations, which are idempotent.

use std::{path::Path, time::Duration};

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

use crate::ResultEngine;

const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Open a private in-memory store.
///
/// The database only lives as long as a connection to it is open, so the
/// pool holds exactly one connection and never recycles it.
pub async fn open_memory() -> ResultEngine<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .max_lifetime(MEMORY_CONNECTION_LIFETIME)
        .idle_timeout(MEMORY_CONNECTION_LIFETIME);
    open(options).await
}

/// Open (or create) the store at `path` with a pool of `max_connections`.
pub async fn open_file(
    path: impl AsRef<Path>,
    max_connections: u32,
) -> ResultEngine<DatabaseConnection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut options = ConnectOptions::new(format!("sqlite:{}?mode=rwc", path.display()));
    options.max_connections(max_connections.max(1));
    open(options).await
}

async fn open(mut options: ConnectOptions) -> ResultEngine<DatabaseConnection> {
    options.sqlx_logging(false);
    let db = Database::connect(options).await?;
    db.execute_unprepared("PRAGMA journal_mode=WAL").await?;
    Migrator::up(&db, None).await?;
    tracing::debug!("ledger store ready");
    Ok(db)
}

// Database layer — SQLite storage for the keyword ranking table.
//
// We use rusqlite with the "bundled" feature so there's no system SQLite
// dependency. The database file lives wherever HEADLINER_DB_PATH points
// (defaults to ./headliner.db).

pub mod models;
pub mod queries;
pub mod schema;
pub mod sqlite;
pub mod traits;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub use traits::Database;

/// Open (or create) the database, run migrations, and wrap it in the
/// Database trait. Called by `headliner init` and by any command that may
/// run before the file exists.
pub fn initialize(db_path: &str) -> Result<Arc<dyn Database>> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for database: {db_path}"))?;
        }
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {db_path}"))?;

    // WAL keeps readers unblocked while an update cycle swaps the table
    conn.pragma_update(None, "journal_mode", "WAL")?;

    schema::create_tables(&conn)?;

    Ok(Arc::new(sqlite::SqliteDatabase::new(conn)))
}

/// Open an existing database (fails if it doesn't exist yet).
pub fn open(db_path: &str) -> Result<Arc<dyn Database>> {
    if !Path::new(db_path).exists() {
        anyhow::bail!("Database not found at {db_path}. Run `headliner init` first.");
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {db_path}"))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;
    schema::create_tables(&conn)?;

    Ok(Arc::new(sqlite::SqliteDatabase::new(conn)))
}

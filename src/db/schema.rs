// Database schema — table creation and migrations.
//
// A `schema_version` table tracks which migrations have run; each migration
// is a function that executes its SQL exactly once.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
///
/// Idempotent — safe to call on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Tracks schema version for migrations
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- The keyword ranking table, fully replaced each update cycle
        CREATE TABLE IF NOT EXISTS keyword_rankings (
            keyword TEXT PRIMARY KEY,
            frequency INTEGER NOT NULL DEFAULT 0,
            closeness REAL NOT NULL DEFAULT 0.0,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Update cycle bookkeeping (last run time, last document count)
        CREATE TABLE IF NOT EXISTS update_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Rankings are read ordered by closeness
        CREATE INDEX IF NOT EXISTS idx_rankings_closeness
            ON keyword_rankings(closeness);
        ",
    )
    .context("Failed to create database tables")?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [1],
    )?;

    // Migration v2: carry the source link and raw rank score alongside each
    // row. The first schema stored only what the dashboard displayed
    // (keyword, frequency, closeness).
    run_migration(conn, 2, |c| {
        c.execute_batch(
            "ALTER TABLE keyword_rankings ADD COLUMN link TEXT NOT NULL DEFAULT '';
             ALTER TABLE keyword_rankings ADD COLUMN rank_score REAL NOT NULL DEFAULT 0.0;",
        )
    })?;

    Ok(())
}

/// Run a migration if it hasn't been applied yet.
fn run_migration<F>(conn: &Connection, version: i64, migrate: F) -> Result<()>
where
    F: FnOnce(&Connection) -> rusqlite::Result<()>,
{
    let already_applied: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM schema_version WHERE version = ?1",
        [version],
        |row| row.get(0),
    )?;

    if !already_applied {
        migrate(conn).with_context(|| format!("Migration v{version} failed"))?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )?;
    }

    Ok(())
}

/// Count the number of tables in the database (useful for init confirmation).
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

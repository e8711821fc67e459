// Database queries — all SQL lives here, behind plain Rust interfaces.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::RankingRow;

// --- Keyword rankings ---

/// Atomically replace the ranking table with this cycle's rows.
///
/// DELETE + INSERT run inside one transaction: readers either see the old
/// table or the new one, never a mix, and a failed write rolls back to the
/// previously committed table.
pub fn replace_rankings(conn: &mut Connection, rows: &[RankingRow]) -> Result<()> {
    let tx = conn
        .transaction()
        .context("Failed to open ranking replacement transaction")?;

    tx.execute("DELETE FROM keyword_rankings", [])?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO keyword_rankings (keyword, frequency, closeness, link, rank_score, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, datetime('now'))",
        )?;
        for row in rows {
            stmt.execute(params![
                row.keyword,
                row.frequency,
                row.closeness,
                row.link,
                row.rank_score,
            ])?;
        }
    }

    tx.commit()
        .context("Failed to commit ranking replacement")?;
    Ok(())
}

/// All ranking rows, highest closeness first.
pub fn get_rankings(conn: &Connection) -> Result<Vec<RankingRow>> {
    let mut stmt = conn.prepare(
        "SELECT keyword, frequency, closeness, link, rank_score, updated_at
         FROM keyword_rankings
         ORDER BY closeness DESC, keyword ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(RankingRow {
            keyword: row.get(0)?,
            frequency: row.get(1)?,
            closeness: row.get(2)?,
            link: row.get(3)?,
            rank_score: row.get(4)?,
            updated_at: row.get(5)?,
        })
    })?;

    let mut rankings = Vec::new();
    for row in rows {
        rankings.push(row?);
    }
    Ok(rankings)
}

/// Number of rows currently in the ranking table.
pub fn ranking_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM keyword_rankings", [], |row| {
        row.get(0)
    })?;
    Ok(count)
}

// --- Update state ---

/// Get an update-cycle state value by key (e.g., "last_update_at").
pub fn get_update_state(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM update_state WHERE key = ?1")?;
    let result = stmt.query_row(params![key], |row| row.get(0)).optional()?;
    Ok(result)
}

/// Set an update-cycle state value (upsert).
pub fn set_update_state(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO update_state (key, value, updated_at)
         VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

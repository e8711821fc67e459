// Database trait — backend-agnostic async interface for all DB operations.
//
// Implementor: SqliteDatabase (wraps rusqlite). All methods are async so a
// native-async backend could sit behind the same interface; the SQLite
// backend does its synchronous work under a tokio Mutex.

use anyhow::Result;
use async_trait::async_trait;

use super::models::RankingRow;

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Keyword rankings ---

    /// Atomically replace the ranking table with this cycle's rows.
    /// Readers never observe a half-updated table; on failure the previous
    /// table remains committed and queryable.
    async fn replace_rankings(&self, rows: &[RankingRow]) -> Result<()>;

    /// All ranking rows, highest closeness first.
    async fn get_rankings(&self) -> Result<Vec<RankingRow>>;

    /// Number of rows currently in the ranking table.
    async fn ranking_count(&self) -> Result<i64>;

    // --- Update state ---

    /// Get an update-cycle state value by key (e.g., "last_update_at").
    async fn get_update_state(&self, key: &str) -> Result<Option<String>>;

    /// Set an update-cycle state value (upsert).
    async fn set_update_state(&self, key: &str, value: &str) -> Result<()>;
}

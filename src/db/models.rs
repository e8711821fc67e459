// Data models — Rust structs that map to database rows.
//
// Separate from the queries so other modules can use them without depending
// on rusqlite directly.

use serde::{Deserialize, Serialize};

/// One row of the persisted keyword ranking table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRow {
    pub keyword: String,
    /// Corpus-wide occurrence count from the cycle that produced this row.
    pub frequency: u32,
    /// TOPSIS closeness coefficient in [0, 1].
    pub closeness: f64,
    /// Graph rank score from the solver.
    pub rank_score: f64,
    /// Source article URL; empty when no title matched the keyword.
    pub link: String,
    /// Set by the database on write.
    pub updated_at: String,
}

// Feed ingestion — RSS/Atom retrieval and parsing at the corpus boundary.
//
// Documents are an immutable snapshot for one ranking cycle; nothing here is
// persisted or shared across cycles.

pub mod client;
pub mod parse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ingested news item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Raw, unnormalized headline. May be empty — such documents simply
    /// contribute no tokens.
    pub title: String,
    /// Article URL, or empty when the feed entry carried none.
    pub link: String,
    pub published: Option<DateTime<Utc>>,
}

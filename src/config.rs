use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file is loaded
/// automatically at startup via dotenvy. Loaded once at process start and
/// passed explicitly into every pipeline call — nothing here is mutated at
/// request time.
pub struct Config {
    pub db_path: String,
    /// Feed source URLs (HEADLINER_FEEDS, comma-separated).
    pub feeds: Vec<String>,
    /// Optional stopword file extending the built-in list.
    pub stopwords_path: Option<PathBuf>,
    /// Gemini API key — only needed for the `summarize` command.
    pub gemini_api_key: String,
    /// How many feed sources to fetch concurrently.
    pub fetch_concurrency: usize,
    /// Per-source fetch timeout in seconds; slower sources are skipped.
    pub fetch_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only the feed list is required for anything beyond `init`, `report`,
    /// and `status` — and that is checked per command via `require_feeds`.
    pub fn load() -> Result<Self> {
        let feeds = env::var("HEADLINER_FEEDS")
            .unwrap_or_default()
            .split(',')
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect();

        let fetch_concurrency = env::var("HEADLINER_FETCH_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4);

        let fetch_timeout_secs = env::var("HEADLINER_FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            db_path: env::var("HEADLINER_DB_PATH").unwrap_or_else(|_| "./headliner.db".to_string()),
            feeds,
            stopwords_path: env::var("HEADLINER_STOPWORDS").map(PathBuf::from).ok(),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            fetch_concurrency,
            fetch_timeout_secs,
        })
    }

    /// Check that at least one feed source is configured.
    /// Call this before any operation that assembles a corpus.
    pub fn require_feeds(&self) -> Result<()> {
        if self.feeds.is_empty() {
            anyhow::bail!(
                "HEADLINER_FEEDS not set. Add a comma-separated list of RSS/Atom URLs\n\
                 to your .env file. See .env.example for the required variables."
            );
        }
        Ok(())
    }

    /// Check that the Gemini API key is configured.
    /// Call this before any operation that needs summarization.
    pub fn require_gemini(&self) -> Result<()> {
        if self.gemini_api_key.is_empty() {
            anyhow::bail!(
                "GEMINI_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}

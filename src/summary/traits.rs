// Summarizer trait — the swap-ready abstraction.
//
// Summarization is a boundary capability: the ranking core never calls it.
// The default implementation talks to the Gemini API; tests and keyless runs
// use NoopSummarizer, which refuses rather than fabricating output.

use anyhow::Result;
use async_trait::async_trait;

/// Produces a short prose digest of a set of headlines. Implementations are
/// async because production providers sit behind HTTP APIs.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, headlines: &[String]) -> Result<String>;
}

/// Refusing summarizer used when no API key is configured.
/// Bails if actually called, so missing config never yields fake summaries.
pub struct NoopSummarizer;

#[async_trait]
impl Summarizer for NoopSummarizer {
    async fn summarize(&self, _headlines: &[String]) -> Result<String> {
        anyhow::bail!("NoopSummarizer should never be called — set GEMINI_API_KEY to enable summaries")
    }
}

// Feed HTTP client — bounded fan-out over configured sources.
//
// A slow or unreachable source is skipped with a warning rather than
// stalling the cycle; a partial corpus is an accepted degraded outcome.

use std::time::Duration;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use super::parse::parse_documents;
use super::Document;

pub struct FeedClient {
    client: reqwest::Client,
}

impl FeedClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("headliner/0.1 (news-keyword-ranking)")
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch and parse a single feed source.
    pub async fn fetch_source(&self, url: &str) -> Result<Vec<Document>> {
        debug!(url, "Fetching feed");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed for {url}"))?
            .error_for_status()
            .with_context(|| format!("HTTP error for {url}"))?;

        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read body from {url}"))?;

        parse_documents(&body).with_context(|| format!("Failed to parse feed from {url}"))
    }

    /// Fetch every source with bounded concurrency and a per-source timeout.
    ///
    /// Failures and timeouts drop that source's documents and nothing else.
    /// The returned list preserves source order (and entry order within a
    /// source), so "first matching document" is well-defined downstream.
    pub async fn fetch_all(
        &self,
        sources: &[String],
        concurrency: usize,
        timeout: Duration,
    ) -> Vec<Document> {
        let pb = ProgressBar::new(sources.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Feeds [{bar:30}] {pos}/{len} ({eta})")
                .unwrap(),
        );

        let mut fetched: Vec<(usize, Vec<Document>)> = stream::iter(
            sources.iter().enumerate().map(|(idx, url)| {
                let pb = pb.clone();
                async move {
                    let result = tokio::time::timeout(timeout, self.fetch_source(url)).await;
                    pb.inc(1);
                    let docs = match result {
                        Ok(Ok(docs)) => {
                            debug!(url, count = docs.len(), "Feed fetched");
                            docs
                        }
                        Ok(Err(e)) => {
                            warn!(url, error = %e, "Feed fetch failed, skipping source");
                            Vec::new()
                        }
                        Err(_) => {
                            warn!(url, timeout_secs = timeout.as_secs(), "Feed fetch timed out, skipping source");
                            Vec::new()
                        }
                    };
                    (idx, docs)
                }
            }),
        )
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;
        pb.finish_and_clear();

        fetched.sort_by_key(|&(idx, _)| idx);
        let documents: Vec<Document> = fetched.into_iter().flat_map(|(_, docs)| docs).collect();

        info!(
            sources = sources.len(),
            documents = documents.len(),
            "Corpus assembled"
        );
        documents
    }
}

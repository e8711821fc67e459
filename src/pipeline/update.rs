// The update cycle: fetch feeds → tokenize → rank → TOPSIS → persist.
//
// Each cycle is a pure computation over an immutable corpus snapshot; the
// only side effect is the atomic ranking-table swap at the end. Degraded
// inputs (unreachable sources, sparse corpus, non-convergence) shrink or
// flag the result — only persistence failures surface as errors.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::models::RankingRow;
use crate::db::Database;
use crate::feeds::client::FeedClient;
use crate::normalize::traits::Tokenizer;
use crate::rank::{RankParams, WordRank};
use crate::scoring::criteria::{matrix_from_keywords, Criterion};
use crate::scoring::topsis;

/// What one cycle did, for display and logging.
pub struct UpdateReport {
    pub documents: usize,
    pub keywords: usize,
    /// False when the solver returned best-effort scores at max_iter.
    pub converged: bool,
    /// False for dry runs and when there was nothing to persist.
    pub persisted: bool,
}

/// Run one full update cycle. With `dry_run` the ranking is computed and
/// returned but the stored table is left untouched.
pub async fn run(
    config: &Config,
    db: &Arc<dyn Database>,
    tokenizer: &dyn Tokenizer,
    params: RankParams,
    criteria: &[Criterion],
    dry_run: bool,
) -> Result<(UpdateReport, Vec<RankingRow>)> {
    let client = FeedClient::new()?;
    let documents = client
        .fetch_all(
            &config.feeds,
            config.fetch_concurrency,
            Duration::from_secs(config.fetch_timeout_secs),
        )
        .await;

    if documents.is_empty() {
        warn!("Every feed source failed or returned nothing; this cycle ranks an empty corpus");
    }

    let rows = compute_rankings(&documents, tokenizer, &params, criteria);
    let extraction_converged = rows.converged;
    let ranking_rows = rows.rows;

    let persisted = if dry_run {
        info!("Dry run — ranking table left untouched");
        false
    } else {
        db.replace_rankings(&ranking_rows).await?;
        db.set_update_state("last_update_at", &Utc::now().to_rfc3339())
            .await?;
        db.set_update_state("last_document_count", &documents.len().to_string())
            .await?;
        true
    };

    Ok((
        UpdateReport {
            documents: documents.len(),
            keywords: ranking_rows.len(),
            converged: extraction_converged,
            persisted,
        },
        ranking_rows,
    ))
}

pub(crate) struct ComputedRankings {
    pub rows: Vec<RankingRow>,
    pub converged: bool,
}

/// The synchronous heart of the cycle: extraction plus TOPSIS fusion.
/// Rows come back in closeness order, ready for display or persistence.
pub(crate) fn compute_rankings(
    documents: &[crate::feeds::Document],
    tokenizer: &dyn Tokenizer,
    params: &RankParams,
    criteria: &[Criterion],
) -> ComputedRankings {
    let extraction = WordRank::new(params.clone()).extract(documents, tokenizer);

    let matrix = matrix_from_keywords(&extraction.keywords, criteria);
    let closeness = topsis::rank(&matrix);

    let by_text: HashMap<&str, &crate::rank::RankedKeyword> = extraction
        .keywords
        .iter()
        .map(|kw| (kw.text.as_str(), kw))
        .collect();

    let rows = closeness
        .into_iter()
        .filter_map(|row| {
            by_text.get(row.keyword.as_str()).map(|kw| RankingRow {
                keyword: kw.text.clone(),
                frequency: kw.frequency,
                closeness: row.closeness,
                rank_score: kw.score,
                link: kw.link.clone(),
                updated_at: String::new(),
            })
        })
        .collect();

    ComputedRankings {
        rows,
        converged: extraction.converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::Document;
    use crate::normalize::traits::WhitespaceTokenizer;
    use crate::scoring::criteria::default_criteria;

    fn doc(title: &str, link: &str) -> Document {
        Document {
            title: title.to_string(),
            link: link.to_string(),
            published: None,
        }
    }

    #[test]
    fn test_compute_on_empty_corpus_is_empty() {
        let computed = compute_rankings(
            &[],
            &WhitespaceTokenizer,
            &RankParams::default(),
            &default_criteria(),
        );
        assert!(computed.rows.is_empty());
        assert!(computed.converged);
    }

    #[test]
    fn test_compute_produces_linked_closeness_rows() {
        let docs = vec![
            doc("korea economy grows", "https://news.example/1"),
            doc("economy grows fast", "https://news.example/2"),
            doc("korea trade deficit", "https://news.example/3"),
        ];
        let params = RankParams {
            min_count: 1,
            ..RankParams::default()
        };
        let computed = compute_rankings(&docs, &WhitespaceTokenizer, &params, &default_criteria());

        assert!(!computed.rows.is_empty());
        let economy = computed
            .rows
            .iter()
            .find(|r| r.keyword == "economy")
            .expect("economy should be ranked");
        assert_eq!(economy.link, "https://news.example/1");
        assert_eq!(economy.frequency, 2);
        assert!(economy.rank_score > 0.0);
        for row in &computed.rows {
            assert!((0.0..=1.0).contains(&row.closeness));
        }
        // Rows arrive sorted by closeness descending.
        for pair in computed.rows.windows(2) {
            assert!(pair[0].closeness >= pair[1].closeness);
        }
    }
}

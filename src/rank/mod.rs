// The keyword ranking engine: substring graph → power iteration → maximal
// keyword selection → document linking.
//
// One parameterized pipeline covers every variant: behavior differences are
// carried by RankParams, not by separate code paths.

pub mod graph;
pub mod linker;
pub mod selector;
pub mod solver;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::feeds::Document;
use crate::normalize::traits::Tokenizer;

use graph::{GraphParams, SubstringGraph};
use solver::SolverParams;

/// Knobs for one ranking invocation. Defaults match the documented contract:
/// min_count=5, max_length=10, beta=0.85, max_iter=10, no size limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankParams {
    pub min_count: u32,
    pub max_length: usize,
    pub beta: f64,
    pub max_iter: usize,
    pub top_n: Option<usize>,
}

impl Default for RankParams {
    fn default() -> Self {
        Self {
            min_count: 5,
            max_length: 10,
            beta: 0.85,
            max_iter: 10,
            top_n: None,
        }
    }
}

impl RankParams {
    fn graph_params(&self) -> GraphParams {
        GraphParams {
            min_count: self.min_count,
            max_length: self.max_length,
        }
    }

    fn solver_params(&self) -> SolverParams {
        SolverParams {
            beta: self.beta,
            max_iter: self.max_iter,
            ..SolverParams::default()
        }
    }
}

/// A selected keyword with its rank score, corpus frequency, and source link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedKeyword {
    pub text: String,
    pub score: f64,
    pub frequency: u32,
    /// Link of the first article whose title contains the keyword;
    /// empty when no article matches.
    pub link: String,
}

/// The result of one ranking invocation.
pub struct Extraction {
    /// Selected keywords, highest score first. Empty for an empty or
    /// too-sparse corpus — a valid "no keywords" outcome.
    pub keywords: Vec<RankedKeyword>,
    /// False when the solver hit max_iter before converging; the scores are
    /// still the best-effort result.
    pub converged: bool,
    pub iterations: usize,
}

/// The ranking pipeline. Stateless between invocations: every call allocates
/// fresh graph and score structures, so independent invocations are safe to
/// run concurrently.
pub struct WordRank {
    params: RankParams,
}

impl Default for WordRank {
    fn default() -> Self {
        Self::new(RankParams::default())
    }
}

impl WordRank {
    pub fn new(params: RankParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RankParams {
        &self.params
    }

    /// Run the full pipeline over an immutable snapshot of the corpus.
    ///
    /// Titles are tokenized through the supplied capability; linking runs
    /// against the raw titles. Every degraded condition (empty corpus,
    /// nothing above min_count, non-convergence, unlinked keyword) produces
    /// a smaller or flagged result, never an error.
    pub fn extract(&self, docs: &[Document], tokenizer: &dyn Tokenizer) -> Extraction {
        let token_docs: Vec<Vec<String>> = docs
            .iter()
            .map(|doc| tokenizer.tokenize(&doc.title))
            .collect();

        let graph = SubstringGraph::build(&token_docs, &self.params.graph_params());
        if graph.is_empty() {
            info!(documents = docs.len(), "No candidates above min_count");
            return Extraction {
                keywords: Vec::new(),
                converged: true,
                iterations: 0,
            };
        }

        let ranked = solver::solve(&graph, &self.params.solver_params());
        if !ranked.converged {
            warn!(
                iterations = ranked.iterations,
                "Rank solver hit max_iter before convergence; using best-effort scores"
            );
        }

        let keywords = selector::select(&ranked.scores, self.params.top_n, selector::is_noise)
            .into_iter()
            .map(|(text, score)| {
                let frequency = graph.count_of(&text).unwrap_or(0);
                let link = linker::link_for(&text, docs);
                RankedKeyword {
                    text,
                    score,
                    frequency,
                    link,
                }
            })
            .collect::<Vec<_>>();

        info!(
            documents = docs.len(),
            candidates = graph.len(),
            keywords = keywords.len(),
            iterations = ranked.iterations,
            "Keyword extraction complete"
        );

        Extraction {
            keywords,
            converged: ranked.converged,
            iterations: ranked.iterations,
        }
    }
}

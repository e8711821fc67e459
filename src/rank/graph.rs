// Substring co-occurrence graph.
//
// Candidates are contiguous character substrings of each token (2 to
// max_length chars). A candidate survives if it occurs in at least min_count
// tokens across the corpus. Surviving candidates from adjacent tokens in the
// same document are connected by an edge whose weight counts how often that
// adjacency occurs.
//
// Nodes are stored sorted, so node ids are a stable ordering and everything
// downstream (solver, selector) is deterministic for a given corpus.

use std::collections::{BTreeSet, HashMap};

/// Parameters controlling candidate enumeration and filtering.
#[derive(Debug, Clone)]
pub struct GraphParams {
    /// Minimum corpus-wide occurrence count for a candidate to survive.
    pub min_count: u32,
    /// Maximum candidate length in characters.
    pub max_length: usize,
}

impl Default for GraphParams {
    fn default() -> Self {
        Self {
            min_count: 5,
            max_length: 10,
        }
    }
}

/// The weighted co-occurrence graph over surviving substring candidates.
pub struct SubstringGraph {
    /// Candidate texts, sorted lexicographically. Index = node id.
    nodes: Vec<String>,
    /// Corpus-wide occurrence count per node (number of tokens containing it).
    counts: Vec<u32>,
    /// Undirected adjacency: for each node, (neighbor id, weight) sorted by id.
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl SubstringGraph {
    /// Build the graph from per-document token sequences.
    ///
    /// An empty corpus, or a corpus where nothing reaches min_count, yields
    /// an empty graph — callers treat that as "no keywords", not a failure.
    pub fn build(docs: &[Vec<String>], params: &GraphParams) -> Self {
        // Pass 1: corpus-wide candidate counts. Each token occurrence
        // contributes each of its distinct substrings once.
        let mut counts: HashMap<String, u32> = HashMap::new();
        for doc in docs {
            for token in doc {
                for sub in substrings_of(token, params.max_length) {
                    *counts.entry(sub).or_insert(0) += 1;
                }
            }
        }

        // Survivors, sorted so node ids are stable across runs.
        let mut nodes: Vec<String> = counts
            .iter()
            .filter(|(_, &c)| c >= params.min_count)
            .map(|(s, _)| s.clone())
            .collect();
        nodes.sort();

        let index: HashMap<&str, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), i))
            .collect();
        let node_counts: Vec<u32> = nodes.iter().map(|s| counts[s]).collect();

        // Pass 2: edges between survivors of adjacent tokens.
        let mut edges: HashMap<(usize, usize), f64> = HashMap::new();
        for doc in docs {
            for pair in doc.windows(2) {
                let left = surviving_ids(&pair[0], params.max_length, &index);
                let right = surviving_ids(&pair[1], params.max_length, &index);
                for &a in &left {
                    for &b in &right {
                        if a == b {
                            continue;
                        }
                        let key = if a < b { (a, b) } else { (b, a) };
                        *edges.entry(key).or_insert(0.0) += 1.0;
                    }
                }
            }
        }

        let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); nodes.len()];
        for (&(a, b), &w) in &edges {
            adjacency[a].push((b, w));
            adjacency[b].push((a, w));
        }
        for neighbors in &mut adjacency {
            neighbors.sort_by_key(|&(id, _)| id);
        }

        Self {
            nodes,
            counts: node_counts,
            adjacency,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Candidate texts in node-id order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Corpus occurrence count for a node id.
    pub fn count(&self, id: usize) -> u32 {
        self.counts[id]
    }

    /// Corpus occurrence count for a candidate text, if it survived.
    pub fn count_of(&self, text: &str) -> Option<u32> {
        self.nodes
            .binary_search_by(|n| n.as_str().cmp(text))
            .ok()
            .map(|id| self.counts[id])
    }

    pub(crate) fn neighbors(&self, id: usize) -> &[(usize, f64)] {
        &self.adjacency[id]
    }
}

/// Distinct contiguous character substrings of a token, 2..=max_length chars.
///
/// Works on chars, not bytes, so multi-byte scripts never split mid-character.
/// Returned sorted (BTreeSet) so iteration order is stable.
fn substrings_of(token: &str, max_length: usize) -> BTreeSet<String> {
    let chars: Vec<char> = token.chars().collect();
    let n = chars.len();
    let mut out = BTreeSet::new();
    for start in 0..n {
        let longest = max_length.min(n - start);
        for len in 2..=longest {
            out.insert(chars[start..start + len].iter().collect());
        }
    }
    out
}

/// Node ids of a token's substrings that survived the min_count filter.
fn surviving_ids(
    token: &str,
    max_length: usize,
    index: &HashMap<&str, usize>,
) -> Vec<usize> {
    substrings_of(token, max_length)
        .iter()
        .filter_map(|s| index.get(s.as_str()).copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_corpus_yields_empty_graph() {
        let graph = SubstringGraph::build(&[], &GraphParams::default());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_min_count_filters_rare_candidates() {
        let docs = vec![doc(&["economy", "grows"]), doc(&["economy", "trade"])];
        let params = GraphParams {
            min_count: 2,
            max_length: 10,
        };
        let graph = SubstringGraph::build(&docs, &params);
        // "economy" occurs in two tokens; "grows" and "trade" only once each.
        assert_eq!(graph.count_of("economy"), Some(2));
        assert_eq!(graph.count_of("grows"), None);
        assert_eq!(graph.count_of("trade"), None);
    }

    #[test]
    fn test_everything_below_min_count_yields_empty_graph() {
        let docs = vec![doc(&["one", "two"])];
        let params = GraphParams {
            min_count: 5,
            max_length: 10,
        };
        let graph = SubstringGraph::build(&docs, &params);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_adjacent_tokens_are_linked() {
        let docs = vec![doc(&["korea", "economy"]), doc(&["korea", "economy"])];
        let params = GraphParams {
            min_count: 2,
            max_length: 10,
        };
        let graph = SubstringGraph::build(&docs, &params);

        let korea = graph
            .nodes()
            .iter()
            .position(|n| n == "korea")
            .expect("korea should survive");
        let economy = graph
            .nodes()
            .iter()
            .position(|n| n == "economy")
            .expect("economy should survive");

        let edge = graph
            .neighbors(korea)
            .iter()
            .find(|&&(id, _)| id == economy)
            .expect("korea and economy are adjacent tokens");
        // The pair co-occurs in both documents.
        assert!((edge.1 - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let docs = vec![doc(&["ab", "cd"]), doc(&["ab", "cd"])];
        let params = GraphParams {
            min_count: 2,
            max_length: 10,
        };
        let graph = SubstringGraph::build(&docs, &params);
        for a in 0..graph.len() {
            for &(b, w) in graph.neighbors(a) {
                let back = graph
                    .neighbors(b)
                    .iter()
                    .find(|&&(id, _)| id == a)
                    .expect("edges are undirected");
                assert!((back.1 - w).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn test_substrings_respect_char_boundaries() {
        // Hangul tokens must be sliced by character, never by byte.
        let subs = substrings_of("경제성장", 10);
        assert!(subs.contains("경제"));
        assert!(subs.contains("경제성장"));
        assert!(!subs.contains("경"));
    }

    #[test]
    fn test_substrings_capped_at_max_length() {
        let subs = substrings_of("abcdef", 3);
        assert!(subs.contains("abc"));
        assert!(!subs.contains("abcd"));
    }

    #[test]
    fn test_node_order_is_sorted() {
        let docs = vec![doc(&["zebra", "apple"]); 5];
        let graph = SubstringGraph::build(&docs, &GraphParams::default());
        let mut sorted = graph.nodes().to_vec();
        sorted.sort();
        assert_eq!(graph.nodes(), sorted.as_slice());
    }
}

// Criteria selection — which numeric signals feed the TOPSIS matrix.
//
// Variant behavior is configuration: a criteria set, not a separate
// pipeline per combination.

use serde::{Deserialize, Serialize};

use crate::rank::RankedKeyword;

use super::topsis::{CriteriaMatrix, CriteriaRow};

/// A named numeric signal attached to every selected keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Corpus-wide occurrence count.
    Frequency,
    /// Graph rank score from the solver.
    RankScore,
}

impl Criterion {
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Frequency => "frequency",
            Criterion::RankScore => "rank_score",
        }
    }

    fn value(&self, keyword: &RankedKeyword) -> f64 {
        match self {
            Criterion::Frequency => keyword.frequency as f64,
            Criterion::RankScore => keyword.score,
        }
    }
}

/// The default criteria set: frequency plus rank score.
pub fn default_criteria() -> Vec<Criterion> {
    vec![Criterion::Frequency, Criterion::RankScore]
}

/// Build the per-cycle criteria matrix from selected keywords.
pub fn matrix_from_keywords(keywords: &[RankedKeyword], criteria: &[Criterion]) -> CriteriaMatrix {
    CriteriaMatrix {
        criteria: criteria.iter().map(|c| c.name().to_string()).collect(),
        rows: keywords
            .iter()
            .map(|kw| CriteriaRow {
                keyword: kw.text.clone(),
                values: criteria.iter().map(|c| c.value(kw)).collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(text: &str, score: f64, frequency: u32) -> RankedKeyword {
        RankedKeyword {
            text: text.to_string(),
            score,
            frequency,
            link: String::new(),
        }
    }

    #[test]
    fn test_matrix_shape_follows_criteria_set() {
        let keywords = vec![keyword("economy", 0.4, 12), keyword("korea", 0.3, 7)];
        let m = matrix_from_keywords(&keywords, &default_criteria());
        assert_eq!(m.criteria, vec!["frequency", "rank_score"]);
        assert_eq!(m.rows.len(), 2);
        assert_eq!(m.rows[0].values, vec![12.0, 0.4]);
    }

    #[test]
    fn test_single_criterion_matrix() {
        let keywords = vec![keyword("economy", 0.4, 12)];
        let m = matrix_from_keywords(&keywords, &[Criterion::RankScore]);
        assert_eq!(m.criteria, vec!["rank_score"]);
        assert_eq!(m.rows[0].values, vec![0.4]);
    }
}

// TOPSIS — multi-criteria closeness ranking.
//
// Each criterion column is vector-normalized (divided by its Euclidean
// norm), the ideal-best and ideal-worst vectors are the column-wise max and
// min of the normalized matrix, and each row's closeness is
// d⁻ / (d⁺ + d⁻ + ε) where d⁺/d⁻ are its Euclidean distances to the two
// ideals. Closeness always lands in [0, 1]; with a single criterion column
// it is a monotonic rescaling of that criterion, so ranking order is
// preserved.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Guards the degenerate case d⁺ = d⁻ = 0 (all rows identical).
const EPSILON: f64 = 1e-12;

/// Rows = keywords, columns = named numeric criteria. Rebuilt every cycle.
#[derive(Debug, Clone)]
pub struct CriteriaMatrix {
    pub criteria: Vec<String>,
    pub rows: Vec<CriteriaRow>,
}

#[derive(Debug, Clone)]
pub struct CriteriaRow {
    pub keyword: String,
    pub values: Vec<f64>,
}

/// One keyword's final closeness coefficient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosenessRow {
    pub keyword: String,
    pub closeness: f64,
}

/// Rank matrix rows by TOPSIS closeness, descending.
/// Ties break lexicographically on the keyword so the order is total.
pub fn rank(matrix: &CriteriaMatrix) -> Vec<ClosenessRow> {
    if matrix.rows.is_empty() {
        return Vec::new();
    }

    let cols = matrix.criteria.len();
    let normalized = normalize_columns(matrix, cols);

    // Ideal-best / ideal-worst per column.
    let mut best = vec![f64::NEG_INFINITY; cols];
    let mut worst = vec![f64::INFINITY; cols];
    for row in &normalized {
        for (c, &v) in row.iter().enumerate() {
            best[c] = best[c].max(v);
            worst[c] = worst[c].min(v);
        }
    }

    let mut out: Vec<ClosenessRow> = matrix
        .rows
        .iter()
        .zip(&normalized)
        .map(|(row, norm)| {
            let d_best = distance(norm, &best);
            let d_worst = distance(norm, &worst);
            ClosenessRow {
                keyword: row.keyword.clone(),
                closeness: d_worst / (d_best + d_worst + EPSILON),
            }
        })
        .collect();

    out.sort_by(|a, b| {
        b.closeness
            .partial_cmp(&a.closeness)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.keyword.cmp(&b.keyword))
    });
    out
}

/// Divide each entry by its column's Euclidean norm. A zero-norm column
/// (all zeros) stays all zeros rather than dividing by zero.
fn normalize_columns(matrix: &CriteriaMatrix, cols: usize) -> Vec<Vec<f64>> {
    let mut norms = vec![0.0f64; cols];
    for row in &matrix.rows {
        for (c, &v) in row.values.iter().enumerate() {
            norms[c] += v * v;
        }
    }
    for norm in &mut norms {
        *norm = norm.sqrt();
    }

    matrix
        .rows
        .iter()
        .map(|row| {
            row.values
                .iter()
                .enumerate()
                .map(|(c, &v)| if norms[c] > 0.0 { v / norms[c] } else { 0.0 })
                .collect()
        })
        .collect()
}

fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(criteria: &[&str], rows: &[(&str, &[f64])]) -> CriteriaMatrix {
        CriteriaMatrix {
            criteria: criteria.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|(k, v)| CriteriaRow {
                    keyword: k.to_string(),
                    values: v.to_vec(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_matrix_ranks_nothing() {
        let m = matrix(&["frequency"], &[]);
        assert!(rank(&m).is_empty());
    }

    #[test]
    fn test_closeness_within_unit_interval() {
        let m = matrix(
            &["frequency", "rank_score"],
            &[
                ("economy", &[12.0, 0.8]),
                ("korea", &[7.0, 0.5]),
                ("trade", &[3.0, 0.9]),
                ("deficit", &[1.0, 0.1]),
            ],
        );
        for row in rank(&m) {
            assert!(
                (0.0..=1.0).contains(&row.closeness),
                "{} closeness {} out of bounds",
                row.keyword,
                row.closeness
            );
        }
    }

    #[test]
    fn test_single_criterion_preserves_order() {
        let m = matrix(
            &["frequency"],
            &[("a", &[5.0]), ("b", &[3.0]), ("c", &[1.0])],
        );
        let ranked = rank(&m);
        let order: Vec<&str> = ranked.iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert!(ranked[0].closeness > ranked[1].closeness);
        assert!(ranked[1].closeness > ranked[2].closeness);
    }

    #[test]
    fn test_dominating_row_ranks_first() {
        let m = matrix(
            &["frequency", "rank_score"],
            &[("best", &[10.0, 1.0]), ("mid", &[5.0, 0.5]), ("worst", &[1.0, 0.1])],
        );
        let ranked = rank(&m);
        assert_eq!(ranked[0].keyword, "best");
        assert_eq!(ranked[2].keyword, "worst");
        // The column-wise maximum row IS the ideal-best point.
        assert!(ranked[0].closeness > 0.99);
    }

    #[test]
    fn test_identical_rows_do_not_divide_by_zero() {
        let m = matrix(
            &["frequency"],
            &[("a", &[2.0]), ("b", &[2.0]), ("c", &[2.0])],
        );
        let ranked = rank(&m);
        assert_eq!(ranked.len(), 3);
        for row in &ranked {
            assert!(row.closeness.is_finite());
            assert!((0.0..=1.0).contains(&row.closeness));
        }
        // Identical criteria mean identical closeness; tie broken by keyword.
        let order: Vec<&str> = ranked.iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_zero_norm_column_is_tolerated() {
        let m = matrix(
            &["frequency", "rank_score"],
            &[("a", &[0.0, 0.9]), ("b", &[0.0, 0.3])],
        );
        let ranked = rank(&m);
        assert_eq!(ranked[0].keyword, "a");
        assert!(ranked.iter().all(|r| r.closeness.is_finite()));
    }
}

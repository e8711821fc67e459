// Keyword selection — noise filtering and the maximality invariant.
//
// Candidates are sorted by score descending (ties: shorter first, then
// lexicographic, so the ordering is total and reproducible) and accepted
// greedily. A candidate is rejected if it contains an already-accepted
// keyword or an already-accepted keyword contains it: no selected keyword is
// ever a proper substring of another.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Default noise predicate: reject candidates containing a digit or an
/// unmatched bracket character.
pub fn is_noise(word: &str) -> bool {
    if word.chars().any(|c| c.is_numeric()) {
        return true;
    }
    has_unmatched_bracket(word)
}

fn has_unmatched_bracket(word: &str) -> bool {
    let mut stack = Vec::new();
    for c in word.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(expected) {
                    return true;
                }
            }
            _ => {}
        }
    }
    !stack.is_empty()
}

/// Select a maximal, non-overlapping keyword set from solver scores.
///
/// `top_n = None` means no size limit. The noise predicate is a parameter so
/// pipeline variants can tighten or relax filtering without a separate code
/// path.
pub fn select<F>(
    scores: &HashMap<String, f64>,
    top_n: Option<usize>,
    noise: F,
) -> Vec<(String, f64)>
where
    F: Fn(&str) -> bool,
{
    let mut candidates: Vec<(&str, f64)> = scores
        .iter()
        .filter(|(word, _)| !noise(word))
        .map(|(word, &score)| (word.as_str(), score))
        .collect();

    candidates.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.chars().count().cmp(&b.0.chars().count()))
            .then_with(|| a.0.cmp(b.0))
    });

    let mut accepted: Vec<(String, f64)> = Vec::new();
    for (word, score) in candidates {
        if let Some(limit) = top_n {
            if accepted.len() >= limit {
                break;
            }
        }
        let overlaps = accepted
            .iter()
            .any(|(kept, _)| kept.contains(word) || word.contains(kept.as_str()));
        if !overlaps {
            accepted.push((word.to_string(), score));
        }
    }

    accepted
}

// Stopword loading.
//
// The built-in list comes from the stop-words crate; a user-supplied file
// extends it. The file contract is whole-file: every line is read, and each
// line may hold one term or a comma-separated run of terms.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};
use tracing::info;

/// Load the stopword set: built-in English list plus an optional file.
pub fn load(path: Option<&Path>) -> Result<HashSet<String>> {
    let mut stopwords: HashSet<String> = get(LANGUAGE::English).into_iter().collect();

    if let Some(path) = path {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword file {}", path.display()))?;
        let before = stopwords.len();
        stopwords.extend(parse(&contents));
        info!(
            file = %path.display(),
            added = stopwords.len() - before,
            "Loaded stopword file"
        );
    }

    Ok(stopwords)
}

/// Parse newline- and/or comma-delimited stopword text.
pub fn parse(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .flat_map(|line| line.split(','))
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_newline_delimited() {
        let set = parse("economy\ntrade\ndeficit\n");
        assert!(set.contains("economy"));
        assert!(set.contains("deficit"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_parse_comma_delimited_single_line() {
        let set = parse("은,는,이,가");
        assert_eq!(set.len(), 4);
        assert!(set.contains("은"));
    }

    #[test]
    fn test_parse_reads_every_line_not_just_the_first() {
        // Mixed delimiters across multiple lines must all be honored.
        let set = parse("a,b\nc\nd,e\n");
        assert_eq!(set.len(), 5);
        assert!(set.contains("e"));
    }

    #[test]
    fn test_parse_trims_and_drops_empties() {
        let set = parse("  spaced  ,\n\n, also\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("spaced"));
        assert!(set.contains("also"));
    }

    #[test]
    fn test_builtin_list_without_file() {
        let set = load(None).unwrap();
        assert!(set.contains("the"));
    }
}

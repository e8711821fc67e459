// Regex/character tokenizer — the default normalizer.
//
// Reproduces the original preprocessing chain: strip markup tags and
// bracketed footnote markers, map everything non-alphabetic to whitespace
// (this removes punctuation and digits in one pass), collapse whitespace by
// splitting, then drop single-character tokens and stopwords.
//
// Token case is preserved so selected keywords can still be found literally
// in raw titles; stopword comparison is case-insensitive.

use std::collections::HashSet;

use anyhow::{Context, Result};
use regex_lite::Regex;

use super::traits::Tokenizer;

pub struct SimpleTokenizer {
    stopwords: HashSet<String>,
    tags: Regex,
    footnotes: Regex,
}

impl SimpleTokenizer {
    pub fn new(stopwords: HashSet<String>) -> Result<Self> {
        Ok(Self {
            stopwords,
            tags: Regex::new(r"<[^>]*>").context("Failed to compile tag pattern")?,
            footnotes: Regex::new(r"\[[0-9]*\]").context("Failed to compile footnote pattern")?,
        })
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text = self.tags.replace_all(text.trim(), " ");
        let text = self.footnotes.replace_all(&text, " ");

        let cleaned: String = text
            .chars()
            .map(|c| if c.is_alphabetic() { c } else { ' ' })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|t| t.chars().count() > 1)
            .filter(|t| !self.stopwords.contains(&t.to_lowercase()))
            .map(|t| t.to_string())
            .collect()
    }
}

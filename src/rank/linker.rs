// Document linking — tie a keyword back to a source article.
//
// Matching is literal substring containment against the raw, unnormalized
// title. str::contains treats every character as plain text, so regex
// metacharacters in a keyword can neither mis-match nor fail at runtime.
// Case-sensitive, no word-boundary enforcement (see DESIGN.md).

use crate::feeds::Document;

/// First document (in ingestion order) whose raw title contains the keyword.
pub fn find_source<'a>(keyword: &str, docs: &'a [Document]) -> Option<&'a Document> {
    docs.iter().find(|doc| doc.title.contains(keyword))
}

/// The link for a keyword, or an empty string when no title matches.
/// A missing link is a normal outcome, never an error.
pub fn link_for(keyword: &str, docs: &[Document]) -> String {
    find_source(keyword, docs)
        .map(|doc| doc.link.clone())
        .unwrap_or_default()
}

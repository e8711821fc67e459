// Feed payload parsing — RSS/Atom bytes to Documents via feed-rs.

use anyhow::{Context, Result};

use super::Document;

/// Parse a fetched feed body into documents, preserving entry order.
pub fn parse_documents(body: &[u8]) -> Result<Vec<Document>> {
    let feed = feed_rs::parser::parse(body).context("Failed to parse feed payload")?;

    let docs = feed
        .entries
        .into_iter()
        .map(|entry| Document {
            title: entry.title.map(|t| t.content).unwrap_or_default(),
            link: entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default(),
            published: entry.published,
        })
        .collect();

    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example News</title>
    <item>
      <title>Korea economy grows</title>
      <link>https://news.example/1</link>
    </item>
    <item>
      <title>Economy grows fast</title>
      <link>https://news.example/2</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_rss_entries_in_order() {
        let docs = parse_documents(RSS.as_bytes()).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].title, "Korea economy grows");
        assert_eq!(docs[0].link, "https://news.example/1");
        assert_eq!(docs[1].title, "Economy grows fast");
    }

    #[test]
    fn test_missing_title_becomes_empty_string() {
        let xml = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>t</title>
<item><link>https://news.example/3</link></item>
</channel></rss>"#;
        let docs = parse_documents(xml.as_bytes()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title, "");
        assert_eq!(docs[0].link, "https://news.example/3");
    }

    #[test]
    fn test_garbage_payload_is_an_error() {
        assert!(parse_documents(b"not a feed").is_err());
    }
}

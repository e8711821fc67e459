// Composition tests: tokenizer → extraction → TOPSIS → persistence.
//
// Drives the same path the update cycle takes, against an in-memory SQLite
// database, without any network.

use std::collections::HashMap;

use headliner::db::models::RankingRow;
use headliner::db::schema::create_tables;
use headliner::db::sqlite::SqliteDatabase;
use headliner::db::Database;
use headliner::feeds::Document;
use headliner::normalize::simple::SimpleTokenizer;
use headliner::normalize::stopwords;
use headliner::rank::{RankParams, WordRank};
use headliner::scoring::criteria::{default_criteria, matrix_from_keywords};
use headliner::scoring::topsis;
use rusqlite::Connection;

fn doc(title: &str, link: &str) -> Document {
    Document {
        title: title.to_string(),
        link: link.to_string(),
        published: None,
    }
}

async fn test_db() -> SqliteDatabase {
    let conn = Connection::open_in_memory().unwrap();
    create_tables(&conn).unwrap();
    SqliteDatabase::new(conn)
}

/// Extraction + TOPSIS fusion, the way the update cycle assembles rows.
fn rank_to_rows(docs: &[Document], params: RankParams) -> Vec<RankingRow> {
    let stopword_set = stopwords::parse("the,a,of,in,to");
    let tokenizer = SimpleTokenizer::new(stopword_set).unwrap();

    let extraction = WordRank::new(params).extract(docs, &tokenizer);
    let closeness = topsis::rank(&matrix_from_keywords(
        &extraction.keywords,
        &default_criteria(),
    ));

    let by_text: HashMap<&str, _> = extraction
        .keywords
        .iter()
        .map(|kw| (kw.text.as_str(), kw))
        .collect();

    closeness
        .into_iter()
        .map(|row| {
            let kw = by_text[row.keyword.as_str()];
            RankingRow {
                keyword: kw.text.clone(),
                frequency: kw.frequency,
                closeness: row.closeness,
                rank_score: kw.score,
                link: kw.link.clone(),
                updated_at: String::new(),
            }
        })
        .collect()
}

#[tokio::test]
async fn full_cycle_persists_ranked_keywords() {
    let docs = vec![
        doc("Korea economy grows", "https://news.example/1"),
        doc("Economy grows fast this year", "https://news.example/2"),
        doc("Korea trade deficit widens", "https://news.example/3"),
    ];
    let params = RankParams {
        min_count: 2,
        ..RankParams::default()
    };
    let rows = rank_to_rows(&docs, params);
    assert!(!rows.is_empty());

    let db = test_db().await;
    db.replace_rankings(&rows).await.unwrap();

    let stored = db.get_rankings().await.unwrap();
    assert_eq!(stored.len(), rows.len());
    // Stored order is closeness-descending, matching what was computed.
    for (stored_row, row) in stored.iter().zip(&rows) {
        assert_eq!(stored_row.keyword, row.keyword);
        assert!((stored_row.closeness - row.closeness).abs() < 1e-9);
    }
    for row in &stored {
        assert!((0.0..=1.0).contains(&row.closeness));
    }
}

#[tokio::test]
async fn second_cycle_replaces_not_merges() {
    let db = test_db().await;

    let morning = vec![
        doc("Korea economy grows", "https://news.example/1"),
        doc("Korea economy rebounds", "https://news.example/2"),
    ];
    let evening = vec![
        doc("Election results announced", "https://news.example/4"),
        doc("Election turnout breaks records", "https://news.example/5"),
    ];
    let params = RankParams {
        min_count: 2,
        ..RankParams::default()
    };

    let first = rank_to_rows(&morning, params.clone());
    assert!(first.iter().any(|r| r.keyword.contains("economy") || r.keyword.contains("Korea")));
    db.replace_rankings(&first).await.unwrap();

    let second = rank_to_rows(&evening, params);
    assert!(second.iter().any(|r| r.keyword.contains("lection")));
    db.replace_rankings(&second).await.unwrap();

    let stored = db.get_rankings().await.unwrap();
    assert_eq!(stored.len(), second.len());
    for row in &stored {
        assert!(
            second.iter().any(|r| r.keyword == row.keyword),
            "stale keyword {} survived the swap",
            row.keyword
        );
        assert!(
            !first.iter().any(|r| r.keyword == row.keyword),
            "first-cycle keyword {} should be gone",
            row.keyword
        );
    }
}

#[tokio::test]
async fn empty_cycle_clears_the_table() {
    let db = test_db().await;

    let docs = vec![
        doc("Korea economy grows", "https://news.example/1"),
        doc("Korea economy rebounds", "https://news.example/2"),
    ];
    let params = RankParams {
        min_count: 2,
        ..RankParams::default()
    };
    db.replace_rankings(&rank_to_rows(&docs, params.clone()))
        .await
        .unwrap();
    assert!(db.ranking_count().await.unwrap() > 0);

    // An empty corpus is a valid "no keywords" cycle.
    let rows = rank_to_rows(&[], params);
    assert!(rows.is_empty());
    db.replace_rankings(&rows).await.unwrap();
    assert_eq!(db.ranking_count().await.unwrap(), 0);
}

// SqliteDatabase — rusqlite backend implementing the Database trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is
// !Send. Trait methods lock the mutex, do synchronous rusqlite work, and
// return; the lock is never held across .await points.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::RankingRow;
use super::traits::Database;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn replace_rankings(&self, rows: &[RankingRow]) -> Result<()> {
        let mut conn = self.conn.lock().await;
        super::queries::replace_rankings(&mut conn, rows)
    }

    async fn get_rankings(&self) -> Result<Vec<RankingRow>> {
        let conn = self.conn.lock().await;
        super::queries::get_rankings(&conn)
    }

    async fn ranking_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::ranking_count(&conn)
    }

    async fn get_update_state(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().await;
        super::queries::get_update_state(&conn, key)
    }

    async fn set_update_state(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().await;
        super::queries::set_update_state(&conn, key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;

    async fn test_db() -> SqliteDatabase {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        SqliteDatabase::new(conn)
    }

    fn row(keyword: &str, closeness: f64) -> RankingRow {
        RankingRow {
            keyword: keyword.to_string(),
            frequency: 5,
            closeness,
            rank_score: 0.2,
            link: format!("https://news.example/{keyword}"),
            updated_at: String::new(),
        }
    }

    #[tokio::test]
    async fn test_trait_replace_and_read() {
        let db = test_db().await;
        db.replace_rankings(&[row("economy", 0.9), row("korea", 0.5)])
            .await
            .unwrap();

        let rankings = db.get_rankings().await.unwrap();
        assert_eq!(rankings.len(), 2);
        assert_eq!(rankings[0].keyword, "economy");
        assert_eq!(rankings[0].link, "https://news.example/economy");
        assert_eq!(db.ranking_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_trait_replace_swaps_entire_table() {
        let db = test_db().await;
        db.replace_rankings(&[row("economy", 0.9)]).await.unwrap();
        db.replace_rankings(&[row("election", 0.7)]).await.unwrap();

        let keywords: Vec<String> = db
            .get_rankings()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.keyword)
            .collect();
        assert_eq!(keywords, vec!["election"]);
    }

    #[tokio::test]
    async fn test_trait_update_state_roundtrip() {
        let db = test_db().await;
        assert_eq!(db.get_update_state("cursor").await.unwrap(), None);
        db.set_update_state("cursor", "abc123").await.unwrap();
        assert_eq!(
            db.get_update_state("cursor").await.unwrap(),
            Some("abc123".to_string())
        );
    }

    #[tokio::test]
    async fn test_trait_table_count() {
        let db = test_db().await;
        assert_eq!(db.table_count().await.unwrap(), 3);
    }
}

// System status display — shows DB stats and last update-cycle metadata.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::db::Database;

/// Display system status to the terminal.
pub async fn show(db: &Arc<dyn Database>, db_display_path: &str) -> Result<()> {
    if !Path::new(db_display_path).exists() {
        println!("Database: not initialized");
        println!("\nRun `headliner init` to set up the database.");
        return Ok(());
    }

    let file_size = std::fs::metadata(db_display_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_display_path, file_size);

    let keyword_count = db.ranking_count().await?;
    if keyword_count == 0 {
        println!("Rankings: empty");
        println!("  Run `headliner update` to build the first ranking");
    } else {
        println!("Rankings: {} keywords", keyword_count);
    }

    match db.get_update_state("last_update_at").await? {
        Some(last_update) => {
            println!("Last update: {}", last_update);
            if let Some(count) = db.get_update_state("last_document_count").await? {
                println!("  Corpus size: {} documents", count);
            }
        }
        None => {
            println!("Last update: never");
        }
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

// Background update job — runs the full cycle when triggered via POST /api/update.
//
// Only one cycle can run at a time; POST /api/update returns 409 if one is
// already active.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info};

use crate::config::Config;
use crate::db::Database;
use crate::normalize::simple::SimpleTokenizer;
use crate::normalize::stopwords;
use crate::pipeline::update;
use crate::rank::RankParams;
use crate::scoring::criteria::default_criteria;

/// Live status of the background update, exposed via GET /api/status.
#[derive(Debug, Clone, Default)]
pub struct UpdateStatus {
    /// True while a cycle is in progress.
    pub running: bool,
    /// ISO 8601 timestamp of when the current/last cycle started.
    pub started_at: Option<String>,
    /// Human-readable progress message updated as phases complete.
    pub progress_message: String,
    /// Error message from the last cycle, if it failed.
    pub last_error: Option<String>,
}

/// Launch the update cycle in a background tokio task.
/// Returns immediately. Callers poll `update_status.running` to track progress.
pub fn launch_update(
    config: Arc<Config>,
    db: Arc<dyn Database>,
    update_status: Arc<RwLock<UpdateStatus>>,
    params: RankParams,
) {
    tokio::spawn(async move {
        if let Err(e) = run_cycle(config, db, update_status.clone(), params).await {
            error!(error = %e, "Background update failed");
            let mut status = update_status.write().await;
            status.running = false;
            status.last_error = Some(e.to_string());
            status.progress_message = "Update failed — see server logs".to_string();
        }
    });
}

async fn run_cycle(
    config: Arc<Config>,
    db: Arc<dyn Database>,
    update_status: Arc<RwLock<UpdateStatus>>,
    params: RankParams,
) -> anyhow::Result<()> {
    {
        let mut s = update_status.write().await;
        s.progress_message = "Fetching feeds…".to_string();
    }

    config.require_feeds()?;
    let stopword_set = stopwords::load(config.stopwords_path.as_deref())?;
    let tokenizer = SimpleTokenizer::new(stopword_set)?;

    let result = update::run(&config, &db, &tokenizer, params, &default_criteria(), false).await;

    let mut status = update_status.write().await;
    status.running = false;

    match result {
        Ok((report, _rows)) => {
            info!(
                documents = report.documents,
                keywords = report.keywords,
                "Background update completed"
            );
            status.last_error = None;
            status.progress_message = format!(
                "Completed: {} documents, {} keywords ranked",
                report.documents, report.keywords
            );
        }
        Err(e) => {
            error!(error = %e, "Update cycle error");
            status.last_error = Some(e.to_string());
            status.progress_message =
                "Update encountered an error — previous ranking left intact".to_string();
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use headliner::config::Config;
use headliner::normalize::simple::SimpleTokenizer;
use headliner::normalize::stopwords;
use headliner::rank::RankParams;
use headliner::scoring::criteria::{default_criteria, Criterion};

/// Headliner: trending keyword extraction for news feeds.
///
/// Fetches headlines from configured RSS/Atom sources, surfaces the most
/// salient recurring terms, and ranks them by fusing frequency and graph
/// rank score into a single closeness score.
#[derive(Parser)]
#[command(name = "headliner", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Fetch feeds, rank keywords, and replace the stored ranking
    Update {
        /// Minimum corpus-wide occurrences for a candidate (default: 5)
        #[arg(long, default_value = "5")]
        min_count: u32,

        /// Maximum keyword length in characters (default: 10)
        #[arg(long, default_value = "10")]
        max_length: usize,

        /// Damping factor for the rank solver (default: 0.85)
        #[arg(long, default_value = "0.85")]
        beta: f64,

        /// Iteration cap for the rank solver (default: 10)
        #[arg(long, default_value = "10")]
        max_iter: usize,

        /// Keep only the top N keywords (default: no limit)
        #[arg(long)]
        top_n: Option<usize>,

        /// Criteria fused by TOPSIS, comma-separated
        /// (default: frequency,rank_score)
        #[arg(long, value_delimiter = ',')]
        criteria: Option<Vec<String>>,

        /// Compute and display without touching the stored ranking
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the stored keyword ranking
    Report,

    /// Summarize the current headlines via the Gemini API
    Summarize {
        /// Max headlines to include in the prompt (default: 30)
        #[arg(long, default_value = "30")]
        count: usize,
    },

    /// Show system status (DB stats, last update cycle)
    Status,

    /// Run the HTTP API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 8080)
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("headliner=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing Headliner database...");
            let config = Config::load()?;
            let db = headliner::db::initialize(&config.db_path)?;
            let table_count = db.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nHeadliner is ready. Next step: set up your .env file");
            println!("  (see .env.example for required variables)");
            println!("\nThen run: cargo run -- update");
        }

        Commands::Update {
            min_count,
            max_length,
            beta,
            max_iter,
            top_n,
            criteria,
            dry_run,
        } => {
            let config = Config::load()?;
            config.require_feeds()?;
            let db = headliner::db::initialize(&config.db_path)?;
            let tokenizer = build_tokenizer(&config)?;
            let criteria = parse_criteria(criteria.as_deref())?;

            println!(
                "Fetching {} feed sources ({} concurrent)...",
                config.feeds.len(),
                config.fetch_concurrency
            );

            let params = RankParams {
                min_count,
                max_length,
                beta,
                max_iter,
                top_n,
            };

            let (report, rows) = headliner::pipeline::update::run(
                &config,
                &db,
                &tokenizer,
                params,
                &criteria,
                dry_run,
            )
            .await?;

            headliner::output::terminal::display_rankings(&rows);

            if !report.converged {
                println!(
                    "  {} solver stopped at max_iter; scores are best-effort",
                    "~".yellow()
                );
            }

            println!("\n{}", "Update complete.".bold());
            println!("  Documents ingested: {}", report.documents);
            println!("  Keywords ranked: {}", report.keywords);
            if report.persisted {
                println!("  Ranking table replaced.");
            } else {
                println!("  Dry run — stored ranking unchanged.");
            }
        }

        Commands::Report => {
            let config = Config::load()?;
            let db = headliner::db::open(&config.db_path)?;
            let rows = db.get_rankings().await?;
            headliner::output::terminal::display_rankings(&rows);
        }

        Commands::Summarize { count } => {
            let config = Config::load()?;
            config.require_feeds()?;
            config.require_gemini()?;

            println!("Fetching headlines...");
            let client = headliner::feeds::client::FeedClient::new()?;
            let documents = client
                .fetch_all(
                    &config.feeds,
                    config.fetch_concurrency,
                    std::time::Duration::from_secs(config.fetch_timeout_secs),
                )
                .await;

            if documents.is_empty() {
                println!("No headlines fetched — nothing to summarize.");
                return Ok(());
            }

            let headlines: Vec<String> = documents
                .iter()
                .map(|d| d.title.clone())
                .filter(|t| !t.is_empty())
                .take(count)
                .collect();

            println!("Summarizing {} headlines...", headlines.len());
            let summarizer = headliner::summary::gemini::GeminiSummarizer::new(
                config.gemini_api_key.clone(),
            );
            let summary = headliner::summary::traits::Summarizer::summarize(
                &summarizer,
                &headlines,
            )
            .await?;

            headliner::output::terminal::display_summary(&summary, headlines.len());
        }

        Commands::Status => {
            let config = Config::load()?;
            let db = headliner::db::open(&config.db_path)?;
            headliner::status::show(&db, &config.db_path).await?;
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let db = headliner::db::initialize(&config.db_path)?;
            headliner::web::run_server(config, db, port, &bind).await?;
        }
    }

    Ok(())
}

/// Map `--criteria` names to the criteria set, defaulting to both signals.
fn parse_criteria(names: Option<&[String]>) -> Result<Vec<Criterion>> {
    let Some(names) = names.filter(|n| !n.is_empty()) else {
        return Ok(default_criteria());
    };
    names
        .iter()
        .map(|name| match name.as_str() {
            "frequency" => Ok(Criterion::Frequency),
            "rank_score" => Ok(Criterion::RankScore),
            other => anyhow::bail!(
                "Unknown criterion '{other}' (expected: frequency, rank_score)"
            ),
        })
        .collect()
}

/// Build the production tokenizer: built-in stopwords plus the optional
/// configured file.
fn build_tokenizer(config: &Config) -> Result<SimpleTokenizer> {
    let stopword_set = match stopwords::load(config.stopwords_path.as_deref()) {
        Ok(set) => set,
        Err(e) => {
            warn!(error = %e, "Failed to load stopword file, using built-in list only");
            stopwords::load(None)?
        }
    };
    SimpleTokenizer::new(stopword_set)
}

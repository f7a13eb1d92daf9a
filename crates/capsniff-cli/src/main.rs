mod input;
mod report;

use std::path::PathBuf;

use capsniff_core::{AppConfig, ReviewRecord};
use capsniff_engine::{normalize_reviews, ReviewScoringEngine};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "capsniff")]
#[command(about = "Score product reviews for authenticity")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze every review in a JSON file and recommend whether to buy
    Analyze {
        /// JSON array of scraped reviews, or `-` for stdin
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Score a single review
    Score {
        text: String,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        rating: Option<f64>,

        /// Include the per-signal breakdown
        #[arg(long)]
        explain: bool,
    },
    /// Summarize the authentic reviews in a JSON file
    Summary {
        /// JSON array of scraped reviews, or `-` for stdin
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = capsniff_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        env = %config.env,
        confidence_threshold = config.confidence_threshold,
        "configuration loaded"
    );

    let engine = build_engine(&config)?;

    match cli.command {
        Commands::Analyze { file, format } => run_analyze(&engine, &config, &file, format),
        Commands::Score {
            text,
            author,
            rating,
            explain,
        } => run_score(&engine, text, author, rating, explain),
        Commands::Summary { file } => run_summary(&engine, &file),
    }
}

fn build_engine(config: &AppConfig) -> anyhow::Result<ReviewScoringEngine> {
    match &config.lexicon_path {
        Some(path) => {
            let lexicon = capsniff_core::load_lexicon(path)?;
            tracing::info!(path = %path.display(), "loaded custom lexicon");
            Ok(ReviewScoringEngine::with_lexicon(&lexicon)?)
        }
        None => Ok(ReviewScoringEngine::new()),
    }
}

fn load_records(file: &std::path::Path) -> anyhow::Result<Vec<ReviewRecord>> {
    let raw = input::read_raw_reviews(file)?;
    let records = normalize_reviews(&raw);
    if records.is_empty() {
        anyhow::bail!("No reviews found on this page");
    }
    Ok(records)
}

fn run_analyze(
    engine: &ReviewScoringEngine,
    config: &AppConfig,
    file: &std::path::Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let records = load_records(file)?;
    let analysis = engine.analyze_batch(&records)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Text => print!(
            "{}",
            report::render_analysis(&analysis, config.confidence_threshold)
        ),
    }
    Ok(())
}

fn run_score(
    engine: &ReviewScoringEngine,
    text: String,
    author: Option<String>,
    rating: Option<f64>,
    explain: bool,
) -> anyhow::Result<()> {
    let record = ReviewRecord {
        id: 0,
        text,
        author,
        rating,
        date: None,
    };
    let verdict = engine.score_review(&record);

    if explain {
        let output = serde_json::json!({
            "verdict": verdict,
            "signals": engine.contributions(&record),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    }
    Ok(())
}

fn run_summary(engine: &ReviewScoringEngine, file: &std::path::Path) -> anyhow::Result<()> {
    let records = load_records(file)?;
    let analysis = engine.analyze_batch(&records)?;

    match engine.summarize(&analysis) {
        Some(summary) => print!("{}", report::render_summary(&summary)),
        None => println!("No authentic reviews to analyze"),
    }
    Ok(())
}

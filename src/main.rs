// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use article_search::utils::logging::{format_error, format_info, format_success, format_warning};
use article_search::{Config, JsonExporter, SearchEngine, Validator, exporter};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "article_search")]
#[command(author = "cipher")]
#[command(version)]
#[command(about = "Concurrent search over a tree of HTML articles", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Overrides library.root_dir from the configuration
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    /// Print the raw JSON array instead of a listing
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    pretty: bool,

    /// Also write a timestamped export file into this directory
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search titles, paths, and metadata of every document
    Search {
        query: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List documents related to an article title
    Related {
        title: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check that the library root exists and holds documents
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    article_search::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(root) = cli.root {
        config.library.root_dir = root;
    }

    info!("Using document root: {}", config.library.root_dir.display());
    let engine = SearchEngine::new(config).context("Failed to create search engine")?;

    match cli.command {
        Commands::Search { query, output } => cmd_search(&engine, &query, &output).await?,
        Commands::Related { title, output } => cmd_related(&engine, &title, &output).await?,
        Commands::Health => cmd_health(&engine).await?,
    }

    Ok(())
}

async fn cmd_search(engine: &SearchEngine, query: &str, output: &OutputArgs) -> Result<()> {
    Validator::validate_query(query).context("Missing query")?;

    let outcome = engine.search(query).await;

    if let Some(err) = &outcome.error {
        eprintln!(
            "{}",
            format_warning(&format!("Search incomplete, results may be partial: {}", err))
        );
    }

    if let Some(dir) = &output.output {
        let path = JsonExporter::new(dir)?.export("search", query, &outcome.results, output.pretty)?;
        eprintln!("{}", format_success(&format!("Exported to {}", path.display())));
    }

    if output.json {
        println!("{}", exporter::render(&outcome.results, output.pretty)?);
        return Ok(());
    }

    if outcome.results.is_empty() {
        println!("{}", format_warning(&format!("No results found for query: \"{}\"", query)));
        return Ok(());
    }

    println!(
        "{}",
        format_info(&format!(
            "Search Results for \"{}\": {} of {} documents in {}ms",
            query,
            outcome.results.len(),
            outcome.stats.documents_evaluated,
            outcome.stats.duration_ms
        ))
    );
    println!("{}", "=".repeat(80));

    let mut results = outcome.results;
    results.sort_by(|a, b| a.title.cmp(&b.title));
    for (idx, result) in results.iter().enumerate() {
        print!("\n{}. {}", idx + 1, result.format_summary());
    }

    println!("\n{}", "=".repeat(80));
    Ok(())
}

async fn cmd_related(engine: &SearchEngine, title: &str, output: &OutputArgs) -> Result<()> {
    if title.is_empty() {
        anyhow::bail!("Missing title");
    }

    let related = engine.related(title).await;

    if let Some(dir) = &output.output {
        let path = JsonExporter::new(dir)?.export("related", title, &related, output.pretty)?;
        eprintln!("{}", format_success(&format!("Exported to {}", path.display())));
    }

    if output.json {
        println!("{}", exporter::render(&related, output.pretty)?);
        return Ok(());
    }

    if related.is_empty() {
        println!("{}", format_warning("No related documents found"));
        return Ok(());
    }

    println!("{}", format_info(&format!("Related to \"{}\":", title)));
    for entry in &related {
        println!("  {} ({})", entry.path, entry.image);
    }

    Ok(())
}

async fn cmd_health(engine: &SearchEngine) -> Result<()> {
    let report = engine.health().await;
    print!("{}", report);

    if report.is_healthy() {
        println!("{}", format_success("Search engine ready"));
        Ok(())
    } else {
        println!("{}", format_error("Search engine is not ready"));
        Err(anyhow::anyhow!(
            "No documents available under {}",
            engine.config().library.root_dir.display()
        ))
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use content_triage::config::{find_config_file, load_config, TriageConfig};
use content_triage::models::ValidationVerdict;
use content_triage::sources::ContentRouter;
use content_triage::validate::{validate, ValidationSummary};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Content Triage - fetch article text for URLs and separate real content
/// from disguised failures
#[derive(Parser, Debug)]
#[command(name = "content-triage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "hongkongkiwi")]
#[command(about = "Fetch article text for URLs and separate real content from disguised failures", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Plain)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Plain text format
    Plain,
    /// JSON format (machine-readable)
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch content for a URL and validate it
    #[command(alias = "f")]
    Fetch {
        /// Absolute http/https URL
        url: String,

        /// Print the acquired text before the verdict
        #[arg(long)]
        show_content: bool,
    },

    /// Validate text from a file, or stdin when no file is given
    #[command(alias = "v")]
    Validate {
        /// File containing the text to validate
        file: Option<PathBuf>,

        /// Origin URL, used for content-type classification
        #[arg(long, default_value = "")]
        url: String,
    },

    /// Process a file of URLs (one per line) sequentially
    #[command(alias = "b")]
    Batch {
        /// File with one URL per line; blank lines and # comments skipped
        file: PathBuf,
    },

    /// Write a default configuration file to edit
    InitConfig {
        /// Where to write the file
        #[arg(default_value = "content-triage.toml")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("content_triage={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        TriageConfig::default()
    };

    match cli.command {
        Commands::Fetch { url, show_content } => {
            let router = ContentRouter::new(config)?;
            let content = router.acquire(&url).await;
            let verdict = validate(&content, &url);

            if show_content && !content.is_empty() {
                println!("{}\n", content);
            }
            print_verdict(&url, &verdict, cli.output)?;
        }

        Commands::Validate { file, url } => {
            let content = match file {
                Some(path) => std::fs::read_to_string(&path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let verdict = validate(&content, &url);
            print_verdict(&url, &verdict, cli.output)?;
        }

        Commands::Batch { file } => {
            let urls: Vec<String> = std::fs::read_to_string(&file)?
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(String::from)
                .collect();

            let delay = Duration::from_secs(config.processing.request_delay_secs);
            let router = ContentRouter::new(config)?;
            let mut verdicts = Vec::with_capacity(urls.len());

            for (i, url) in urls.iter().enumerate() {
                tracing::info!("[{}/{}] processing: {}", i + 1, urls.len(), url);

                let content = router.acquire(url).await;
                let verdict = validate(&content, url);
                println!(
                    "{}  {}  {:<8}  {:.2}  {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S"),
                    if verdict.is_valid { "VALID  " } else { "INVALID" },
                    verdict.content_type.to_string(),
                    verdict.confidence_score,
                    url
                );
                verdicts.push(verdict);

                // Politeness delay between URLs, skipped after the last one
                if i + 1 < urls.len() {
                    tokio::time::sleep(delay).await;
                }
            }

            let summary = ValidationSummary::from_verdicts(&verdicts);
            match cli.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                OutputFormat::Plain => {
                    println!(
                        "\nProcessed: {}  Valid: {}  Invalid: {}  Success rate: {:.1}%  Avg confidence: {:.2}",
                        summary.total,
                        summary.valid,
                        summary.invalid,
                        summary.success_rate * 100.0,
                        summary.avg_confidence
                    );
                    for (issue, count) in &summary.common_issues {
                        println!("  {}x {}", count, issue);
                    }
                }
            }
        }

        Commands::InitConfig { path } => {
            config.save(&path)?;
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}

fn print_verdict(url: &str, verdict: &ValidationVerdict, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(verdict)?),
        OutputFormat::Plain => {
            println!("URL:        {}", url);
            println!(
                "Verdict:    {}",
                if verdict.is_valid { "VALID" } else { "INVALID" }
            );
            println!("Confidence: {:.2}", verdict.confidence_score);
            println!("Type:       {}", verdict.content_type);
            println!("Length:     {} chars", verdict.length);
            println!("Indicators: {}", verdict.positive_indicator_count);
            if !verdict.issues.is_empty() {
                println!("Issues:");
                for issue in &verdict.issues {
                    println!("  - {}", issue);
                }
            }
        }
    }
    Ok(())
}

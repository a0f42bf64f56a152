//! Publications Page Builder - Entry Point
//!
//! Reads `publications.csv` and writes `publications.html` next to it.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use publications_page::{
    builder,
    config::Config,
    models::{OutputFormat, RowPolicy},
};

#[derive(Parser, Debug)]
#[command(name = "publications-page")]
#[command(about = "Build a static publications page from a CSV file")]
#[command(version)]
struct Cli {
    /// Directory holding publications.csv; the output is written there too
    #[arg(long, default_value = ".", env = "PUBLICATIONS_DIR")]
    dir: PathBuf,

    /// Read this CSV instead of <dir>/publications.csv
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write to this file instead of <dir>/publications.<ext>
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Output format: html or json
    #[arg(long, default_value = "html")]
    format: Format,

    /// Skip malformed or untitled rows with a warning instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Name shown in the page header and title
    #[arg(long, env = "PUBLICATIONS_OWNER")]
    owner: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Format {
    /// Static HTML page
    #[default]
    Html,
    /// Grouped entries as JSON
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => Self::Html,
            Format::Json => Self::Json,
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn config_from_cli(cli: Cli) -> Config {
    let policy = if cli.skip_malformed { RowPolicy::Skip } else { RowPolicy::Abort };

    let mut config = Config::new(&cli.dir).with_format(cli.format.into()).with_row_policy(policy);
    if let Some(input) = cli.input {
        config.input = input;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(owner) = cli.owner {
        config.page.owner = owner;
    }
    config
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting publications page builder");

    let config = config_from_cli(cli);

    match builder::build(&config) {
        Ok(summary) => {
            tracing::info!(
                output = %summary.output.display(),
                items = summary.entries,
                skipped = summary.skipped,
                "Wrote {} ({} items)",
                summary.output.display(),
                summary.entries
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Build failed");
            anyhow::bail!(e.to_user_message())
        }
    }
}

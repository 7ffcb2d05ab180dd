//! Douyin hot-list CLI
//!
//! Fetches the hot-search list once and prints the top entries.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use douyin_hot::{
    error::{AppError, Result},
    models::{HotEntry, HotListConfig},
    pipeline, presenter,
    services::HotListFetcher,
};

/// douyin-hot - Douyin hot-search list
#[derive(Parser, Debug)]
#[command(name = "douyin-hot", version, about = "Fetch the Douyin hot-search list")]
struct Cli {
    /// Optional TOML config file overriding the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print entries as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the hot list (default 50 entries)
    Hot {
        /// Number of entries to show
        #[arg(allow_hyphen_values = true)]
        limit: Option<String>,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<HotListConfig> {
    let config = match path {
        Some(path) => {
            let config = HotListConfig::load_or_default(path);
            log::info!("Loaded configuration from {}", path.display());
            config
        }
        None => HotListConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

async fn run_hot(config: HotListConfig, limit: Option<&str>) -> Result<Vec<HotEntry>> {
    let limit = pipeline::parse_limit(limit, config.default_limit);
    let fetcher = HotListFetcher::new(config)?;
    log::debug!("Requesting {} entries from {}", limit, fetcher.config().endpoint);
    pipeline::run_hot(&fetcher, limit).await
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config validation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let limit = match &cli.command {
        Some(Command::Hot { limit }) => limit.as_deref(),
        None => None,
    };

    match run_hot(config, limit).await {
        Ok(entries) => {
            if cli.json {
                if let Err(e) = presenter::print_json(&entries) {
                    log::error!("Failed to encode entries: {}", e);
                    return ExitCode::FAILURE;
                }
            } else {
                presenter::print(&entries);
            }
            ExitCode::SUCCESS
        }
        Err(AppError::EmptyList) => {
            eprintln!("❌ 未获取到热榜数据");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("❌ 获取热榜失败: {}", e);
            ExitCode::FAILURE
        }
    }
}

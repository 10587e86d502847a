mod roster;

use std::path::PathBuf;
use std::time::Instant;

use colored::Colorize;
use download_engine::Batch;
use download_engine::download_config::DownloadConfig;
use download_engine::types::BatchSummary;
use download_engine::utils::format_bytes;
use tracing::{Level, debug, error};
use utils::logging::{self, Component, LogConfig};

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Roster file (CSV) mapping subjects to download links
    roster: PathBuf,

    /// Set download directory
    #[arg(short = 'd', long = "dir", value_name = "DIR", default_value = "downloads")]
    dir: PathBuf,

    /// Substring identifying download columns
    #[arg(long = "marker", value_name = "MARKER", default_value = "下载")]
    marker: String,

    /// Use this column header for subject names instead of guessing
    #[arg(long = "subject-column", value_name = "HEADER")]
    subject_column: Option<String>,

    /// Attempts per download
    #[arg(long = "retries", value_name = "N", default_value = "3")]
    retries: u32,

    /// Log file directory
    #[arg(short = 'l', long = "log", value_name = "LOG", default_value = ".dev/logs")]
    log: PathBuf,

    /// Set console log level
    #[arg(long = "console-log-level", value_name = "LEVEL",
          value_parser = ["trace", "debug", "info", "warn", "error"],
          default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    // Initialize logging
    match logging::init_logging(LogConfig {
        component: Component::RosterDl,
        log_dir: cli.log.clone(),
        silent_deps: vec!["hyper_util".into(), "reqwest".into(), "mio".into()],
        max_level: match cli.log_level.as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => {
                eprintln!(
                    "invalid log level in arguments, use one of the [\"trace\", \"debug\", \"info\", \"warn\", \"error\"]"
                );
                Level::INFO
            }
        },
        ..Default::default()
    }) {
        Ok(_) => {
            debug!("Logger initialized for {}", Component::RosterDl.as_str());
        }
        Err(e) => {
            eprintln!("Failed to initialize logger: {}", e);
        }
    }

    let tasks = match roster::load_tasks(&cli.roster, &cli.marker, cli.subject_column.as_deref()) {
        Ok(tasks) => tasks,
        Err(e) => {
            error!("Failed to read roster: {:#}", e);
            std::process::exit(1);
        }
    };
    debug!("built {} tasks from roster", tasks.len());

    let batch = match Batch::new(DownloadConfig {
        download_dir: cli.dir.clone(),
        max_retries: cli.retries,
        field_marker: cli.marker.clone(),
        ..Default::default()
    }) {
        Ok(batch) => batch,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let started = Instant::now();
    let summary = batch.run(&tasks).await;

    print_summary(&summary, started.elapsed().as_secs_f64());
}

fn print_summary(summary: &BatchSummary, elapsed_secs: f64) {
    println!("\n{}", "=".repeat(50));
    println!("Download Summary:");
    println!(
        "Total download attempts: {}",
        summary.total_attempted.to_string().blue()
    );
    println!(
        "Successful downloads: {}",
        summary.total_succeeded.to_string().green()
    );
    println!("Failed downloads: {}", summary.failed().to_string().red());
    println!(
        "Fetched {} in {:.1}s",
        format_bytes(summary.total_bytes),
        elapsed_secs
    );
    println!("{}", "=".repeat(50));
}

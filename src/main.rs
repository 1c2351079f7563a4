use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::info;

use job_ads_checker_lib::application::{CrawlSettings, JobAdsPipeline};
use job_ads_checker_lib::infrastructure::config::AppConfig;
use job_ads_checker_lib::infrastructure::logging::{init_logging_with_config, log_system_info};
use job_ads_checker_lib::infrastructure::output_paths::{current_hostname, output_file_name, resolve_output_dir};
use job_ads_checker_lib::infrastructure::{export_table, HttpClient};

#[derive(Parser, Debug)]
#[command(version, about = "Collects academic job postings into a sorted table")]
struct Cli {
    /// Crawl at most a few pages per source and mark the output file
    #[arg(long)]
    debug: bool,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write here instead of the directory configured for this host
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging_with_config(&config.logging)?;
    log_system_info();

    let output_dir = match cli.output_dir {
        Some(dir) => dir,
        None => resolve_output_dir(&current_hostname(), &config.output)?,
    };

    let settings = CrawlSettings::from_config(&config.crawling, cli.debug);
    if settings.debug_mode {
        info!("Debug mode: at most {} page(s) per source", settings.debug_page_limit);
    }

    let fetcher = Arc::new(HttpClient::new(config.http.clone())?);
    let pipeline = JobAdsPipeline::new(&config, fetcher, settings)?;
    let jobs = pipeline.run().await?;

    let file_name = output_file_name(
        &config.output.file_prefix,
        Local::now().naive_local(),
        cli.debug,
        config.output.format,
    );
    let path = output_dir.join(file_name);
    export_table(&path, &jobs, config.output.format)?;

    info!("Done: {} job(s) written to {}", jobs.len(), path.display());
    Ok(())
}

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use banks_etl::infra::ReqwestHttp;
use banks_etl::observability::init_logging;
use banks_etl::pipeline::{PipelineConfig, PipelineOrchestrator};

#[derive(Parser)]
#[command(name = "banks_etl")]
#[command(about = "Scrape the largest banks by market cap, convert to GBP/EUR/INR, and load to CSV and SQLite")]
#[command(version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // Held until exit so buffered file logs are flushed
    let _guard = init_logging();

    let http = ReqwestHttp::new().context("Failed to build HTTP client")?;
    let orchestrator = PipelineOrchestrator::new(PipelineConfig::default(), Box::new(http));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match orchestrator.run(&mut out) {
        Ok(report) => {
            info!(
                "ETL run complete: {} rows, {} queries",
                report.rows,
                report.queries.len()
            );
            Ok(())
        }
        Err(e) => {
            error!("ETL run aborted: {}", e);
            Err(e).context("ETL run aborted")
        }
    }
}

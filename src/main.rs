use anyhow::Context;
use clap::Parser;
use nws_reports::utils::logger;
use nws_reports::{
    report_urls, CliConfig, HttpReportSource, LocalStorage, ReportEngine, ReportPipeline,
    SystemClock,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // Configuration problems stop the run before any request is made.
    let settings = match config.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    let urls = report_urls().context("Failed to build report URL list")?;
    tracing::debug!("{} report URLs", urls.len());

    let storage = settings.output_file.clone().map(LocalStorage::new);
    let pipeline = ReportPipeline::new(
        HttpReportSource::new(),
        storage,
        SystemClock,
        settings,
        urls,
    );

    match ReportEngine::new(pipeline).run().await {
        Ok(summary) => {
            tracing::info!(
                "Done: {} kept, {} absent, {} failed",
                summary.kept,
                summary.absent,
                summary.failed
            );
            let code = summary.exit_code();
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

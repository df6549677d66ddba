use crate::config::{FetchErrorPolicy, Settings};
use crate::core::catalog::describe_url;
use crate::core::filter::should_keep;
use crate::core::timestamp::format_timestamp;
use crate::core::{Clock, FetchReport, OutputDocument, Pipeline, ReportSource, Storage};
use crate::utils::error::Result;
use std::io::Write;
use std::sync::Mutex;

/// Fetches `urls` one at a time, keeps what passes the presence filter and
/// writes the document to `storage` when one is configured.
pub struct ReportPipeline<R: ReportSource, S: Storage, C: Clock> {
    source: R,
    storage: Option<S>,
    clock: C,
    settings: Settings,
    urls: Vec<String>,
    echo: Mutex<Box<dyn Write + Send>>,
}

impl<R: ReportSource, S: Storage, C: Clock> ReportPipeline<R, S, C> {
    pub fn new(source: R, storage: Option<S>, clock: C, settings: Settings, urls: Vec<String>) -> Self {
        Self {
            source,
            storage,
            clock,
            settings,
            urls,
            echo: Mutex::new(Box::new(std::io::stdout())),
        }
    }

    /// Replaces stdout as the destination for verbose echo.
    pub fn with_echo<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.echo = Mutex::new(Box::new(writer));
        self
    }

    fn echo(&self, args: std::fmt::Arguments) {
        if !self.settings.verbose {
            return;
        }
        let written = match self.echo.lock() {
            Ok(mut out) => out.write_fmt(args).and_then(|_| out.flush()),
            Err(_) => return,
        };
        if let Err(e) = written {
            tracing::warn!("Failed to echo report output: {}", e);
        }
    }
}

#[async_trait::async_trait]
impl<R: ReportSource, S: Storage, C: Clock> Pipeline for ReportPipeline<R, S, C> {
    async fn extract(&self) -> Result<FetchReport> {
        let mut report = FetchReport {
            started_at: self.clock.now(),
            ..FetchReport::default()
        };
        self.echo(format_args!(
            "{}\n",
            format_timestamp(report.started_at, self.settings.timezone)
        ));

        for url in &self.urls {
            let label = describe_url(url);
            tracing::debug!("Fetching {}", label);
            self.echo(format_args!("fetching {}...\n", url));

            let result = match self.source.fetch(url).await {
                Ok(result) => result,
                Err(e) => match self.settings.on_fetch_error {
                    FetchErrorPolicy::Skip => {
                        tracing::warn!("Failed to fetch {}: {}", label, e);
                        report.failed.push(url.clone());
                        continue;
                    }
                    FetchErrorPolicy::Abort => {
                        tracing::error!("Failed to fetch {}, aborting run: {}", label, e);
                        return Err(e);
                    }
                },
            };

            if should_keep(result.status, &result.body) {
                tracing::debug!(
                    "Kept {} (status {}, {} bytes)",
                    label,
                    result.status,
                    result.body.len()
                );
                self.echo(format_args!("{}\n", result.body));
                report.kept.push(result);
            } else {
                tracing::debug!("No report at {} (status {})", label, result.status);
                self.echo(format_args!("No report at {}\n", url));
                report.absent.push(url.clone());
            }
        }

        tracing::info!(
            "Fetched {} URLs: {} kept, {} absent, {} failed",
            self.urls.len(),
            report.kept.len(),
            report.absent.len(),
            report.failed.len()
        );
        Ok(report)
    }

    async fn transform(&self, fetched: FetchReport) -> Result<OutputDocument> {
        let mut document =
            OutputDocument::new(format_timestamp(fetched.started_at, self.settings.timezone));
        document.bodies = fetched.kept.into_iter().map(|r| r.body).collect();
        Ok(document)
    }

    async fn load(&self, document: &OutputDocument) -> Result<Option<String>> {
        let Some(storage) = &self.storage else {
            tracing::debug!("No output file configured, skipping write");
            return Ok(None);
        };

        let data = document.render();
        tracing::debug!("Writing {} bytes to {}", data.len(), storage.location());
        storage.write_file(data.as_bytes()).await?;
        Ok(Some(storage.location().to_string()))
    }
}

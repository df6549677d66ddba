use crate::core::{Pipeline, RunSummary};
use crate::utils::error::{ReportError, Result};

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs fetch, assembly and write. A failed write is reported on stderr
    /// and in the summary; it does not fail the run.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting report download");

        let fetched = self.pipeline.extract().await?;
        let mut summary = RunSummary {
            kept: fetched.kept.len(),
            absent: fetched.absent.len(),
            failed: fetched.failed.len(),
            ..RunSummary::default()
        };

        let document = self.pipeline.transform(fetched).await?;

        match self.pipeline.load(&document).await {
            Ok(Some(path)) => {
                tracing::info!("Wrote {} reports to {}", summary.kept, path);
                summary.written_to = Some(path);
            }
            Ok(None) => {}
            Err(ReportError::WriteError { path, source }) => {
                let message = format!("Unable to write to file {}", path);
                tracing::error!("{}: {}", message, source);
                eprintln!("{}", message);
                summary.write_error = Some(message);
            }
            Err(e) => return Err(e),
        }

        Ok(summary)
    }
}

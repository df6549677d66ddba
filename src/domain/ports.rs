use crate::domain::model::{FetchReport, OutputDocument, ReportResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Issues one GET per call. Transport failures surface as `Err`; any HTTP
/// status, including 4xx/5xx, is a successful fetch.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ReportResult>;
}

pub trait Storage: Send + Sync {
    fn location(&self) -> &str;
    fn write_file(&self, data: &[u8]) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<FetchReport>;
    async fn transform(&self, fetched: FetchReport) -> Result<OutputDocument>;
    /// Returns the written location, or `None` when no output is configured.
    async fn load(&self, document: &OutputDocument) -> Result<Option<String>>;
}

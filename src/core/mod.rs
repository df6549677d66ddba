pub mod catalog;
pub mod engine;
pub mod filter;
pub mod pipeline;
pub mod timestamp;
pub mod urls;

pub use crate::domain::model::{FetchReport, OutputDocument, ReportResult, RunSummary};
pub use crate::domain::ports::{Clock, Pipeline, ReportSource, Storage};
pub use crate::utils::error::Result;

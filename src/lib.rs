pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpReportSource, LocalStorage, SystemClock};
pub use config::{FetchErrorPolicy, Settings};
pub use crate::core::{engine::ReportEngine, pipeline::ReportPipeline, urls::report_urls};
pub use utils::error::{ReportError, Result};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One fetched URL, as returned by a `ReportSource`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportResult {
    pub url: String,
    pub body: String,
    pub status: u16,
}

/// Timestamp followed by the kept report bodies, in URL-list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    pub timestamp: String,
    pub bodies: Vec<String>,
}

impl OutputDocument {
    pub fn new(timestamp: String) -> Self {
        Self {
            timestamp,
            bodies: Vec::new(),
        }
    }

    /// File content: the timestamp line, then each body as-is.
    pub fn render(&self) -> String {
        let capacity =
            self.timestamp.len() + 1 + self.bodies.iter().map(String::len).sum::<usize>();
        let mut out = String::with_capacity(capacity);
        out.push_str(&self.timestamp);
        out.push('\n');
        for body in &self.bodies {
            out.push_str(body);
        }
        out
    }
}

/// Outcome of the fetch loop. `kept` is in URL-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub started_at: DateTime<Utc>,
    pub kept: Vec<ReportResult>,
    pub absent: Vec<String>,
    pub failed: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub kept: usize,
    pub absent: usize,
    pub failed: usize,
    pub written_to: Option<String>,
    pub write_error: Option<String>,
}

impl RunSummary {
    pub fn exit_code(&self) -> i32 {
        if self.write_error.is_some() {
            4
        } else {
            0
        }
    }
}

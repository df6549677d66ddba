use crate::domain::ports::Storage;
use crate::utils::error::{ReportError, Result};
use std::fs;

/// Writes the whole document to one file, truncating existing content.
/// Parent directories are not created.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: String,
}

impl LocalStorage {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl Storage for LocalStorage {
    fn location(&self) -> &str {
        &self.path
    }

    async fn write_file(&self, data: &[u8]) -> Result<()> {
        fs::write(&self.path, data).map_err(|source| ReportError::WriteError {
            path: self.path.clone(),
            source,
        })
    }
}

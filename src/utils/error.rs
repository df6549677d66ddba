use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Unknown timezone: {name}")]
    TimezoneError { name: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid report code '{code}': {reason}")]
    ReportCodeError { code: String, reason: String },

    #[error("Unable to write to file {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ReportError::TimezoneError { .. }
                | ReportError::InvalidConfigValueError { .. }
                | ReportError::ReportCodeError { .. }
                | ReportError::UrlError(_)
        )
    }

    /// Process exit code for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            e if e.is_config_error() => 1,
            ReportError::WriteError { .. } => 4,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

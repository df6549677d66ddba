#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::utils::error::Result;
use crate::utils::validation::{parse_timezone, validate_path, Validate};
use chrono_tz::Tz;

pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

/// What the fetch loop does when a request fails at the transport level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchErrorPolicy {
    /// Log the failure and move on to the next URL.
    #[default]
    Skip,
    /// Stop the run and return the error.
    Abort,
}

/// Resolved run configuration, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub output_file: Option<String>,
    pub timezone: Tz,
    pub verbose: bool,
    pub on_fetch_error: FetchErrorPolicy,
}

impl Settings {
    /// Verbose is forced on when there is no output file, since echo is then
    /// the only output.
    pub fn new(output_file: Option<String>, timezone: &str, verbose: bool) -> Result<Self> {
        let timezone = parse_timezone(timezone)?;
        let verbose = verbose || output_file.is_none();
        let settings = Self {
            output_file,
            timezone,
            verbose,
            on_fetch_error: FetchErrorPolicy::default(),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_fetch_error_policy(mut self, policy: FetchErrorPolicy) -> Self {
        self.on_fetch_error = policy;
        self
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output_file {
            validate_path("output_file", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ReportError;

    #[test]
    fn test_verbose_defaults_on_without_output_file() {
        let settings = Settings::new(None, DEFAULT_TIMEZONE, false).unwrap();
        assert!(settings.verbose);
        assert_eq!(settings.timezone, Tz::America__Los_Angeles);
        assert_eq!(settings.on_fetch_error, FetchErrorPolicy::Skip);
    }

    #[test]
    fn test_verbose_defaults_off_with_output_file() {
        let settings = Settings::new(Some("weather.txt".to_string()), DEFAULT_TIMEZONE, false).unwrap();
        assert!(!settings.verbose);
    }

    #[test]
    fn test_explicit_verbose_with_output_file() {
        let settings = Settings::new(Some("weather.txt".to_string()), DEFAULT_TIMEZONE, true).unwrap();
        assert!(settings.verbose);
    }

    #[test]
    fn test_invalid_timezone_is_config_error() {
        let err = Settings::new(None, "Not/AZone", false).unwrap_err();
        assert!(matches!(err, ReportError::TimezoneError { .. }));
        assert!(err.is_config_error());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_empty_output_path_rejected() {
        let err = Settings::new(Some(String::new()), DEFAULT_TIMEZONE, false).unwrap_err();
        assert!(matches!(err, ReportError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_fetch_error_policy_override() {
        let settings = Settings::new(None, "UTC", false)
            .unwrap()
            .with_fetch_error_policy(FetchErrorPolicy::Abort);
        assert_eq!(settings.on_fetch_error, FetchErrorPolicy::Abort);
    }
}

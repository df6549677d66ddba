use super::{Settings, DEFAULT_TIMEZONE};
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "nws-reports")]
#[command(about = "Download NWS text weather reports into a single file")]
pub struct CliConfig {
    /// Name of output file; without it reports are printed
    #[arg(short, long = "output-file")]
    pub output_file: Option<String>,

    /// Timezone for the timestamp line
    #[arg(short, long, default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,

    /// Echo each URL and report body
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn into_settings(self) -> Result<Settings> {
        Settings::new(self.output_file, &self.timezone, self.verbose)
    }
}

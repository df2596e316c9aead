pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_file_names, validate_path, validate_threshold};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_VALUE: f64 = 10.0;
pub const DEFAULT_FILTERED_FILE: &str = "filteredData.json";
pub const DEFAULT_SORTED_FILE: &str = "sortedData.json";
pub const DEFAULT_GROUPED_FILE: &str = "groupedData.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "json-records")]
#[command(about = "Filter, sort, group and summarize records from a JSON file")]
pub struct CliConfig {
    #[arg(long, default_value = "./data.json")]
    pub input: String,

    #[arg(long, default_value = ".")]
    pub output_dir: String,

    #[arg(long, default_value_t = DEFAULT_MIN_VALUE, allow_hyphen_values = true)]
    pub min_value: f64,

    #[arg(long, default_value = DEFAULT_FILTERED_FILE)]
    pub filtered_file: String,

    #[arg(long, default_value = DEFAULT_SORTED_FILE)]
    pub sorted_file: String,

    #[arg(long, default_value = DEFAULT_GROUPED_FILE)]
    pub grouped_file: String,

    #[arg(long, help = "Pretty-print exported JSON")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn min_value(&self) -> f64 {
        self.min_value
    }

    fn filtered_file(&self) -> &str {
        &self.filtered_file
    }

    fn sorted_file(&self) -> &str {
        &self.sorted_file
    }

    fn grouped_file(&self) -> &str {
        &self.grouped_file
    }

    fn pretty(&self) -> bool {
        self.pretty
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// 所有 ConfigProvider 共用的檢查
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_path("input", config.input_path())?;
    validate_path("output_dir", config.output_dir())?;
    validate_threshold("min_value", config.min_value())?;
    validate_distinct_file_names(
        "output file",
        &[
            config.filtered_file(),
            config.sorted_file(),
            config.grouped_file(),
        ],
    )
}

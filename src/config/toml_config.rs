use crate::config::{
    validate_provider, DEFAULT_FILTERED_FILE, DEFAULT_GROUPED_FILE, DEFAULT_MIN_VALUE,
    DEFAULT_SORTED_FILE,
};
use crate::core::ConfigProvider;
use crate::utils::error::{RecordError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: JobConfig,
    pub input: InputConfig,
    pub query: Option<QueryConfig>,
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub min_value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: String,
    pub pretty: Option<bool>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub filtered: Option<String>,
    pub sorted: Option<String>,
    pub grouped: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RecordError::MissingConfigError {
                field: path.as_ref().display().to_string(),
            },
            _ => RecordError::IoError(e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RecordError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("job.name", &self.job.name)?;
        validate_provider(self)
    }

    pub fn verbose_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    /// 命令列覆蓋門檻值
    pub fn set_min_value(&mut self, min_value: f64) {
        self.query = Some(QueryConfig {
            min_value: Some(min_value),
        });
    }

    fn filename(&self, pick: fn(&FilenameConfig) -> Option<&String>, default: &'static str) -> &str {
        self.output
            .filenames
            .as_ref()
            .and_then(pick)
            .map(String::as_str)
            .unwrap_or(default)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn output_dir(&self) -> &str {
        &self.output.directory
    }

    fn min_value(&self) -> f64 {
        self.query
            .as_ref()
            .and_then(|q| q.min_value)
            .unwrap_or(DEFAULT_MIN_VALUE)
    }

    fn filtered_file(&self) -> &str {
        self.filename(|f| f.filtered.as_ref(), DEFAULT_FILTERED_FILE)
    }

    fn sorted_file(&self) -> &str {
        self.filename(|f| f.sorted.as_ref(), DEFAULT_SORTED_FILE)
    }

    fn grouped_file(&self) -> &str {
        self.filename(|f| f.grouped.as_ref(), DEFAULT_GROUPED_FILE)
    }

    fn pretty(&self) -> bool {
        self.output.pretty.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Malformed input '{source_path}': {reason}")]
    MalformedInput { source_path: String, reason: String },

    #[error("Cannot compute {operation}: no records are loaded")]
    EmptyStore { operation: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 程序結束碼：Low 視為成功
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl RecordError {
    pub fn malformed(source_path: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedInput {
            source_path: source_path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedInput { .. } => ErrorCategory::Input,
            Self::EmptyStore { .. } => ErrorCategory::Data,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Output,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 空資料集只影響統計值
            Self::EmptyStore { .. } => ErrorSeverity::Low,
            Self::MalformedInput { .. } => ErrorSeverity::Medium,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MalformedInput { .. } => {
                "Check that the input file exists and looks like {\"data\": [{\"id\": 1, \"name\": \"a\", \"value\": 1.0}]}"
            }
            Self::EmptyStore { .. } => "Load a file containing at least one record",
            Self::IoError(_) => "Check that the output directory is writable and has free space",
            Self::SerializationError(_) => "Check the records for values that cannot be represented in JSON",
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            Self::MissingConfigError { .. } => "Create the configuration file or pass --config",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MalformedInput { source_path, .. } => {
                format!("無法讀取輸入檔案 {}: {}", source_path, self)
            }
            Self::EmptyStore { operation } => format!("沒有資料可計算 {}", operation),
            Self::IoError(e) => format!("檔案寫入失敗: {}", e),
            Self::SerializationError(e) => format!("JSON 序列化失敗: {}", e),
            _ => format!("配置錯誤: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;

use crate::utils::error::{RecordError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RecordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RecordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_threshold(field_name: &str, value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(RecordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Threshold must be a number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RecordError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 三個輸出檔名不可重複，否則後寫入的結果會覆蓋前一個
pub fn validate_distinct_file_names(field_name: &str, names: &[&str]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        validate_non_empty_string(field_name, name)?;
        validate_path(field_name, name)?;
        if !seen.insert(*name) {
            return Err(RecordError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Output file names must be distinct".to_string(),
            });
        }
    }
    Ok(())
}

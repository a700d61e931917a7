use crate::utils::error::{RestructureError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RestructureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RestructureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 輸入與輸出不可指向同一個檔案，否則失敗時會覆蓋原始資料
pub fn validate_distinct_paths(input: &str, output: &str) -> Result<()> {
    if Path::new(input) == Path::new(output) {
        return Err(RestructureError::InvalidConfigValueError {
            field: "paths.output".to_string(),
            value: output.to_string(),
            reason: "Output path must differ from the input path".to_string(),
        });
    }
    Ok(())
}

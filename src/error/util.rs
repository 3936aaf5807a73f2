//! Utility functions for error handling
//!
//! Filesystem helpers that attach the path and purpose to any failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{GrowthError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(GrowthError::not_found(
            path,
            format!("File not found (needed for: {purpose})"),
        ));
    }

    if !path.is_file() {
        return Err(GrowthError::not_found(
            path,
            format!("Path is not a file (expected a file for: {purpose})"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        GrowthError::io(path, context, e)
    })
}

/// Check if a directory exists and is readable, with rich error information
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(GrowthError::not_found(
            path,
            format!("Directory not found (needed for: {purpose})"),
        ));
    }

    if !path.is_dir() {
        return Err(GrowthError::not_found(
            path,
            format!("Path is not a directory (expected a directory for: {purpose})"),
        ));
    }

    match fs::read_dir(path) {
        Ok(_) => Ok(()),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check directory permissions".to_string()
                }
                _ => format!("Failed to access directory for: {purpose}"),
            };
            Err(GrowthError::io(path, context, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("wfa-all.csv");

        let err = safe_open_file(&missing, "weight-for-age table").unwrap_err();
        assert!(matches!(err, GrowthError::NotFound { .. }));
        assert!(err.to_string().contains("weight-for-age table"));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = safe_open_file(dir.path(), "reference table").unwrap_err();
        assert!(err.to_string().contains("Path is not a file"));
        assert!(validate_directory(dir.path(), "reference tables").is_ok());
    }
}

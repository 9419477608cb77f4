//! Command argument validation utilities
//!
//! Checks that run after clap parsing and before any network traffic, so a
//! bad name is reported without touching GitHub.

use crate::utils::validators as names;
use anyhow::{Result, anyhow};
use std::path::Path;

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
    /// A path argument does not point at what the command needs
    InvalidPath {
        argument: String,
        path: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
            CommandValidationError::InvalidPath {
                argument,
                path,
                reason,
            } => {
                write!(f, "Invalid path '{}' for {}: {}", path, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate the repository name argument
pub fn validate_repository_name(name: &str) -> Result<()> {
    names::validate_repository_name(name).map_err(|e| {
        validation_error_to_anyhow(CommandValidationError::InvalidValue {
            argument: "repository name".to_string(),
            value: name.to_string(),
            reason: e.to_string(),
        })
    })
}

/// Validate a branch name argument
pub fn validate_branch_name(branch: &str) -> Result<()> {
    names::validate_branch_name(branch).map_err(|e| {
        validation_error_to_anyhow(CommandValidationError::InvalidValue {
            argument: "--branch".to_string(),
            value: branch.to_string(),
            reason: e.to_string(),
        })
    })
}

/// Validate the `--files` argument when given
pub fn validate_files_arg(files: &Option<impl AsRef<Path>>) -> Result<()> {
    let Some(path) = files else {
        return Ok(());
    };
    let path = path.as_ref();
    if !path.is_file() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidPath {
                argument: "--files".to_string(),
                path: path.display().to_string(),
                reason: "file not found".to_string(),
            },
        ));
    }
    Ok(())
}

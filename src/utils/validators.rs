//! Name validation utilities
//!
//! Centralized rules for repository and branch names, shared by the
//! orchestrator and the command-line argument checks.

use regex::Regex;
use std::sync::LazyLock;

/// Longest repository name GitHub accepts
const MAX_REPOSITORY_NAME_LEN: usize = 100;

static REPOSITORY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("valid repository name pattern"));

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Repository name is empty or whitespace-only
    EmptyRepositoryName,
    /// Repository name is not usable on GitHub
    InvalidRepositoryName(String, &'static str),
    /// Branch name is empty or whitespace-only
    EmptyBranchName,
    /// Branch name breaks basic git ref rules
    InvalidBranchName(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyRepositoryName => {
                write!(f, "Repository name cannot be empty")
            }
            ValidationError::InvalidRepositoryName(name, reason) => {
                write!(f, "Invalid repository name '{}': {}", name, reason)
            }
            ValidationError::EmptyBranchName => {
                write!(f, "Branch name cannot be empty")
            }
            ValidationError::InvalidBranchName(name) => {
                write!(f, "Invalid Git branch name: '{}'", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a repository name against GitHub's naming rules
pub fn validate_repository_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyRepositoryName);
    }
    if name == "." || name == ".." {
        return Err(ValidationError::InvalidRepositoryName(
            name.to_string(),
            "name is reserved",
        ));
    }
    if name.len() > MAX_REPOSITORY_NAME_LEN {
        return Err(ValidationError::InvalidRepositoryName(
            name.to_string(),
            "name is longer than 100 characters",
        ));
    }
    if !REPOSITORY_NAME.is_match(name) {
        return Err(ValidationError::InvalidRepositoryName(
            name.to_string(),
            "only letters, digits, '.', '-' and '_' are allowed",
        ));
    }
    Ok(())
}

/// Validates a branch name against basic git ref rules
pub fn validate_branch_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyBranchName);
    }

    let invalid = name.starts_with('-')
        || name.starts_with('/')
        || name.ends_with('/')
        || name.ends_with('.')
        || name.ends_with(".lock")
        || name.contains("..")
        || name.contains("//")
        || name.contains("@{")
        || name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || "~^:?*[\\".contains(c));

    if invalid {
        return Err(ValidationError::InvalidBranchName(name.to_string()));
    }
    Ok(())
}

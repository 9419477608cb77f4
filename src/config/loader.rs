//! Configuration loading from the environment

use crate::constants;
use anyhow::Result;
use std::path::Path;
use tracing::warn;

/// Identity used for commits created while publishing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitIdentity {
    pub name: String,
    pub email: String,
}

/// Process-wide settings, built once at startup and passed down explicitly
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential attached to every GitHub request
    pub github_token: Option<String>,
    /// Owner override; resolved through the API when absent
    pub github_username: Option<String>,
    /// Visibility used when `--private` is not given
    pub default_private: bool,
    /// Description sent to GitHub when the caller leaves it empty
    pub default_description: String,
    /// Label for safe-like branches in command output (never matched against)
    pub safe_branch_pattern: String,
    pub api_base: String,
    pub commit_identity: Option<CommitIdentity>,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// A `.env` file in the working directory is read first, without
    /// overriding variables that are already set.
    pub fn from_env() -> Self {
        let env_file = Path::new(constants::config::ENV_FILE);
        if env_file.exists() {
            // Lines before the malformed one are already applied
            if let Err(e) = load_env_file(env_file) {
                warn!(file = %env_file.display(), error = %e, "ignoring malformed .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let commit_identity = match (non_empty("GIT_AUTHOR_NAME"), non_empty("GIT_AUTHOR_EMAIL")) {
            (Some(name), Some(email)) => Some(CommitIdentity { name, email }),
            _ => None,
        };

        Self {
            github_token: non_empty("GITHUB_TOKEN"),
            github_username: non_empty("GITHUB_USERNAME"),
            default_private: non_empty("DEFAULT_PRIVATE")
                .map(|value| value.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            default_description: non_empty("DEFAULT_DESCRIPTION")
                .unwrap_or_else(|| constants::config::DEFAULT_DESCRIPTION.to_string()),
            safe_branch_pattern: non_empty("SAFE_BRANCH_PATTERN")
                .unwrap_or_else(|| constants::config::DEFAULT_SAFE_BRANCH_PATTERN.to_string()),
            api_base: non_empty("GITHUB_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| constants::github::API_BASE.to_string()),
            commit_identity,
        }
    }

    /// Validate that required configuration is present
    pub fn validate(&self) -> Result<()> {
        if self.github_token.is_none() {
            anyhow::bail!(
                "GITHUB_TOKEN is required. Please set it in your .env file or environment variables."
            );
        }
        Ok(())
    }

    /// The bearer token, failing if it is missing
    pub fn token(&self) -> Result<&str> {
        self.validate()?;
        self.github_token
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("GITHUB_TOKEN is required"))
    }

    /// Create a new configuration with defaults and no credentials
    pub fn new() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Apply `path` to the process environment without overriding set variables
pub(crate) fn load_env_file(path: &Path) -> std::result::Result<(), dotenvy::Error> {
    dotenvy::from_path(path)
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

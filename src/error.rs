//! Error taxonomy shared by every provisioning layer
//!
//! Host rejections, missing repositories, git failures and missing templates
//! are all expected outcomes of a provisioning run. They are returned as
//! [`ProvisionError`] values and never raised as panics.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used by the gateway, the VCS driver, the workspace and the orchestrator
pub type ProvisionResult<T> = std::result::Result<T, ProvisionError>;

/// Discriminant of a [`ProvisionError`], convenient for matching in callers and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RemoteRejected,
    RepositoryNotFound,
    VcsFailure,
    TemplateMissing,
    Transport,
    InternalFailure,
}

#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The hosting API answered with a non-success status
    #[error("{}", format_rejection(.status, .message))]
    RemoteRejected {
        status: Option<u16>,
        message: String,
    },

    /// A repository lookup came back empty
    #[error("Repository {0} not found")]
    RepositoryNotFound(String),

    /// The git binary failed or reported an error
    #[error("Git operation failed: {0}")]
    VcsFailure(String),

    /// A local directory required by the workflow is missing or is not a directory
    #[error("Template path does not exist or is not a directory: {}", .0.display())]
    TemplateMissing(PathBuf),

    /// The HTTP exchange with the host never completed
    #[error("GitHub request failed: {0}")]
    Transport(String),

    /// Anything else, including bad arguments and local I/O faults
    #[error("{0}")]
    InternalFailure(String),
}

fn format_rejection(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("HTTP {}: {}", code, message),
        None => message.to_string(),
    }
}

impl ProvisionError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::RemoteRejected {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalFailure(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RemoteRejected { .. } => ErrorKind::RemoteRejected,
            Self::RepositoryNotFound(_) => ErrorKind::RepositoryNotFound,
            Self::VcsFailure(_) => ErrorKind::VcsFailure,
            Self::TemplateMissing(_) => ErrorKind::TemplateMissing,
            Self::Transport(_) => ErrorKind::Transport,
            Self::InternalFailure(_) => ErrorKind::InternalFailure,
        }
    }

    /// HTTP status reported by the host, if this is a rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRejected { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProvisionError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::rejected(status.as_u16(), err.to_string()),
            None => Self::Transport(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ProvisionError {
    fn from(err: std::io::Error) -> Self {
        Self::InternalFailure(err.to_string())
    }
}

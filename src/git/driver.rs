//! Publishing a local directory to a remote branch

use super::common::Logger;
use super::operations::{self, PushOutcome};
use crate::config::CommitIdentity;
use crate::constants::git::{INITIAL_COMMIT_MSG, REMOTE_NAME};
use crate::error::{ProvisionError, ProvisionResult};
use std::path::Path;
use tracing::{debug, warn};

/// What a publish run actually did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// A new working copy was initialized
    pub initialized: bool,
    /// A commit was created; false when the tree was already clean
    pub committed: bool,
    /// The first push was rejected and a forced push replaced the remote branch
    pub forced: bool,
}

/// Capability interface over the local version-control tool
pub trait VersionControl: Send + Sync {
    /// Commit everything under `local_dir` and push it to `branch` of `remote_url`
    fn publish(&self, local_dir: &Path, remote_url: &str, branch: &str) -> ProvisionResult<PublishReport>;
}

/// [`VersionControl`] backed by the system `git` binary
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    identity: Option<CommitIdentity>,
}

impl GitCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Author commits as `identity` instead of the user's git configuration
    pub fn with_identity(mut self, identity: Option<CommitIdentity>) -> Self {
        self.identity = identity;
        self
    }
}

fn label_for(local_dir: &Path) -> String {
    local_dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| local_dir.display().to_string())
}

impl VersionControl for GitCli {
    fn publish(&self, local_dir: &Path, remote_url: &str, branch: &str) -> ProvisionResult<PublishReport> {
        let logger = Logger;
        let label = label_for(local_dir);
        let mut report = PublishReport::default();

        if !local_dir.is_dir() {
            return Err(ProvisionError::internal(format!(
                "Local path is not a directory: {}",
                local_dir.display()
            )));
        }

        if !operations::is_repository(local_dir) {
            operations::init_repository(local_dir, branch)?;
            report.initialized = true;
            logger.info(&label, "Initialized git repository");
        }

        operations::set_remote(local_dir, REMOTE_NAME, remote_url)?;
        operations::add_all_changes(local_dir)?;

        if operations::has_changes(local_dir)? {
            operations::commit_changes(local_dir, INITIAL_COMMIT_MSG, self.identity.as_ref())?;
            report.committed = true;
            logger.info(&label, "Committed initial changes");
        } else {
            debug!(dir = %local_dir.display(), "nothing to commit");
        }

        if let PushOutcome::Rejected { details } =
            operations::push_branch(local_dir, REMOTE_NAME, branch, false)?
        {
            warn!(%details, "push rejected, retrying with --force");
            logger.warn(&label, "Push rejected, retrying with force");

            if let PushOutcome::Rejected { details } =
                operations::push_branch(local_dir, REMOTE_NAME, branch, true)?
            {
                return Err(ProvisionError::VcsFailure(format!(
                    "Forced push of '{}' was rejected: {}",
                    branch, details
                )));
            }
            report.forced = true;
        }

        logger.success(&label, &format!("Successfully pushed to {}", remote_url));
        Ok(report)
    }
}

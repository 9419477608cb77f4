//! Results of a provisioning run

use crate::error::ProvisionResult;
use crate::git::PublishReport;
use crate::github::RemoteRepository;
use std::path::PathBuf;

/// Step results of the branch protection sub-workflow
///
/// Only the two protection steps decide overall success. Creating and
/// emptying the safe branch may fail on a re-run where the branch already
/// exists; those failures are kept for display but tolerated.
#[derive(Debug)]
pub struct ProtectionReport {
    pub main_protection: ProvisionResult<()>,
    /// SHA the new safe ref was created at
    pub safe_branch_created: ProvisionResult<String>,
    /// SHA of the empty commit the safe ref was moved to
    pub safe_branch_emptied: ProvisionResult<String>,
    pub safe_protection: ProvisionResult<()>,
}

impl ProtectionReport {
    pub fn is_success(&self) -> bool {
        self.main_protection.is_ok() && self.safe_protection.is_ok()
    }

    /// Combined message of the failed protection steps, if any
    pub fn error(&self) -> Option<String> {
        let mut errors = Vec::new();
        if let Err(e) = &self.main_protection {
            errors.push(format!("Failed to protect main branch: {}", e));
        }
        if let Err(e) = &self.safe_protection {
            errors.push(format!("Failed to protect safe branch: {}", e));
        }

        if errors.is_empty() {
            None
        } else {
            Some(errors.join("; "))
        }
    }

    /// Messages of the tolerated safe-branch setup failures
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Err(e) = &self.safe_branch_created {
            warnings.push(format!("Could not create safe branch: {}", e));
        }
        if let Err(e) = &self.safe_branch_emptied {
            warnings.push(format!("Could not empty safe branch: {}", e));
        }
        warnings
    }
}

/// Everything a successful create workflow produced
#[derive(Debug)]
pub struct ProvisionReport {
    pub repository: RemoteRepository,
    /// Directory that was published
    pub local_path: PathBuf,
    pub publish: PublishReport,
    /// Attached, never fatal: the repository and its content are the deliverable
    pub branch_protection: ProtectionReport,
}

//! Git operations for the publish workflow
//!
//! Thin wrappers over the system `git` binary. Each function runs one git
//! command in the working copy and maps a non-zero exit into
//! `ProvisionError::VcsFailure` carrying git's own diagnostic text.
//!
//! ## Publish Workflow
//!
//! 1. [`is_repository`] / [`init_repository`] - Open or create the working copy
//! 2. [`set_remote`] - Point `origin` at the remote URL
//! 3. [`add_all_changes`] - Stage everything, including deletions
//! 4. [`has_changes`] / [`commit_changes`] - Commit only when something is staged
//! 5. [`push_branch`] - Push `HEAD` to the remote branch

use crate::config::CommitIdentity;
use crate::error::{ProvisionError, ProvisionResult};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a push attempt that reached the remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed,
    /// The remote refused the update, e.g. because it is not a fast-forward
    Rejected { details: String },
}

impl PushOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, PushOutcome::Rejected { .. })
    }
}

fn git_command(repo_path: &Path) -> Command {
    let mut command = Command::new("git");
    command
        .current_dir(repo_path)
        // Never block on a credential prompt
        .env("GIT_TERMINAL_PROMPT", "0");
    command
}

fn spawn(mut command: Command, name: &str) -> ProvisionResult<Output> {
    command.output().map_err(|e| {
        ProvisionError::VcsFailure(format!("Failed to execute git {} command: {}", name, e))
    })
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

fn run_checked(command: Command, name: &str, failure: &str) -> ProvisionResult<Output> {
    let output = spawn(command, name)?;
    if !output.status.success() {
        return Err(ProvisionError::VcsFailure(format!(
            "{}: {}",
            failure,
            stderr_of(&output)
        )));
    }
    Ok(output)
}

/// Check whether `repo_path` is the root of a git working copy
pub fn is_repository(repo_path: &Path) -> bool {
    repo_path.join(".git").exists()
}

/// Initialize a working copy whose unborn branch is `branch`
pub fn init_repository(repo_path: &Path, branch: &str) -> ProvisionResult<()> {
    let mut command = git_command(repo_path);
    command.arg("init").arg("--quiet");
    run_checked(command, "init", "Failed to initialize repository")?;

    // Works on every git version, unlike `init --initial-branch`
    let mut command = git_command(repo_path);
    command
        .arg("symbolic-ref")
        .arg("HEAD")
        .arg(format!("refs/heads/{}", branch));
    run_checked(command, "symbolic-ref", "Failed to set initial branch")?;

    Ok(())
}

/// URL of a named remote, or `None` if the remote does not exist
pub fn get_remote_url(repo_path: &Path, remote: &str) -> ProvisionResult<Option<String>> {
    let mut command = git_command(repo_path);
    command.args(["remote", "get-url", remote]);
    let output = spawn(command, "remote")?;

    if output.status.success() {
        let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(Some(url))
    } else {
        Ok(None)
    }
}

/// Create `remote` pointing at `url`, or repoint it if it already exists
pub fn set_remote(repo_path: &Path, remote: &str, url: &str) -> ProvisionResult<()> {
    let action = if get_remote_url(repo_path, remote)?.is_some() {
        "set-url"
    } else {
        "add"
    };

    let mut command = git_command(repo_path);
    command.args(["remote", action, remote, url]);
    run_checked(command, "remote", &format!("Failed to configure remote '{}'", remote))?;
    Ok(())
}

/// Add all changes to the staging area
pub fn add_all_changes(repo_path: &Path) -> ProvisionResult<()> {
    let mut command = git_command(repo_path);
    command.args(["add", "--all"]);
    run_checked(command, "add", "Failed to add changes")?;
    Ok(())
}

/// Check if a repository has staged, modified or untracked changes
pub fn has_changes(repo_path: &Path) -> ProvisionResult<bool> {
    let mut command = git_command(repo_path);
    command.args(["status", "--porcelain"]);
    let output = run_checked(command, "status", "Failed to check repository status")?;

    // If output is empty, there are no changes
    Ok(!output.stdout.is_empty())
}

/// Commit staged changes with a message
pub fn commit_changes(
    repo_path: &Path,
    message: &str,
    identity: Option<&CommitIdentity>,
) -> ProvisionResult<()> {
    let mut command = git_command(repo_path);
    if let Some(identity) = identity {
        command
            .arg("-c")
            .arg(format!("user.name={}", identity.name))
            .arg("-c")
            .arg(format!("user.email={}", identity.email));
    }
    command.args(["commit", "--quiet", "-m", message]);
    run_checked(command, "commit", "Failed to commit changes")?;
    Ok(())
}

/// Push `HEAD` to `refs/heads/<branch>` on `remote`
///
/// A refused update is reported as [`PushOutcome::Rejected`] so the caller
/// can decide to force; any other failure is `VcsFailure`.
pub fn push_branch(
    repo_path: &Path,
    remote: &str,
    branch: &str,
    force: bool,
) -> ProvisionResult<PushOutcome> {
    let refspec = format!("HEAD:refs/heads/{}", branch);
    let mut command = git_command(repo_path);
    command.arg("push");
    if force {
        command.arg("--force");
    }
    command.arg(remote).arg(&refspec);

    let output = spawn(command, "push")?;
    if output.status.success() {
        return Ok(PushOutcome::Pushed);
    }

    let stderr = stderr_of(&output);
    if is_rejection(&stderr) {
        return Ok(PushOutcome::Rejected { details: stderr });
    }

    Err(ProvisionError::VcsFailure(format!(
        "Failed to push branch '{}': {}",
        branch, stderr
    )))
}

fn is_rejection(stderr: &str) -> bool {
    stderr.contains("non-fast-forward")
        || stderr.contains("[rejected]")
        || stderr.contains("fetch first")
        || stderr.contains("Updates were rejected")
}

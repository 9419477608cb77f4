//! Branch protection sub-workflow run after a repository is published
//!
//! 1. Protect `main` with the main rules
//! 2. Create `safe` at `main`'s head
//! 3. Commit an empty tree on top of that head and force `safe` onto it,
//!    so `safe` keeps `main`'s history but carries no files
//! 4. Protect `safe` with the stricter safe rules

use super::report::ProtectionReport;
use crate::constants::git::DEFAULT_BRANCH;
use crate::constants::protection::{EMPTY_SAFE_COMMIT_MSG, SAFE_BRANCH};
use crate::error::{ProvisionError, ProvisionResult};
use crate::git::Logger;
use crate::github::{RepositoryGateway, branch_ref};
use crate::protection::{BranchClass, rules_for};
use tracing::warn;

/// Resolve the rules for `class` and put them on `branch`
pub(crate) async fn apply_rules<G>(
    gateway: &G,
    repo: &str,
    branch: &str,
    class: BranchClass,
) -> ProvisionResult<()>
where
    G: RepositoryGateway + ?Sized,
{
    let rules = rules_for(class).ok_or_else(|| {
        ProvisionError::internal(format!(
            "No protection rules defined for {} branch '{}'",
            class, branch
        ))
    })?;
    gateway.put_branch_protection(repo, branch, &rules).await
}

/// Create the safe branch from `main` and strip every file from it
///
/// Returns the results of creating the ref and of emptying it.
async fn prepare_safe_branch<G>(
    gateway: &G,
    repo: &str,
) -> (ProvisionResult<String>, ProvisionResult<String>)
where
    G: RepositoryGateway + ?Sized,
{
    let main_head = match gateway.branch_head(repo, DEFAULT_BRANCH).await {
        Ok(sha) => sha,
        Err(e) => {
            let skipped = ProvisionError::internal(format!("skipped, main head unavailable: {}", e));
            return (Err(e), Err(skipped));
        }
    };

    let safe_ref = branch_ref(SAFE_BRANCH);
    let created = gateway.create_ref(repo, &safe_ref, &main_head).await;
    // A ref that was not ours to create is left where it is
    if let Err(e) = &created {
        let skipped = ProvisionError::internal(format!("skipped, safe branch was not created: {}", e));
        return (created, Err(skipped));
    }

    let emptied = match gateway
        .create_empty_commit(repo, EMPTY_SAFE_COMMIT_MSG, &main_head)
        .await
    {
        Ok(commit) => {
            let moved = gateway.update_ref(repo, &safe_ref, &commit).await;
            moved.map(|()| commit)
        }
        Err(e) => Err(e),
    };

    (created, emptied)
}

pub(crate) async fn protect_main_and_safe<G>(gateway: &G, repo: &str) -> ProtectionReport
where
    G: RepositoryGateway + ?Sized,
{
    let logger = Logger;

    let main_protection = apply_rules(gateway, repo, DEFAULT_BRANCH, BranchClass::Main).await;
    match &main_protection {
        Ok(()) => logger.success(repo, "main branch: protected"),
        Err(e) => logger.warn(repo, &format!("main branch protection failed: {}", e)),
    }

    let (safe_branch_created, safe_branch_emptied) = prepare_safe_branch(gateway, repo).await;
    if let Err(e) = &safe_branch_created {
        warn!(repository = repo, error = %e, "could not create safe branch");
    }
    match &safe_branch_emptied {
        Ok(_) => logger.info(repo, "Created empty safe branch"),
        Err(e) => warn!(repository = repo, error = %e, "could not empty safe branch"),
    }

    let safe_protection = apply_rules(gateway, repo, SAFE_BRANCH, BranchClass::Safe).await;
    match &safe_protection {
        Ok(()) => logger.success(repo, "safe branch: created and protected"),
        Err(e) => logger.warn(repo, &format!("safe branch setup failed: {}", e)),
    }

    ProtectionReport {
        main_protection,
        safe_branch_created,
        safe_branch_emptied,
        safe_protection,
    }
}

//! Branch protection endpoint

use super::client::{GitHubClient, ensure_success};
use crate::error::ProvisionResult;
use crate::protection::ProtectionRuleSet;
use reqwest::{Method, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct PullRequestReviewRules {
    required_approving_review_count: u32,
    dismiss_stale_reviews: bool,
    require_code_owner_reviews: bool,
}

/// Body of `PUT /repos/{owner}/{repo}/branches/{branch}/protection`
///
/// `required_status_checks` and `restrictions` are always sent as `null`;
/// GitHub requires the keys to be present.
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct BranchProtectionPayload {
    required_status_checks: Option<Value>,
    enforce_admins: bool,
    required_pull_request_reviews: Option<PullRequestReviewRules>,
    restrictions: Option<Value>,
    allow_force_pushes: bool,
    allow_deletions: bool,
    required_conversation_resolution: bool,
    required_linear_history: bool,
}

impl From<&ProtectionRuleSet> for BranchProtectionPayload {
    fn from(rules: &ProtectionRuleSet) -> Self {
        Self {
            required_status_checks: None,
            enforce_admins: rules.enforce_for_admins,
            required_pull_request_reviews: Some(PullRequestReviewRules {
                required_approving_review_count: rules.require_approvals,
                dismiss_stale_reviews: rules.dismiss_stale_reviews,
                require_code_owner_reviews: rules.require_code_owner_review,
            }),
            restrictions: None,
            allow_force_pushes: rules.allow_force_push,
            allow_deletions: rules.allow_deletion,
            required_conversation_resolution: rules.require_conversation_resolution,
            required_linear_history: rules.require_linear_history,
        }
    }
}

impl GitHubClient {
    /// `/repos/{owner}/{repo}/branches/{branch}/protection`; slashes in the
    /// branch name stay path separators, everything else is encoded
    pub(crate) fn protection_url(&self, repo: &str, branch: &str) -> ProvisionResult<Url> {
        let segments = std::iter::once("branches")
            .chain(branch.split('/'))
            .chain(std::iter::once("protection"));
        self.repo_url(repo, segments)
    }

    /// Create or replace the protection rules of a branch
    ///
    /// Re-applying the same rules is harmless. A missing branch or missing
    /// admin permission comes back as `RemoteRejected` with GitHub's status.
    pub async fn put_branch_protection(
        &self,
        repo: &str,
        branch: &str,
        rules: &ProtectionRuleSet,
    ) -> ProvisionResult<()> {
        let url = self.protection_url(repo, branch)?;
        let payload = BranchProtectionPayload::from(rules);

        let response = self.request_url(Method::PUT, url).json(&payload).send().await?;
        ensure_success(response, "apply branch protection").await?;
        info!(repository = repo, branch, "applied branch protection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protection::{BranchClass, rules_for};

    #[test]
    fn test_main_payload() {
        let rules = rules_for(BranchClass::Main).unwrap();
        let json = serde_json::to_value(BranchProtectionPayload::from(&rules)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "required_status_checks": null,
                "enforce_admins": false,
                "required_pull_request_reviews": {
                    "required_approving_review_count": 1,
                    "dismiss_stale_reviews": true,
                    "require_code_owner_reviews": true
                },
                "restrictions": null,
                "allow_force_pushes": false,
                "allow_deletions": false,
                "required_conversation_resolution": true,
                "required_linear_history": true
            })
        );
    }

    #[test]
    fn test_protection_url_keeps_branch_in_its_segment() {
        let client = GitHubClient::new("token").with_owner("o");
        let url = client.protection_url("demo", "fix#1").unwrap();
        assert_eq!(url.path(), "/repos/o/demo/branches/fix%231/protection");

        let url = client.protection_url("demo", "feature/login").unwrap();
        assert_eq!(url.path(), "/repos/o/demo/branches/feature/login/protection");
    }

    #[test]
    fn test_safe_payload_is_stricter() {
        let rules = rules_for(BranchClass::Safe).unwrap();
        let json = serde_json::to_value(BranchProtectionPayload::from(&rules)).unwrap();
        assert_eq!(json["enforce_admins"], true);
        assert_eq!(
            json["required_pull_request_reviews"]["required_approving_review_count"],
            2
        );
    }
}

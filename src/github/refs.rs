//! Git data API operations: refs, trees and commits

use super::client::{GitHubClient, ensure_success, parse_json};
use super::types::{GitObject, GitRef};
use crate::error::ProvisionResult;
use reqwest::{Method, Url};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct CreateRefPayload<'a> {
    #[serde(rename = "ref")]
    ref_name: &'a str,
    sha: &'a str,
}

#[derive(Serialize)]
struct UpdateRefPayload<'a> {
    sha: &'a str,
    force: bool,
}

#[derive(Serialize)]
struct TreeEntry<'a> {
    path: &'a str,
    mode: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct CreateTreePayload<'a> {
    tree: Vec<TreeEntry<'a>>,
}

#[derive(Serialize)]
struct CreateCommitPayload<'a> {
    message: &'a str,
    tree: &'a str,
    parents: Vec<&'a str>,
}

/// `refs/heads/x` becomes `heads/x`, the form used in `/git/ref(s)/...` paths
pub(crate) fn ref_path(ref_name: &str) -> &str {
    ref_name.strip_prefix("refs/").unwrap_or(ref_name)
}

/// `x` becomes `refs/heads/x`; fully qualified names pass through
pub fn branch_ref(branch: &str) -> String {
    if branch.starts_with("refs/") {
        branch.to_string()
    } else {
        format!("refs/heads/{}", branch)
    }
}

impl GitHubClient {
    /// URL of `/repos/{owner}/{repo}/git/<endpoint>/<ref path>`
    ///
    /// `refs/heads/a/b` becomes the segments `heads`, `a`, `b`, each encoded.
    pub(crate) fn git_ref_url(&self, repo: &str, endpoint: &str, ref_name: &str) -> ProvisionResult<Url> {
        let full_ref = branch_ref(ref_name);
        let segments = ["git", endpoint]
            .into_iter()
            .chain(ref_path(&full_ref).split('/'));
        self.repo_url(repo, segments)
    }

    /// SHA of the commit a branch points at
    pub async fn branch_head(&self, repo: &str, branch: &str) -> ProvisionResult<String> {
        let url = self.git_ref_url(repo, "ref", branch)?;
        let response = self.request_url(Method::GET, url).send().await?;
        let response = ensure_success(response, "get branch head").await?;
        let git_ref: GitRef = parse_json(response).await?;
        Ok(git_ref.object.sha)
    }

    /// Create `ref_name` pointing at `from_sha`; fails if the ref already exists
    pub async fn create_ref(&self, repo: &str, ref_name: &str, from_sha: &str) -> ProvisionResult<String> {
        let url = self.repo_url(repo, ["git", "refs"])?;
        let full_ref = branch_ref(ref_name);
        let payload = CreateRefPayload {
            ref_name: &full_ref,
            sha: from_sha,
        };

        let response = self.request_url(Method::POST, url).json(&payload).send().await?;
        let response = ensure_success(response, "create ref").await?;
        let git_ref: GitRef = parse_json(response).await?;
        info!(repository = repo, git_ref = %full_ref, "created ref");
        Ok(git_ref.object.sha)
    }

    /// Create a tree object from `(path, content)` entries; no entries gives the empty tree
    pub async fn create_tree(&self, repo: &str, entries: &[(&str, &str)]) -> ProvisionResult<String> {
        let url = self.repo_url(repo, ["git", "trees"])?;
        let payload = CreateTreePayload {
            tree: entries
                .iter()
                .map(|&(path, content)| TreeEntry {
                    path,
                    mode: "100644",
                    kind: "blob",
                    content,
                })
                .collect(),
        };

        let response = self.request_url(Method::POST, url).json(&payload).send().await?;
        let response = ensure_success(response, "create tree").await?;
        let tree: GitObject = parse_json(response).await?;
        Ok(tree.sha)
    }

    /// Create a commit object for `tree_sha` with the given parents
    pub async fn create_commit(
        &self,
        repo: &str,
        message: &str,
        tree_sha: &str,
        parents: &[&str],
    ) -> ProvisionResult<String> {
        let url = self.repo_url(repo, ["git", "commits"])?;
        let payload = CreateCommitPayload {
            message,
            tree: tree_sha,
            parents: parents.to_vec(),
        };

        let response = self.request_url(Method::POST, url).json(&payload).send().await?;
        let response = ensure_success(response, "create commit").await?;
        let commit: GitObject = parse_json(response).await?;
        Ok(commit.sha)
    }

    /// Commit an empty tree on top of `parent_sha`
    pub async fn create_empty_commit(
        &self,
        repo: &str,
        message: &str,
        parent_sha: &str,
    ) -> ProvisionResult<String> {
        let tree_sha = self.create_tree(repo, &[]).await?;
        self.create_commit(repo, message, &tree_sha, &[parent_sha]).await
    }

    /// Move `ref_name` to `new_sha`, forcing the update if it is not a fast-forward
    pub async fn update_ref(&self, repo: &str, ref_name: &str, new_sha: &str) -> ProvisionResult<()> {
        let url = self.git_ref_url(repo, "refs", ref_name)?;
        let payload = UpdateRefPayload {
            sha: new_sha,
            force: true,
        };

        let response = self.request_url(Method::PATCH, url).json(&payload).send().await?;
        ensure_success(response, "update ref").await?;
        Ok(())
    }
}

//! GitHub API data structures

use serde::{Deserialize, Serialize};

/// Handle to a repository on GitHub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepository {
    pub name: String,
    pub full_name: String,
    pub clone_url: String,
    pub ssh_url: String,
    /// Web URL of the repository
    pub html_url: String,
    #[serde(default)]
    pub private: bool,
}

/// The account behind the bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub login: String,
    pub email: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GitObject {
    pub sha: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GitRef {
    pub object: GitObject,
}

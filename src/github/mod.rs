//! GitHub API integration module
//!
//! This module provides the interface to GitHub's REST API used while
//! provisioning a repository. API endpoints are organized into separate
//! sub-modules that extend [`GitHubClient`].
//!
//! ## Architecture
//!
//! - [`client`]: Core client with authentication, request building and error mapping
//! - [`repositories`]: Repository creation, lookup and listing
//! - [`refs`]: Git refs, trees and commits
//! - [`protection`]: Branch protection rules
//! - [`gateway`]: The [`RepositoryGateway`] trait the orchestrator depends on
//! - [`types`]: Data structures returned by the API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use repo_creator::github::GitHubClient;
//! use repo_creator::protection::{BranchClass, rules_for};
//!
//! # async fn example() -> repo_creator::error::ProvisionResult<()> {
//! let client = GitHubClient::new("your_token").with_owner("octocat");
//! if let Some(rules) = rules_for(BranchClass::Main) {
//!     client.put_branch_protection("demo", "main", &rules).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod gateway;
pub mod protection;
pub mod refs;
pub mod repositories;
pub mod types;

// Re-export commonly used items for convenience
pub use client::GitHubClient;
pub use gateway::RepositoryGateway;
pub use refs::branch_ref;
pub use types::{AuthenticatedUser, RemoteRepository};

pub use crate::constants::github::{API_BASE, DEFAULT_USER_AGENT};

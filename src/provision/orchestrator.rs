//! The provisioning workflows
//!
//! Each workflow is a fixed sequence that stops at the first failing step
//! and returns that step's error unchanged. Nothing is rolled back: a
//! repository created before a failed publish stays on the host, and the
//! caller recovers by re-running the later steps against it.

use super::protection::{apply_rules, protect_main_and_safe};
use super::report::ProvisionReport;
use super::spec::RepositorySpec;
use crate::config::Config;
use crate::constants::git::DEFAULT_BRANCH;
use crate::error::{ProvisionError, ProvisionResult};
use crate::git::{Logger, VersionControl};
use crate::github::{RepositoryGateway, branch_ref};
use crate::protection::BranchClass;
use crate::utils::validators;
use crate::workspace::{self, FileSet};
use std::path::Path;
use tracing::info;

/// Drives the host and the local git tool to a desired repository state
pub struct Provisioner<G, V> {
    config: Config,
    gateway: G,
    vcs: V,
}

impl<G, V> Provisioner<G, V>
where
    G: RepositoryGateway,
    V: VersionControl,
{
    pub fn new(config: Config, gateway: G, vcs: V) -> Self {
        Self {
            config,
            gateway,
            vcs,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    /// Write `files` (or a default README and ignore file) to `local_path`,
    /// create the repository, publish the directory and protect its branches
    pub async fn provision_with_files(
        &self,
        spec: &RepositorySpec,
        local_path: &Path,
        files: Option<FileSet>,
    ) -> ProvisionResult<ProvisionReport> {
        check_name(&spec.name)?;

        let files = files.unwrap_or_else(|| FileSet::default_for(&spec.name, &spec.description));
        workspace::materialize(local_path, &files)?;
        Logger.info(
            &spec.name,
            &format!("Created {} local files in {}", files.len(), local_path.display()),
        );

        self.create_publish_protect(spec, local_path).await
    }

    /// Create the repository from an existing directory
    ///
    /// A `template_path` that is missing or not a directory fails before
    /// anything is sent to the host.
    pub async fn provision_from_template(
        &self,
        spec: &RepositorySpec,
        template_path: &Path,
    ) -> ProvisionResult<ProvisionReport> {
        check_name(&spec.name)?;
        require_directory(template_path)?;

        self.create_publish_protect(spec, template_path).await
    }

    /// Put the rules of `class` on `branch` of an existing repository
    pub async fn apply_protection(
        &self,
        repo_name: &str,
        branch: &str,
        class: BranchClass,
    ) -> ProvisionResult<()> {
        self.require_repository(repo_name).await?;
        apply_rules(&self.gateway, repo_name, branch, class).await?;
        Logger.success(repo_name, &format!("{} protection applied to {}", class, branch));
        Ok(())
    }

    /// Create `branch` at the current head of `main` in an existing repository
    pub async fn create_branch(&self, repo_name: &str, branch: &str) -> ProvisionResult<String> {
        check_branch(branch)?;
        self.require_repository(repo_name).await?;

        let main_head = self.gateway.branch_head(repo_name, DEFAULT_BRANCH).await?;
        let sha = self
            .gateway
            .create_ref(repo_name, &branch_ref(branch), &main_head)
            .await?;
        Logger.success(repo_name, &format!("Created branch {}", branch));
        Ok(sha)
    }

    async fn require_repository(&self, repo_name: &str) -> ProvisionResult<()> {
        match self.gateway.get_repository(repo_name).await? {
            Some(_) => Ok(()),
            None => Err(ProvisionError::RepositoryNotFound(repo_name.to_string())),
        }
    }

    async fn create_publish_protect(
        &self,
        spec: &RepositorySpec,
        directory: &Path,
    ) -> ProvisionResult<ProvisionReport> {
        let spec = spec.with_default_description(&self.config.default_description);

        let repository = self.gateway.create_repository(&spec).await?;
        Logger.success(&spec.name, &format!("Created repository {}", repository.html_url));

        let publish = self
            .vcs
            .publish(directory, &repository.clone_url, DEFAULT_BRANCH)?;

        let branch_protection = protect_main_and_safe(&self.gateway, &spec.name).await;
        info!(
            repository = %repository.full_name,
            protected = branch_protection.is_success(),
            "provisioning finished"
        );

        Ok(ProvisionReport {
            repository,
            local_path: directory.to_path_buf(),
            publish,
            branch_protection,
        })
    }
}

/// `TemplateMissing` unless `path` is an existing directory
pub fn require_directory(path: &Path) -> ProvisionResult<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ProvisionError::TemplateMissing(path.to_path_buf()))
    }
}

fn check_name(name: &str) -> ProvisionResult<()> {
    validators::validate_repository_name(name).map_err(|e| ProvisionError::internal(e.to_string()))
}

fn check_branch(name: &str) -> ProvisionResult<()> {
    validators::validate_branch_name(name).map_err(|e| ProvisionError::internal(e.to_string()))
}

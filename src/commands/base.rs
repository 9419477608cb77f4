//! Base types and traits for the command pattern

use crate::config::Config;
use crate::git::GitCli;
use crate::github::GitHubClient;
use crate::provision::{ProvisionReport, Provisioner};
use anyhow::Result;
use colored::*;

/// Context passed to all commands containing shared configuration
#[derive(Clone)]
pub struct CommandContext {
    /// Configuration loaded once at startup
    pub config: Config,
}

impl CommandContext {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Authenticate against GitHub and wire up the provisioning workflows
    pub async fn provisioner(&self) -> Result<Provisioner<GitHubClient, GitCli>> {
        self.config.validate()?;
        let client = GitHubClient::connect(&self.config).await?;
        let git = GitCli::new().with_identity(self.config.commit_identity.clone());
        Ok(Provisioner::new(self.config.clone(), client, git))
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}

/// Print the outcome of a create workflow
pub(crate) fn print_provision_report(
    report: &ProvisionReport,
    path_label: &str,
    safe_branch_pattern: &str,
) {
    println!("{}", "Success!".green().bold());
    println!("Repository: {}", report.repository.html_url);
    println!("Clone URL: {}", report.repository.clone_url);
    println!("SSH URL: {}", report.repository.ssh_url);
    println!("{}: {}", path_label, report.local_path.display());

    let protection = &report.branch_protection;
    match protection.error() {
        None => {
            println!("{}", "Branch Protection Setup:".blue().bold());
            println!("  main branch: protected");
            println!(
                "  safe branch ({}): protected (stricter rules)",
                safe_branch_pattern
            );
        }
        Some(error) => {
            println!("{}", "Branch protection failed:".yellow().bold());
            println!("  {}", error);
        }
    }

    for warning in protection.warnings() {
        println!("  {}", warning.yellow());
    }
}

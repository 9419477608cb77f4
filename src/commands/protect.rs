//! Protect and create-branch command implementations

use super::{Command, CommandContext};
use crate::protection::BranchClass;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Apply the rules of one classification to a branch of an existing repository
pub struct ProtectCommand {
    pub name: String,
    pub branch: String,
    pub class: BranchClass,
}

#[async_trait]
impl Command for ProtectCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let provisioner = context.provisioner().await?;
        provisioner
            .apply_protection(&self.name, &self.branch, self.class)
            .await?;

        println!("{}", "Branch protection applied successfully!".green().bold());
        println!("Repository: {}", self.name);
        println!("Branch: {}", self.branch);
        println!("Type: {}", self.class);
        if self.class == BranchClass::Safe {
            println!(
                "Protection: safe rules for {} (stricter than main)",
                context.config.safe_branch_pattern
            );
        }
        Ok(())
    }
}

/// Create a branch from `main` in an existing repository
pub struct CreateBranchCommand {
    pub name: String,
    pub branch: String,
}

#[async_trait]
impl Command for CreateBranchCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let provisioner = context.provisioner().await?;
        let sha = provisioner.create_branch(&self.name, &self.branch).await?;

        println!("{}", "Branch created successfully!".green().bold());
        println!("Repository: {}", self.name);
        println!("Branch: {}", self.branch);
        println!("Commit: {}", sha);
        Ok(())
    }
}

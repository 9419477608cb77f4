//! Connection test command implementation

use super::{Command, CommandContext};
use crate::constants::github::RECENT_REPOS_LIMIT;
use crate::github::GitHubClient;
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;

/// Check that the token authenticates and list a few repositories
pub struct TestCommand;

#[async_trait]
impl Command for TestCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        println!("Testing GitHub connection...");
        let token = context.config.token()?;
        let client = GitHubClient::new(token).with_api_base(context.config.api_base.clone());

        let user = client
            .current_user()
            .await
            .context("GitHub connection failed")?;
        println!("Connected as: {}", user.login.green().bold());
        println!("Email: {}", user.email.as_deref().unwrap_or("Not public"));
        println!("Company: {}", user.company.as_deref().unwrap_or("Not specified"));
        println!("Public repos: {}", user.public_repos);

        let repos = client
            .list_repositories(RECENT_REPOS_LIMIT)
            .await
            .context("Failed to list repositories")?;
        println!("\nRecent repositories:");
        for repo in repos {
            let marker = if repo.private { "private" } else { "public" };
            println!("  - {} ({})", repo.name, marker);
        }

        println!("\n{}", "GitHub connection test successful!".green());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_requires_token() {
        let context = CommandContext::new(Config::new());
        let err = TestCommand.execute(&context).await.unwrap_err();
        assert!(err.to_string().contains("GITHUB_TOKEN is required"));
    }
}

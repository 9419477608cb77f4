//! From-template command implementation

use super::base::print_provision_report;
use super::{Command, CommandContext};
use crate::provision::orchestrator::require_directory;
use crate::provision::{RepositorySpec, Visibility};
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Create a repository from an existing local directory
pub struct FromTemplateCommand {
    pub name: String,
    pub template_path: PathBuf,
    pub description: String,
    pub private: bool,
}

#[async_trait]
impl Command for FromTemplateCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let spec = RepositorySpec::new(
            self.name.clone(),
            self.description.clone(),
            Visibility::from_private_flag(self.private || context.config.default_private),
        );
        let template_path = std::path::absolute(&self.template_path)?;
        // Connecting resolves the owner over the network, so check first.
        require_directory(&template_path)?;

        let provisioner = context.provisioner().await?;
        let report = provisioner
            .provision_from_template(&spec, &template_path)
            .await?;

        print_provision_report(&report, "Template path", &context.config.safe_branch_pattern);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    fn command(template_path: PathBuf) -> FromTemplateCommand {
        FromTemplateCommand {
            name: "demo".to_string(),
            template_path,
            description: String::new(),
            private: false,
        }
    }

    /// Credentials present but the host unreachable: any request would fail
    /// with a transport error instead of the template message
    fn offline_context() -> CommandContext {
        CommandContext::new(Config {
            github_token: Some("dummy".to_string()),
            api_base: "http://127.0.0.1:9".to_string(),
            ..Config::new()
        })
    }

    #[tokio::test]
    async fn test_missing_template_reported_before_connecting() {
        let temp_dir = TempDir::new().unwrap();

        let err = command(temp_dir.path().join("nonexistent"))
            .execute(&offline_context())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn test_template_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("README.md");
        std::fs::write(&file, "# demo\n").unwrap();

        let err = command(file)
            .execute(&offline_context())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}

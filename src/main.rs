use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use repo_creator::commands::validators;
use repo_creator::{commands::*, config::Config, constants, protection::BranchClass};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "repo-creator")]
#[command(about = "Create GitHub repositories with protected main and safe branches")]
#[command(version)]
struct Cli {
    /// Show diagnostic logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a repository, push generated or supplied files and protect its branches
    Create {
        /// Repository name
        name: String,

        /// Repository description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Make the repository private
        #[arg(short, long)]
        private: bool,

        /// Local directory the files are written to and pushed from
        #[arg(short, long, default_value = ".")]
        local_path: PathBuf,

        /// JSON file mapping relative paths to file content
        #[arg(short, long)]
        files: Option<PathBuf>,

        /// Gitignore template GitHub should add (e.g. Rust, Python)
        #[arg(long)]
        gitignore_template: Option<String>,

        /// License template GitHub should add (e.g. mit, apache-2.0)
        #[arg(long)]
        license_template: Option<String>,
    },

    /// Create a repository from an existing local directory
    FromTemplate {
        /// Repository name
        name: String,

        /// Directory whose contents are pushed
        template_path: PathBuf,

        /// Repository description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Make the repository private
        #[arg(short, long)]
        private: bool,
    },

    /// Apply branch protection to a branch of an existing repository
    Protect {
        /// Repository name
        name: String,

        /// Branch to protect
        #[arg(short, long, default_value_t = constants::git::DEFAULT_BRANCH.to_string())]
        branch: String,

        /// Protection rules to apply
        #[arg(short = 't', long = "type", value_enum, default_value_t = BranchType::Main)]
        branch_type: BranchType,
    },

    /// Create a branch from main in an existing repository
    CreateBranch {
        /// Repository name
        name: String,

        /// Branch to create
        branch: String,
    },

    /// Apply the safe branch rules to the safe branch of an existing repository
    ProtectSafe {
        /// Repository name
        name: String,
    },

    /// Test the GitHub connection
    Test,

    /// Create a .env file from env.example and check the configuration
    Setup,
}

#[derive(Clone, Copy, ValueEnum)]
enum BranchType {
    Main,
    Safe,
}

impl From<BranchType> for BranchClass {
    fn from(value: BranchType) -> Self {
        match value {
            BranchType::Main => BranchClass::Main,
            BranchType::Safe => BranchClass::Safe,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = execute_command(cli.command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn execute_command(command: Commands) -> Result<()> {
    let context = CommandContext::new(Config::from_env());

    match command {
        Commands::Create {
            name,
            description,
            private,
            local_path,
            files,
            gitignore_template,
            license_template,
        } => {
            validators::validate_repository_name(&name)?;
            validators::validate_files_arg(&files)?;

            CreateCommand {
                name,
                description,
                private,
                local_path,
                files,
                gitignore_template,
                license_template,
            }
            .execute(&context)
            .await?;
        }
        Commands::FromTemplate {
            name,
            template_path,
            description,
            private,
        } => {
            validators::validate_repository_name(&name)?;

            FromTemplateCommand {
                name,
                template_path,
                description,
                private,
            }
            .execute(&context)
            .await?;
        }
        Commands::Protect {
            name,
            branch,
            branch_type,
        } => {
            validators::validate_repository_name(&name)?;
            validators::validate_branch_name(&branch)?;

            ProtectCommand {
                name,
                branch,
                class: branch_type.into(),
            }
            .execute(&context)
            .await?;
        }
        Commands::CreateBranch { name, branch } => {
            validators::validate_repository_name(&name)?;
            validators::validate_branch_name(&branch)?;

            CreateBranchCommand { name, branch }.execute(&context).await?;
        }
        Commands::ProtectSafe { name } => {
            validators::validate_repository_name(&name)?;

            ProtectCommand {
                name,
                branch: constants::protection::SAFE_BRANCH.to_string(),
                class: BranchClass::Safe,
            }
            .execute(&context)
            .await?;
        }
        Commands::Test => TestCommand.execute(&context).await?,
        Commands::Setup => SetupCommand::default().execute(&context).await?,
    }

    Ok(())
}

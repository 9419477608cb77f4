//! Central constants for the repo-creator application

/// Default values for Git operations
pub mod git {
    /// Branch that receives the published content
    pub const DEFAULT_BRANCH: &str = "main";

    /// Name of the remote the working copy is pushed to
    pub const REMOTE_NAME: &str = "origin";

    /// Message used for the commit created when publishing a working copy
    pub const INITIAL_COMMIT_MSG: &str = "Initial commit";
}

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// REST API version pinned on every request
    pub const API_VERSION: &str = "2022-11-28";

    /// Media type requested on every request
    pub const ACCEPT: &str = "application/vnd.github+json";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("repo-creator/", env!("CARGO_PKG_VERSION"));

    /// Number of repositories listed by the connection test
    pub const RECENT_REPOS_LIMIT: usize = 5;
}

/// Branch names and commit messages of the protection workflow
pub mod protection {
    /// Protected landing branch created next to `main`
    pub const SAFE_BRANCH: &str = "safe";

    /// Message of the commit that empties the safe branch
    pub const EMPTY_SAFE_COMMIT_MSG: &str = "Empty safe branch - all files removed";
}

/// Default values for configuration
pub mod config {
    /// Dotenv file read at startup
    pub const ENV_FILE: &str = ".env";

    /// Template copied to `.env` by the setup command
    pub const ENV_TEMPLATE_FILE: &str = "env.example";

    /// Description sent to GitHub when none is given
    pub const DEFAULT_DESCRIPTION: &str = "Created with GitHub Repo Creator";

    /// Label used when displaying safe-like branches
    pub const DEFAULT_SAFE_BRANCH_PATTERN: &str = "*safe*";
}

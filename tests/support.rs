//! Common test support utilities and fixtures
//!
//! [`FakeGateway`] keeps repositories, refs and protection rules in memory.
//! Every repository it creates is backed by a bare git repository on disk,
//! so the real git driver can publish to the `clone_url` it hands out.

#![allow(dead_code)]

use async_trait::async_trait;
use repo_creator::config::{CommitIdentity, Config};
use repo_creator::error::{ProvisionError, ProvisionResult};
use repo_creator::git::GitCli;
use repo_creator::github::{RemoteRepository, RepositoryGateway};
use repo_creator::protection::ProtectionRuleSet;
use repo_creator::provision::{Provisioner, RepositorySpec};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;
use tempfile::TempDir;

#[derive(Default)]
struct FakeState {
    repositories: BTreeMap<String, RemoteRepository>,
    /// (repo, full ref name) -> sha
    refs: HashMap<(String, String), String>,
    /// (repo, branch) -> rules
    protections: HashMap<(String, String), ProtectionRuleSet>,
    calls: Vec<String>,
    empty_commits: usize,
}

/// In-memory stand-in for the hosting API
pub struct FakeGateway {
    remote_root: PathBuf,
    failing: HashSet<&'static str>,
    state: Mutex<FakeState>,
}

impl FakeGateway {
    /// A gateway whose bare repositories live under `remote_root`
    pub fn new(remote_root: &Path) -> Self {
        Self {
            remote_root: remote_root.to_path_buf(),
            failing: HashSet::new(),
            state: Mutex::new(FakeState::default()),
        }
    }

    /// Make every call to `operation` fail with a 403 rejection
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    /// Register an existing repository without going through `create_repository`
    pub fn with_repository(self, name: &str) -> Self {
        let repository = self.remote_for(name);
        init_bare_repo(Path::new(&repository.clone_url)).expect("Failed to init bare repo");
        self.state
            .lock()
            .unwrap()
            .repositories
            .insert(name.to_string(), repository);
        self
    }

    /// Register a ref on an existing repository
    pub fn with_ref(self, repo: &str, ref_name: &str, sha: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .refs
            .insert((repo.to_string(), ref_name.to_string()), sha.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls().iter().filter(|call| *call == operation).count()
    }

    pub fn protection(&self, repo: &str, branch: &str) -> Option<ProtectionRuleSet> {
        self.state
            .lock()
            .unwrap()
            .protections
            .get(&(repo.to_string(), branch.to_string()))
            .cloned()
    }

    pub fn ref_sha(&self, repo: &str, ref_name: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .refs
            .get(&(repo.to_string(), ref_name.to_string()))
            .cloned()
    }

    pub fn bare_path(&self, name: &str) -> PathBuf {
        self.remote_root.join(format!("{}.git", name))
    }

    fn remote_for(&self, name: &str) -> RemoteRepository {
        let clone_url = self.bare_path(name).to_string_lossy().to_string();
        RemoteRepository {
            name: name.to_string(),
            full_name: format!("tester/{}", name),
            clone_url,
            ssh_url: format!("git@example.com:tester/{}.git", name),
            html_url: format!("https://example.com/tester/{}", name),
            private: false,
        }
    }

    fn branch_exists(&self, repo: &str, branch: &str) -> bool {
        let ref_name = format!("refs/heads/{}", branch);
        self.ref_sha(repo, &ref_name).is_some() || self.pushed_sha(repo, &ref_name).is_some()
    }

    fn pushed_sha(&self, repo: &str, ref_name: &str) -> Option<String> {
        let output = Command::new("git")
            .args(["rev-parse", "--verify", "--quiet", ref_name])
            .current_dir(self.bare_path(repo))
            .output()
            .ok()?;
        output
            .status
            .success()
            .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn record(&self, operation: &'static str) -> ProvisionResult<()> {
        self.state
            .lock()
            .unwrap()
            .calls
            .push(operation.to_string());
        if self.failing.contains(operation) {
            return Err(ProvisionError::rejected(
                403,
                format!("{} is not allowed", operation),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl RepositoryGateway for FakeGateway {
    async fn create_repository(&self, spec: &RepositorySpec) -> ProvisionResult<RemoteRepository> {
        self.record("create_repository")?;
        if self
            .state
            .lock()
            .unwrap()
            .repositories
            .contains_key(&spec.name)
        {
            return Err(ProvisionError::rejected(
                422,
                "Repository creation failed.: name already exists on this account",
            ));
        }

        let mut repository = self.remote_for(&spec.name);
        repository.private = spec.visibility.is_private();
        init_bare_repo(Path::new(&repository.clone_url))?;
        self.state
            .lock()
            .unwrap()
            .repositories
            .insert(spec.name.clone(), repository.clone());
        Ok(repository)
    }

    async fn get_repository(&self, name: &str) -> ProvisionResult<Option<RemoteRepository>> {
        self.record("get_repository")?;
        Ok(self.state.lock().unwrap().repositories.get(name).cloned())
    }

    async fn branch_head(&self, repo: &str, branch: &str) -> ProvisionResult<String> {
        self.record("branch_head")?;
        let ref_name = format!("refs/heads/{}", branch);
        if let Some(sha) = self.ref_sha(repo, &ref_name) {
            return Ok(sha);
        }

        self.pushed_sha(repo, &ref_name)
            .ok_or_else(|| ProvisionError::rejected(404, "Branch not found"))
    }

    async fn put_branch_protection(
        &self,
        repo: &str,
        branch: &str,
        rules: &ProtectionRuleSet,
    ) -> ProvisionResult<()> {
        self.record("put_branch_protection")?;
        if !self.branch_exists(repo, branch) {
            return Err(ProvisionError::rejected(404, "Branch not found"));
        }
        self.state
            .lock()
            .unwrap()
            .protections
            .insert((repo.to_string(), branch.to_string()), rules.clone());
        Ok(())
    }

    async fn create_ref(&self, repo: &str, ref_name: &str, from_sha: &str) -> ProvisionResult<String> {
        self.record("create_ref")?;
        let key = (repo.to_string(), ref_name.to_string());
        let mut state = self.state.lock().unwrap();
        if state.refs.contains_key(&key) {
            return Err(ProvisionError::rejected(422, "Reference already exists"));
        }
        state.refs.insert(key, from_sha.to_string());
        Ok(from_sha.to_string())
    }

    async fn create_empty_commit(
        &self,
        _repo: &str,
        _message: &str,
        parent_sha: &str,
    ) -> ProvisionResult<String> {
        self.record("create_empty_commit")?;
        let mut state = self.state.lock().unwrap();
        state.empty_commits += 1;
        Ok(format!("empty-{}-of-{}", state.empty_commits, parent_sha))
    }

    async fn update_ref(&self, repo: &str, ref_name: &str, new_sha: &str) -> ProvisionResult<()> {
        self.record("update_ref")?;
        self.state
            .lock()
            .unwrap()
            .refs
            .insert((repo.to_string(), ref_name.to_string()), new_sha.to_string());
        Ok(())
    }
}

/// Identity used for every commit made in tests
pub fn test_identity() -> CommitIdentity {
    CommitIdentity {
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
    }
}

pub fn test_git() -> GitCli {
    GitCli::new().with_identity(Some(test_identity()))
}

/// A provisioner wired to a fake gateway and the real git driver
pub fn provisioner(gateway: FakeGateway) -> Provisioner<FakeGateway, GitCli> {
    Provisioner::new(Config::new(), gateway, test_git())
}

/// Create a bare repository, the push target of a publish
pub fn init_bare_repo(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)?;
    Command::new("git")
        .args(["init", "--bare", "--quiet"])
        .current_dir(path)
        .output()?;
    Ok(())
}

/// Run git in `dir` and return trimmed stdout
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Number of commits reachable from `rev` in the repository at `dir`
pub fn commit_count(dir: &Path, rev: &str) -> usize {
    git(dir, &["rev-list", "--count", rev])
        .parse()
        .expect("rev-list prints a count")
}

/// Temporary directories for one scenario: a work area and a remote root
pub struct Workspace {
    pub root: TempDir,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn local(&self, name: &str) -> PathBuf {
        self.root.path().join("local").join(name)
    }

    pub fn remotes(&self) -> PathBuf {
        self.root.path().join("remotes")
    }

    pub fn gateway(&self) -> FakeGateway {
        FakeGateway::new(&self.remotes())
    }
}

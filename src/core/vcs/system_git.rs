//! System git backend - zero dependencies
//!
//! Uses git plumbing commands for all operations, each running in an
//! isolated environment so user configuration cannot change behavior.

use super::Vcs;
use crate::core::error::{ForgeError, ForgeResult, GitError, ResultExt};
use crate::utils::repo_relative;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using system git (zero crate dependencies)
pub struct SystemGit {
  /// Repository working directory
  repo_path: PathBuf,
}

impl SystemGit {
  /// Open a git repository
  ///
  /// A directory that is not a repository is a fatal configuration error
  /// for a release: there is no partial/best-effort packaging.
  pub fn open(path: &Path) -> ForgeResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--show-toplevel"])
      .output()
      .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      if stderr.contains("not a git repository") {
        return Err(ForgeError::Git(GitError::RepoNotFound {
          path: path.to_path_buf(),
        }));
      }
      return Err(ForgeError::message(format!("Failed to open git repository: {}", stderr)));
    }

    Ok(Self {
      repo_path: path.to_path_buf(),
    })
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  /// - Adds safe configuration overrides
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust global config)
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("advice.detachedHead=false");
    cmd.arg("-c").arg("core.quotePath=false"); // Don't escape non-ASCII

    cmd
  }

  fn run(&self, args: &[&str]) -> ForgeResult<Vec<u8>> {
    let output = self
      .git_cmd()
      .args(args)
      .output()
      .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ForgeError::Git(GitError::CommandFailed {
        command: format!("git {}", args.join(" ")),
        stderr: stderr.to_string(),
      }));
    }

    Ok(output.stdout)
  }
}

impl Vcs for SystemGit {
  fn current_branch(&self) -> ForgeResult<String> {
    let output = self
      .git_cmd()
      .args(["rev-parse", "--abbrev-ref", "HEAD"])
      .output()
      .context("Failed to get current branch")?;

    if !output.status.success() {
      return Ok("HEAD".to_string()); // Detached HEAD
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  fn is_clean(&self) -> ForgeResult<bool> {
    // Porcelain output is empty exactly when nothing differs from HEAD,
    // untracked files included
    let stdout = self.run(&["status", "--porcelain"])?;
    Ok(stdout.iter().all(|b| b.is_ascii_whitespace()))
  }

  fn tracked_files(&self) -> ForgeResult<HashSet<PathBuf>> {
    let stdout = self.run(&["ls-tree", "--full-tree", "-r", "--name-only", "HEAD"])?;

    let files = String::from_utf8_lossy(&stdout)
      .lines()
      .map(str::trim)
      .filter(|l| !l.is_empty())
      .map(repo_relative)
      .collect();

    Ok(files)
  }

  fn stage(&self, path: &Path) -> ForgeResult<()> {
    let spec = path.to_string_lossy();
    self.run(&["add", spec.as_ref()])?;
    Ok(())
  }

  fn commit(&self, message: &str) -> ForgeResult<()> {
    self.run(&["commit", "-m", message])?;
    Ok(())
  }

  fn push(&self, remote: &str, branch: &str) -> ForgeResult<()> {
    let output = self
      .git_cmd()
      .args(["push", remote, branch])
      .output()
      .context("Failed to push")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ForgeError::Git(GitError::PushFailed {
        remote: remote.to_string(),
        branch: branch.to_string(),
        reason: stderr.to_string(),
      }));
    }

    Ok(())
  }
}

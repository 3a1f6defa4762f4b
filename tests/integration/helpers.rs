//! Test helpers for integration tests

#![allow(dead_code)]

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A tool root with forge.toml, a plugin workspace, and a host repository
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
  pub workspace: PathBuf,
  pub host: PathBuf,
  pub releases: PathBuf,
}

impl TestWorkspace {
  /// Create a new test workspace with basic structure
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    let workspace = path.join("workspace");
    let host = path.join("host");
    let releases = path.join("releases");
    std::fs::create_dir_all(&workspace)?;
    std::fs::create_dir_all(&host)?;

    std::fs::write(
      path.join("forge.toml"),
      r#"[workspace]
root = "workspace"
author = "Test Author"

[release]
dir = "releases"
branch = "main"

[host]
root = "host"
"#,
    )?;

    Ok(Self {
      _root: root,
      path,
      workspace,
      host,
      releases,
    })
  }

  /// Create a plugin repository with the standard layout, one commit on
  /// `main`, and a bare origin so pushes have somewhere to land
  pub fn add_plugin(&self, name: &str, version: &str) -> Result<PathBuf> {
    let plugin = self.workspace.join(name);
    let plugin_dir = plugin.join("addons/plugins/custom").join(name);
    std::fs::create_dir_all(&plugin_dir)?;

    std::fs::write(
      plugin_dir.join("info.ini"),
      format!("name = {}\nversion = {}\n", name, version),
    )?;
    std::fs::write(plugin_dir.join(format!("{}.py", name)), "pass\n")?;

    git(&plugin, &["init", "--initial-branch=main"])?;
    git(&plugin, &["config", "user.name", "Test User"])?;
    git(&plugin, &["config", "user.email", "test@example.com"])?;
    git(&plugin, &["add", "."])?;
    git(&plugin, &["commit", "-m", "Initial plugin"])?;

    let remote = self.bare_remote(name);
    std::fs::create_dir_all(&remote)?;
    git(&remote, &["init", "--bare", "--initial-branch=main"])?;
    let remote_spec = remote.to_string_lossy().into_owned();
    git(&plugin, &["remote", "add", "origin", &remote_spec])?;
    git(&plugin, &["push", "-u", "origin", "main"])?;

    Ok(plugin)
  }

  /// Path of a plugin's bare origin repository
  pub fn bare_remote(&self, name: &str) -> PathBuf {
    self.path.join("remotes").join(format!("{}.git", name))
  }

  /// Write a file inside a plugin repository
  pub fn write_plugin_file(&self, name: &str, rel: &str, content: &str) -> Result<()> {
    let path = self.workspace.join(name).join(rel);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
  }

  /// Commit everything outstanding in a plugin repository
  pub fn commit_plugin(&self, name: &str, message: &str) -> Result<()> {
    let plugin = self.workspace.join(name);
    git(&plugin, &["add", "."])?;
    git(&plugin, &["commit", "-m", message])?;
    Ok(())
  }

  /// Read a file inside a plugin repository
  pub fn read_plugin_file(&self, name: &str, rel: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.workspace.join(name).join(rel))?)
  }

  /// Subject lines of a plugin repository's log, newest first
  pub fn plugin_log(&self, name: &str) -> Result<Vec<String>> {
    let output = git(&self.workspace.join(name), &["log", "--format=%s"])?;
    Ok(
      String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect(),
    )
  }

  /// Entry names of a release archive
  pub fn archive_entries(&self, name: &str, version: &str) -> Result<Vec<String>> {
    let path = self
      .releases
      .join(name)
      .join(format!("{} - v{}.zip", name, version));
    let file = std::fs::File::open(&path).with_context(|| format!("Missing archive {}", path.display()))?;
    let mut archive = zip::ZipArchive::new(file)?;
    Ok((0..archive.len()).map(|i| archive.by_index(i).unwrap().name().to_string()).collect())
  }
}

/// Run git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

/// Run plugforge, failing the test if the command fails
pub fn run_plugforge(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = try_plugforge(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "plugforge command failed: plugforge {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run plugforge and hand back the raw output, success or not
pub fn try_plugforge(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_plugforge");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run plugforge")
}

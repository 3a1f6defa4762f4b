//! Version-control abstraction for the release pipeline
//!
//! The release core depends on exactly six operations; everything else git
//! can do is irrelevant here. Keeping the seam this narrow lets the version
//! manager and the tracked-file oracle run against an in-memory fake.

pub mod system_git;

pub use system_git::SystemGit;

use crate::core::error::ForgeResult;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// The version-control operations the release pipeline depends on
pub trait Vcs {
  /// Name of the currently checked-out branch
  fn current_branch(&self) -> ForgeResult<String>;

  /// True when the working tree has no changes against HEAD,
  /// untracked files included
  fn is_clean(&self) -> ForgeResult<bool>;

  /// All file paths tracked in the tree at HEAD, each normalized to the
  /// platform separator with a leading separator (the comparison shape
  /// used by the file selector)
  fn tracked_files(&self) -> ForgeResult<HashSet<PathBuf>>;

  /// Stage one file, given repo-relative (no leading separator)
  fn stage(&self, path: &Path) -> ForgeResult<()>;

  /// Commit staged changes with the given message
  fn commit(&self, message: &str) -> ForgeResult<()>;

  /// Push the current branch to the remote tracking branch
  fn push(&self, remote: &str, branch: &str) -> ForgeResult<()>;
}

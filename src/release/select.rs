//! File selection: walk the rule directories, keep what the rules allow
//! and version control tracks
//!
//! The selector is the gate that guarantees `selected ⊆ tracked`: a file
//! that matches every rule but is untracked at HEAD never ships.

use crate::core::error::ForgeResult;
use crate::release::rules::RuleTable;
use crate::utils::plugin_relative;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One shippable file: where it lives and where it sits in the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
  /// Absolute path on disk
  pub path: PathBuf,
  /// Path relative to the plugin root, leading separator included
  pub relative: PathBuf,
}

/// Select every file under `plugin_root` that a rule table allows and the
/// tracked set contains
///
/// Rule directories absent on disk are silently skipped: a plugin need not
/// have every optional subsystem. A directory that exists but matches
/// nothing contributes nothing.
pub fn select_files(
  plugin_root: &Path,
  tables: &[&RuleTable],
  tracked: &HashSet<PathBuf>,
) -> ForgeResult<Vec<CandidateFile>> {
  let mut candidates = Vec::new();

  for table in tables {
    for rule in table.rules() {
      let dir = plugin_root.join(&rule.dir);
      if !dir.is_dir() {
        continue;
      }

      for entry in WalkDir::new(&dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
          continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        let extension = entry.path().extension().map(|e| e.to_string_lossy().into_owned());
        if !rule.matches(&file_name, extension.as_deref()) {
          continue;
        }

        let relative = plugin_relative(plugin_root, entry.path())?;
        if !tracked.contains(&relative) {
          continue;
        }

        candidates.push(CandidateFile {
          path: entry.path().to_path_buf(),
          relative,
        });
      }
    }
  }

  Ok(candidates)
}

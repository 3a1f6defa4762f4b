//! Utility functions for cross-platform path handling
//!
//! The release pipeline compares file paths in one canonical shape: relative
//! to the plugin root, using the platform separator, with a leading
//! separator. Git output and zip entry names each need a conversion.

use crate::core::error::ForgeResult;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

/// Convert a repo-relative path from git output (always forward slashes)
/// into the canonical comparison shape: platform separator, leading separator.
pub fn repo_relative(path: &str) -> PathBuf {
  let mut out = String::with_capacity(path.len() + 1);
  out.push(MAIN_SEPARATOR);

  #[cfg(target_os = "windows")]
  {
    out.push_str(&path.replace('/', "\\"));
  }
  #[cfg(not(target_os = "windows"))]
  {
    out.push_str(path);
  }

  PathBuf::from(out)
}

/// Express `path` relative to `root` in the canonical comparison shape.
pub fn plugin_relative(root: &Path, path: &Path) -> ForgeResult<PathBuf> {
  let rel = path.strip_prefix(root)?;
  let sep = MAIN_SEPARATOR.to_string();
  let parts: Vec<String> = rel
    .components()
    .filter_map(|c| match c {
      Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
      _ => None,
    })
    .collect();

  Ok(PathBuf::from(format!("{}{}", sep, parts.join(&sep))))
}

/// Convert a canonical relative path into a zip entry name
/// (no leading separator, always forward slashes).
pub fn zip_entry_name(relative: &Path) -> String {
  relative
    .components()
    .filter_map(|c| match c {
      Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
      _ => None,
    })
    .collect::<Vec<_>>()
    .join("/")
}

//! Zip archive writing for a plugin release
//!
//! The archive root mirrors the plugin root: every candidate is stored at
//! its plugin-relative path, and every ancestor directory gets an explicit
//! entry so the archive is browsable as a tree. The candidate list carries
//! no ordering guarantee, so directory entries are deduplicated through a
//! seen-set rather than relying on traversal order.

use crate::core::error::{ForgeError, ForgeResult, ValidationError};
use crate::release::select::CandidateFile;
use crate::utils::zip_entry_name;
use semver::Version;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use zip::CompressionMethod;
use zip::write::FileOptions;

/// Archive location for a (plugin, version) pair
///
/// Pure in its inputs: the same pair always names the same path.
pub fn archive_path(release_dir: &Path, plugin: &str, version: &Version) -> PathBuf {
  release_dir.join(plugin).join(format!("{} - v{}.zip", plugin, version))
}

/// Write the release archive, refusing to overwrite an existing release
/// for the same version
pub fn build_archive(
  plugin: &str,
  version: &Version,
  candidates: &[CandidateFile],
  release_dir: &Path,
) -> ForgeResult<PathBuf> {
  let target = archive_path(release_dir, plugin, version);

  if target.exists() {
    return Err(ForgeError::Validation(ValidationError::ReleaseExists { path: target }));
  }

  if let Some(parent) = target.parent() {
    fs::create_dir_all(parent)?;
  }

  let file = fs::File::create(&target)?;
  let mut zip = zip::ZipWriter::new(file);
  let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

  let mut seen_dirs: HashSet<String> = HashSet::new();

  for candidate in candidates {
    add_parent_dirs(&mut zip, &mut seen_dirs, &candidate.relative, options)?;

    zip.start_file(zip_entry_name(&candidate.relative), options)?;
    let data = fs::read(&candidate.path)?;
    zip.write_all(&data)?;
  }

  zip.finish()?;
  Ok(target)
}

/// Ensure every ancestor directory of `relative` has an archive entry,
/// written at most once each
fn add_parent_dirs(
  zip: &mut zip::ZipWriter<fs::File>,
  seen: &mut HashSet<String>,
  relative: &Path,
  options: FileOptions,
) -> ForgeResult<()> {
  let Some(parent) = relative.parent() else {
    return Ok(());
  };

  let mut prefix = String::new();
  for component in parent.components() {
    let Component::Normal(part) = component else {
      continue;
    };
    prefix.push_str(&part.to_string_lossy());
    prefix.push('/');

    if seen.insert(prefix.clone()) {
      zip.add_directory(prefix.trim_end_matches('/'), options)?;
    }
  }

  Ok(())
}

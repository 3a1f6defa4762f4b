//! Symlink a plugin's subtrees into the host repository
//!
//! Link points are derived from the configured layout: the plugin source
//! directory, the data directory and data file, the per-category
//! translation files, and each sound file. Sources that do not exist are
//! skipped, as are destinations that already exist.

use crate::core::config::ForgeConfig;
use crate::core::error::ForgeResult;
use crate::core::workspace::Workspace;
use std::fs;
use std::path::Path;

/// Translation categories that get a per-plugin file
const TRANSLATION_CATEGORIES: &[&str] = &["messages", "commands", "config", "rules"];

/// Counts of what one link run did
#[derive(Debug, Default)]
pub struct LinkReport {
  pub linked: usize,
  pub skipped: usize,
}

/// Link one plugin into the host repository
pub fn link_plugin(
  config: &ForgeConfig,
  workspace: &Workspace,
  host_root: &Path,
  name: &str,
) -> ForgeResult<LinkReport> {
  workspace.validate_id(name)?;
  let plugin_root = workspace.plugin_root(name);
  let layout = &config.layout;
  let mut report = LinkReport::default();

  link_entry(&plugin_root, host_root, &layout.plugins_dir.join(name), &mut report)?;
  link_entry(&plugin_root, host_root, &layout.data_dir.join(name), &mut report)?;
  link_entry(
    &plugin_root,
    host_root,
    &layout.data_dir.join(format!("{}.ini", name)),
    &mut report,
  )?;

  for category in TRANSLATION_CATEGORIES {
    link_entry(
      &plugin_root,
      host_root,
      &layout.translations_dir.join(category).join(format!("{}.ini", name)),
      &mut report,
    )?;
  }

  let sound_dir = plugin_root.join(&layout.sound_dir);
  if sound_dir.is_dir() {
    for entry in fs::read_dir(&sound_dir)? {
      let entry = entry?;
      if !entry.file_type()?.is_file() {
        continue;
      }
      link_entry(
        &plugin_root,
        host_root,
        &layout.sound_dir.join(entry.file_name()),
        &mut report,
      )?;
    }
  }

  Ok(report)
}

/// Link one relative path from the plugin into the host repository
///
/// Missing source or existing destination is a skip, not an error.
fn link_entry(plugin_root: &Path, host_root: &Path, relative: &Path, report: &mut LinkReport) -> ForgeResult<()> {
  let src = plugin_root.join(relative);
  if !src.exists() {
    report.skipped += 1;
    return Ok(());
  }

  let dest = host_root.join(relative);
  if fs::symlink_metadata(&dest).is_ok() {
    report.skipped += 1;
    return Ok(());
  }

  if let Some(parent) = dest.parent() {
    fs::create_dir_all(parent)?;
  }
  symlink(&src, &dest)?;
  report.linked += 1;
  Ok(())
}

#[cfg(unix)]
fn symlink(src: &Path, dest: &Path) -> std::io::Result<()> {
  std::os::unix::fs::symlink(src, dest)
}

#[cfg(windows)]
fn symlink(src: &Path, dest: &Path) -> std::io::Result<()> {
  if src.is_dir() {
    std::os::windows::fs::symlink_dir(src, dest)
  } else {
    std::os::windows::fs::symlink_file(src, dest)
  }
}

//! Integration tests for `plugforge release`

use crate::helpers::{TestWorkspace, run_plugforge, try_plugforge};
use anyhow::Result;

#[test]
fn test_release_with_patch_bump() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_plugin("gg_example", "1.0.0")?;

  run_plugforge(&ws.path, &["release", "gg_example", "--bump", "patch"])?;

  // Metadata was bumped and committed
  let info = ws.read_plugin_file("gg_example", "addons/plugins/custom/gg_example/info.ini")?;
  assert!(info.contains("version = 1.0.1"), "got: {}", info);

  let log = ws.plugin_log("gg_example")?;
  assert_eq!(log[0], "PATCH version update (1.0.1)");

  // The bump commit reached the bare origin
  let remote_log = crate::helpers::git(&ws.bare_remote("gg_example"), &["log", "-1", "--format=%s", "main"])?;
  assert!(String::from_utf8_lossy(&remote_log.stdout).contains("PATCH version update (1.0.1)"));

  // Archive named after the new version, tree entries included
  let entries = ws.archive_entries("gg_example", "1.0.1")?;
  assert!(entries.contains(&"addons/plugins/custom/gg_example/info.ini".to_string()));
  assert!(entries.contains(&"addons/plugins/custom/gg_example/gg_example.py".to_string()));
  assert_eq!(entries.iter().filter(|n| *n == "addons/").count(), 1);
  assert_eq!(entries.iter().filter(|n| *n == "addons/plugins/").count(), 1);

  Ok(())
}

#[test]
fn test_release_none_bump_keeps_version() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_plugin("gg_example", "2.3.4")?;

  run_plugforge(&ws.path, &["release", "gg_example", "--bump", "none"])?;

  let info = ws.read_plugin_file("gg_example", "addons/plugins/custom/gg_example/info.ini")?;
  assert!(info.contains("version = 2.3.4"));

  // No bump commit
  let log = ws.plugin_log("gg_example")?;
  assert_eq!(log, vec!["Initial plugin"]);

  assert!(!ws.archive_entries("gg_example", "2.3.4")?.is_empty());
  Ok(())
}

#[test]
fn test_ignored_files_never_ship() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_plugin("gg_example", "1.0.0")?;

  // An ignored file keeps the tree clean but is untracked at HEAD
  ws.write_plugin_file("gg_example", ".gitignore", "scratch.py\n")?;
  ws.commit_plugin("gg_example", "Ignore scratch files")?;
  ws.write_plugin_file("gg_example", "addons/plugins/custom/gg_example/scratch.py", "draft\n")?;

  run_plugforge(&ws.path, &["release", "gg_example", "--bump", "none"])?;

  let entries = ws.archive_entries("gg_example", "1.0.0")?;
  assert!(entries.contains(&"addons/plugins/custom/gg_example/gg_example.py".to_string()));
  assert!(!entries.iter().any(|n| n.contains("scratch.py")));
  Ok(())
}

#[test]
fn test_server_translations_excluded() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_plugin("gg_example", "1.0.0")?;

  ws.write_plugin_file("gg_example", "resource/translations/custom/foo_client.ini", "[x]\n")?;
  ws.write_plugin_file("gg_example", "resource/translations/custom/foo_server.ini", "[x]\n")?;
  ws.commit_plugin("gg_example", "Add translations")?;

  run_plugforge(&ws.path, &["release", "gg_example", "--bump", "none"])?;

  let entries = ws.archive_entries("gg_example", "1.0.0")?;
  assert!(entries.contains(&"resource/translations/custom/foo_client.ini".to_string()));
  assert!(!entries.iter().any(|n| n.contains("foo_server.ini")));
  Ok(())
}

#[test]
fn test_double_release_is_blocked() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_plugin("gg_example", "1.0.0")?;

  run_plugforge(&ws.path, &["release", "gg_example", "--bump", "none"])?;

  let output = try_plugforge(&ws.path, &["release", "gg_example", "--bump", "none"])?;
  assert_eq!(output.status.code(), Some(3));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("already exists"), "got: {}", stderr);
  Ok(())
}

#[test]
fn test_dirty_tree_blocks_release() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_plugin("gg_example", "1.0.0")?;

  ws.write_plugin_file("gg_example", "notes.txt", "work in progress\n")?;

  let output = try_plugforge(&ws.path, &["release", "gg_example", "--bump", "patch"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(String::from_utf8_lossy(&output.stderr).contains("uncommitted"));

  // Metadata untouched, no bump commit, no archive
  let info = ws.read_plugin_file("gg_example", "addons/plugins/custom/gg_example/info.ini")?;
  assert!(info.contains("version = 1.0.0"));
  assert_eq!(ws.plugin_log("gg_example")?, vec!["Initial plugin"]);
  assert!(!ws.releases.join("gg_example").exists());
  Ok(())
}

#[test]
fn test_wrong_branch_blocks_release() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let plugin = ws.add_plugin("gg_example", "1.0.0")?;

  crate::helpers::git(&plugin, &["checkout", "-b", "feature"])?;

  let output = try_plugforge(&ws.path, &["release", "gg_example", "--bump", "patch"])?;
  assert_eq!(output.status.code(), Some(3));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("feature"), "got: {}", stderr);
  Ok(())
}

#[test]
fn test_unknown_plugin_is_user_error() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_plugin("gg_example", "1.0.0")?;

  let output = try_plugforge(&ws.path, &["release", "gg_missing", "--bump", "none"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("gg_missing"));
  Ok(())
}

#[test]
fn test_plugin_without_repository_fails() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_plugin_file("gg_plain", "addons/plugins/custom/gg_plain/info.ini", "version = 1.0.0\n")?;

  let output = try_plugforge(&ws.path, &["release", "gg_plain", "--bump", "none"])?;
  assert_eq!(output.status.code(), Some(2));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("repository"), "got: {}", stderr);
  Ok(())
}

#[test]
fn test_malformed_version_is_user_error() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_plugin("gg_example", "1.0")?;

  let output = try_plugforge(&ws.path, &["release", "gg_example", "--bump", "patch"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid 'version'"));
  Ok(())
}

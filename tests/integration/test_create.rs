//! Integration tests for `plugforge create` and `plugforge list`

use crate::helpers::{TestWorkspace, run_plugforge, try_plugforge};
use anyhow::Result;

#[test]
fn test_create_minimal_plugin() -> Result<()> {
  let ws = TestWorkspace::new()?;

  run_plugforge(&ws.path, &["create", "gg_fresh"])?;

  let plugin_dir = ws.workspace.join("gg_fresh/addons/plugins/custom/gg_fresh");
  assert!(plugin_dir.join("info.ini").is_file());
  assert!(plugin_dir.join("gg_fresh.py").is_file());
  assert!(ws.workspace.join("gg_fresh/README.md").is_file());

  let info = ws.read_plugin_file("gg_fresh", "addons/plugins/custom/gg_fresh/info.ini")?;
  assert!(info.contains("version = 1.0.0"));
  assert!(info.contains("author = Test Author"));
  assert!(info.contains("title = Gg Fresh"));
  Ok(())
}

#[test]
fn test_create_with_components() -> Result<()> {
  let ws = TestWorkspace::new()?;

  run_plugforge(
    &ws.path,
    &[
      "create",
      "gg_full",
      "--commands",
      "--rules",
      "--translations",
      "--data",
      "directory",
    ],
  )?;

  let base = ws.workspace.join("gg_full");
  assert!(base.join("addons/plugins/custom/gg_full/commands.py").is_file());
  assert!(base.join("addons/plugins/custom/gg_full/rules.py").is_file());
  assert!(base.join("resource/translations/custom/commands/gg_full.ini").is_file());
  assert!(base.join("resource/translations/custom/rules/gg_full.ini").is_file());
  assert!(base.join("resource/translations/custom/messages/gg_full.ini").is_file());
  assert!(base.join("addons/data/custom/gg_full").is_dir());
  Ok(())
}

#[test]
fn test_create_rejects_invalid_name() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = try_plugforge(&ws.path, &["create", "bad-name"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid plugin name"));
  Ok(())
}

#[test]
fn test_create_rejects_existing_plugin() -> Result<()> {
  let ws = TestWorkspace::new()?;

  run_plugforge(&ws.path, &["create", "gg_twice"])?;
  let output = try_plugforge(&ws.path, &["create", "gg_twice"])?;

  assert_eq!(output.status.code(), Some(3));
  assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
  Ok(())
}

#[test]
fn test_list_shows_created_plugins() -> Result<()> {
  let ws = TestWorkspace::new()?;
  run_plugforge(&ws.path, &["create", "gg_alpha"])?;
  run_plugforge(&ws.path, &["create", "gg_beta"])?;

  let output = run_plugforge(&ws.path, &["list"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("gg_alpha"));
  assert!(stdout.contains("gg_beta"));

  let output = run_plugforge(&ws.path, &["list", "--json"])?;
  let names: Vec<String> = serde_json::from_slice(&output.stdout)?;
  assert_eq!(names, vec!["gg_alpha", "gg_beta"]);
  Ok(())
}

#[test]
fn test_missing_config_is_user_error() -> Result<()> {
  let dir = tempfile::TempDir::new()?;

  let output = try_plugforge(dir.path(), &["list"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("forge.toml"));
  Ok(())
}

//! Integration tests for `plugforge link`

use crate::helpers::{TestWorkspace, run_plugforge};
use anyhow::Result;

#[test]
fn test_link_single_plugin() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_plugin("gg_example", "1.0.0")?;

  run_plugforge(&ws.path, &["link", "gg_example"])?;

  let linked = ws.host.join("addons/plugins/custom/gg_example");
  assert!(std::fs::symlink_metadata(&linked)?.file_type().is_symlink());
  assert!(linked.join("info.ini").is_file());
  Ok(())
}

#[test]
fn test_link_all_plugins() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_plugin("gg_alpha", "1.0.0")?;
  ws.add_plugin("gg_beta", "1.0.0")?;

  run_plugforge(&ws.path, &["link", "--all"])?;

  assert!(ws.host.join("addons/plugins/custom/gg_alpha").exists());
  assert!(ws.host.join("addons/plugins/custom/gg_beta").exists());
  Ok(())
}

#[test]
fn test_link_twice_is_idempotent() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_plugin("gg_example", "1.0.0")?;

  run_plugforge(&ws.path, &["link", "gg_example"])?;
  let output = run_plugforge(&ws.path, &["link", "gg_example"])?;

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("0 linked"), "got: {}", stdout);
  Ok(())
}

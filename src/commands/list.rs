//! List command implementation

use crate::core::config::ForgeConfig;
use crate::core::error::ForgeResult;
use crate::core::workspace::Workspace;

/// Run the list command
pub fn run_list(config: &ForgeConfig, json: bool) -> ForgeResult<()> {
  let workspace = Workspace::discover(&config.workspace.root)?;

  if json {
    println!("{}", serde_json::to_string_pretty(workspace.plugins())?);
    return Ok(());
  }

  if workspace.plugins().is_empty() {
    println!("No plugins found in {}", workspace.root().display());
    return Ok(());
  }

  println!("📦 Plugins ({})", workspace.plugins().len());
  for plugin in workspace.plugins() {
    println!("   {}", plugin);
  }

  Ok(())
}

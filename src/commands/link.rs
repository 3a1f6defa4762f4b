//! Link command implementation

use crate::core::config::ForgeConfig;
use crate::core::error::ForgeResult;
use crate::core::workspace::Workspace;
use crate::linker;
use crate::ui::prompt::{self, PluginChoice};

/// Run the link command
pub fn run_link(config: &ForgeConfig, plugin: Option<String>, all: bool) -> ForgeResult<()> {
  let workspace = Workspace::discover(&config.workspace.root)?;
  let host_root = config.host_root()?.to_path_buf();

  if workspace.plugins().is_empty() {
    println!("There are no plugins to link.");
    return Ok(());
  }

  let targets: Vec<String> = if all {
    workspace.plugins().to_vec()
  } else if let Some(name) = plugin {
    vec![name]
  } else {
    match prompt::choose_plugin_or_all(workspace.plugins(), "link")? {
      PluginChoice::All => workspace.plugins().to_vec(),
      PluginChoice::One(name) => vec![name],
    }
  };

  for name in &targets {
    let report = linker::link_plugin(config, &workspace, &host_root, name)?;
    println!("🔗 {}: {} linked, {} skipped", name, report.linked, report.skipped);
  }

  Ok(())
}

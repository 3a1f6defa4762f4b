//! Create command implementation

use crate::core::config::ForgeConfig;
use crate::core::error::ForgeResult;
use crate::core::workspace::Workspace;
use crate::scaffold::{self, ScaffoldOptions};

/// Run the create command
pub fn run_create(config: &ForgeConfig, name: String, options: ScaffoldOptions) -> ForgeResult<()> {
  let workspace = Workspace::discover(&config.workspace.root)?;

  let base = scaffold::create_plugin(config, &workspace, &name, &options)?;

  println!("✅ Created plugin '{}'", name);
  println!("   {}", base.display());
  Ok(())
}

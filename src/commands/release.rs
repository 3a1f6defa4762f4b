//! Release command implementation
//!
//! Thin wrapper over the release pipeline: resolves the plugin (argument
//! or interactive menu), opens its repository, and wires the bump choice
//! (flag or interactive menu) into the orchestrator.

use crate::core::config::ForgeConfig;
use crate::core::error::ForgeResult;
use crate::core::vcs::SystemGit;
use crate::core::workspace::Workspace;
use crate::release::run::run_release as run_pipeline;
use crate::release::version::Bump;
use crate::ui::prompt;
use semver::Version;

/// Run the release command
pub fn run_release(config: &ForgeConfig, plugin: Option<String>, bump: Option<Bump>) -> ForgeResult<()> {
  let workspace = Workspace::discover(&config.workspace.root)?;

  if workspace.plugins().is_empty() {
    println!("There are no plugins to release.");
    return Ok(());
  }

  let plugin = match plugin {
    Some(name) => name,
    None => prompt::choose_plugin(workspace.plugins(), "release")?,
  };
  workspace.validate_id(&plugin)?;

  println!("📦 Releasing '{}'", plugin);

  let vcs = SystemGit::open(&workspace.plugin_root(&plugin))?;

  let mut choose: Box<dyn FnMut(&Version) -> ForgeResult<Bump>> = match bump {
    Some(fixed) => Box::new(move |_: &Version| Ok(fixed)),
    None => Box::new(|current: &Version| {
      println!("   Current version: {}", current);
      println!();
      prompt::choose_bump()
    }),
  };

  let outcome = run_pipeline(config, &workspace, &vcs, &plugin, &mut *choose)?;

  println!();
  println!(
    "✅ Successfully created {} version {} release:",
    outcome.plugin, outcome.update.version
  );
  println!("   \"{}\" ({} files)", outcome.archive.display(), outcome.file_count);

  Ok(())
}

//! Release orchestration
//!
//! Sequences one release attempt: validate the plugin id, preflight the
//! repository, bump and publish the version, select shippable files, and
//! write the archive. The first failing stage aborts everything after it.
//! A committed bump is never rolled back, even when the push fails; the
//! operator is told the local branch is ahead instead.

use crate::core::config::ForgeConfig;
use crate::core::error::ForgeResult;
use crate::core::vcs::Vcs;
use crate::core::workspace::Workspace;
use crate::release::archive::build_archive;
use crate::release::rules::RuleTable;
use crate::release::select::select_files;
use crate::release::version::{Bump, InfoFile, VersionUpdate, apply_bump, preflight};
use semver::Version;
use std::path::PathBuf;

/// What a completed release produced
#[derive(Debug)]
pub struct ReleaseOutcome {
  pub plugin: String,
  pub update: VersionUpdate,
  pub archive: PathBuf,
  pub file_count: usize,
}

/// Run one release attempt for `plugin`
///
/// `choose` picks the bump class once the current version is known; the
/// command layer passes either the interactive menu or a fixed answer.
pub fn run_release(
  config: &ForgeConfig,
  workspace: &Workspace,
  vcs: &dyn Vcs,
  plugin: &str,
  choose: &mut dyn FnMut(&Version) -> ForgeResult<Bump>,
) -> ForgeResult<ReleaseOutcome> {
  workspace.validate_id(plugin)?;
  let plugin_root = workspace.plugin_root(plugin);

  preflight(vcs, &config.release.branch)?;

  let info_path = config.layout.info_file(&plugin_root, plugin);
  let mut info = InfoFile::load(&info_path)?;

  let bump = choose(info.version())?;
  let stage_path = config.layout.info_file_relative(plugin);
  let update = apply_bump(vcs, &mut info, &stage_path, bump)?;

  if update.bump != Bump::None {
    println!("   Committed: {} version update ({})", update.bump.label(), update.version);

    if let Err(err) = vcs.push(&config.release.remote, &config.release.branch) {
      eprintln!("⚠️  Version bump committed locally but the push failed");
      return Err(err);
    }
    println!("   Pushed to {}/{}", config.release.remote, config.release.branch);
  }

  let tracked = vcs.tracked_files()?;
  let plugin_rules = RuleTable::resolve(&config.rules, || RuleTable::plugin_defaults(&config.layout))?;
  let shared_rules = RuleTable::resolve(&config.shared_rules, RuleTable::shared_defaults)?;

  let candidates = select_files(&plugin_root, &[&plugin_rules, &shared_rules], &tracked)?;

  let archive = build_archive(plugin, &update.version, &candidates, &config.release.dir)?;

  Ok(ReleaseOutcome {
    plugin: plugin.to_string(),
    update,
    archive,
    file_count: candidates.len(),
  })
}

//! Plugin skeleton creation
//!
//! Materializes the base directories and premade files for a new plugin,
//! plus whichever optional components the operator asked for. Everything
//! here is plain file I/O; the interesting validation is the plugin name
//! and the already-exists check.

pub mod templates;

use crate::core::config::ForgeConfig;
use crate::core::error::{ForgeError, ForgeResult, ValidationError};
use crate::core::workspace::{Workspace, is_valid_plugin_name};
use std::fs;
use std::path::{Path, PathBuf};

/// Whether a plugin gets a data file or a data directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DataKind {
  File,
  Directory,
}

/// Optional components of a new plugin
#[derive(Debug, Default, Clone, clap::Args)]
pub struct ScaffoldOptions {
  /// Include a commands source file and its translation stub
  #[arg(long)]
  pub commands: bool,

  /// Include a configuration source file and its translation stub
  #[arg(long)]
  pub config: bool,

  /// Include a custom-events source file
  #[arg(long)]
  pub events: bool,

  /// Include a rules source file and its translation stub
  #[arg(long)]
  pub rules: bool,

  /// Include a player-settings source file
  #[arg(long)]
  pub settings: bool,

  /// Include a sounds source file
  #[arg(long)]
  pub sounds: bool,

  /// Create a per-plugin data file or directory
  #[arg(long, value_enum)]
  pub data: Option<DataKind>,

  /// Create a message translations stub
  #[arg(long)]
  pub translations: bool,
}

/// Derive the human-readable title: underscores to spaces, words capitalized
pub fn plugin_title(name: &str) -> String {
  name
    .split('_')
    .filter(|w| !w.is_empty())
    .map(|w| {
      let mut chars = w.chars();
      match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}

/// Create a plugin skeleton, returning its base directory
pub fn create_plugin(
  config: &ForgeConfig,
  workspace: &Workspace,
  name: &str,
  options: &ScaffoldOptions,
) -> ForgeResult<PathBuf> {
  if !is_valid_plugin_name(name) {
    return Err(ForgeError::Validation(ValidationError::InvalidPluginName {
      name: name.to_string(),
    }));
  }

  let base = workspace.plugin_root(name);
  if workspace.contains(name) || base.exists() {
    return Err(ForgeError::Validation(ValidationError::PluginExists {
      name: name.to_string(),
    }));
  }

  let title = plugin_title(name);
  let author = config.workspace.author.as_deref().unwrap_or("unknown");
  let render = |template: &str| templates::render(template, name, &title, author);

  let layout = &config.layout;
  let plugin_dir = base.join(&layout.plugins_dir).join(name);
  fs::create_dir_all(&plugin_dir)?;

  write_file(&plugin_dir.join("info.ini"), &render(templates::INFO_INI))?;
  write_file(&plugin_dir.join(format!("{}.py", name)), &render(templates::PLUGIN_MAIN))?;

  if options.commands {
    write_file(&plugin_dir.join("commands.py"), &render(templates::COMMANDS))?;
    touch(&translation_stub(&base, layout, "commands", name))?;
  }
  if options.config {
    write_file(&plugin_dir.join("configuration.py"), &render(templates::CONFIGURATION))?;
    touch(&translation_stub(&base, layout, "config", name))?;
  }
  if options.events {
    write_file(&plugin_dir.join("custom_events.py"), &render(templates::CUSTOM_EVENTS))?;
  }
  if options.rules {
    write_file(&plugin_dir.join("rules.py"), &render(templates::RULES))?;
    touch(&translation_stub(&base, layout, "rules", name))?;
  }
  if options.settings {
    write_file(&plugin_dir.join("settings.py"), &render(templates::SETTINGS))?;
  }
  if options.sounds {
    write_file(&plugin_dir.join("sounds.py"), &render(templates::SOUNDS))?;
  }

  match options.data {
    Some(DataKind::File) => touch(&base.join(&layout.data_dir).join(format!("{}.ini", name)))?,
    Some(DataKind::Directory) => fs::create_dir_all(base.join(&layout.data_dir).join(name))?,
    None => {}
  }

  if options.translations {
    touch(&translation_stub(&base, layout, "messages", name))?;
  }

  write_file(&base.join("README.md"), &render(templates::README))?;

  Ok(base)
}

fn translation_stub(
  base: &Path,
  layout: &crate::core::config::LayoutConfig,
  category: &str,
  name: &str,
) -> PathBuf {
  base
    .join(&layout.translations_dir)
    .join(category)
    .join(format!("{}.ini", name))
}

fn write_file(path: &Path, content: &str) -> ForgeResult<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)?;
  Ok(())
}

fn touch(path: &Path) -> ForgeResult<()> {
  write_file(path, "")
}

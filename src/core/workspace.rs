//! Plugin workspace discovery and name validation
//!
//! The workspace root contains one directory per plugin repository. Every
//! entry point validates the requested name against the discovered list
//! before touching anything.

use crate::core::error::{ConfigError, ForgeError, ForgeResult, ValidationError};
use std::fs;
use std::path::{Path, PathBuf};

/// A plugin name is alpha-numeric plus underscores, nothing else
pub fn is_valid_plugin_name(name: &str) -> bool {
  !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The discovered plugin workspace
#[derive(Debug, Clone)]
pub struct Workspace {
  root: PathBuf,
  plugins: Vec<String>,
}

impl Workspace {
  /// Scan the workspace root for plugin directories
  ///
  /// Hidden directories are ignored; anything else directly under the root
  /// is a plugin.
  pub fn discover(root: &Path) -> ForgeResult<Self> {
    if !root.is_dir() {
      return Err(ForgeError::Config(ConfigError::WorkspaceMissing {
        root: root.to_path_buf(),
      }));
    }

    let mut plugins = Vec::new();
    for entry in fs::read_dir(root)? {
      let entry = entry?;
      if !entry.file_type()?.is_dir() {
        continue;
      }
      let name = entry.file_name().to_string_lossy().into_owned();
      if name.starts_with('.') {
        continue;
      }
      plugins.push(name);
    }
    plugins.sort();

    Ok(Self {
      root: root.to_path_buf(),
      plugins,
    })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn plugins(&self) -> &[String] {
    &self.plugins
  }

  pub fn contains(&self, name: &str) -> bool {
    self.plugins.iter().any(|p| p == name)
  }

  /// Absolute path of a plugin's repository
  pub fn plugin_root(&self, name: &str) -> PathBuf {
    self.root.join(name)
  }

  /// Validate a plugin id: well-formed name, present in the workspace,
  /// and an existing directory
  pub fn validate_id(&self, name: &str) -> ForgeResult<()> {
    if !is_valid_plugin_name(name) {
      return Err(ForgeError::Validation(ValidationError::InvalidPluginName {
        name: name.to_string(),
      }));
    }
    if !self.contains(name) || !self.plugin_root(name).is_dir() {
      return Err(ForgeError::Config(ConfigError::PluginNotFound {
        name: name.to_string(),
      }));
    }
    Ok(())
  }
}

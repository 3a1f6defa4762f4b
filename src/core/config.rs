//! plugforge configuration (forge.toml) parsing and validation
//!
//! The whole tool is driven by one config file at the directory it is
//! invoked from. Components never read ambient state: the loaded
//! `ForgeConfig` is passed by reference into everything that needs a path.

use crate::core::error::{ConfigError, ForgeError, ForgeResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for plugforge
/// Searched in order: forge.toml, .forge.toml, .config/forge.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeConfig {
  pub workspace: WorkspaceConfig,
  #[serde(default)]
  pub release: ReleaseConfig,
  #[serde(default)]
  pub host: Option<HostConfig>,
  #[serde(default)]
  pub layout: LayoutConfig,
  /// Overrides for the plugin-scoped filter table
  #[serde(default)]
  pub rules: Vec<RuleConfig>,
  /// Overrides for the shared-asset filter table
  #[serde(default)]
  pub shared_rules: Vec<RuleConfig>,
}

/// The plugin workspace: one sub-directory per plugin repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
  pub root: PathBuf,

  /// Substituted into scaffold templates
  #[serde(default)]
  pub author: Option<String>,
}

/// Where and how releases are published
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
  /// Directory release archives are written under
  #[serde(default = "default_release_dir")]
  pub dir: PathBuf,

  /// Designated release branch; a release run aborts on any other branch
  #[serde(default = "default_release_branch")]
  pub branch: String,

  /// Remote the version-bump commit is pushed to
  #[serde(default = "default_release_remote")]
  pub remote: String,
}

fn default_release_dir() -> PathBuf {
  PathBuf::from("releases")
}

fn default_release_branch() -> String {
  "master".to_string()
}

fn default_release_remote() -> String {
  "origin".to_string()
}

impl Default for ReleaseConfig {
  fn default() -> Self {
    Self {
      dir: default_release_dir(),
      branch: default_release_branch(),
      remote: default_release_remote(),
    }
  }
}

/// The host repository the `link` command targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
  pub root: PathBuf,
}

/// Relative subtree shape shared by every plugin repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
  /// Directory holding `<plugin>/info.ini` and the plugin source files
  #[serde(default = "default_plugins_dir")]
  pub plugins_dir: PathBuf,

  /// Directory holding per-plugin data files
  #[serde(default = "default_data_dir")]
  pub data_dir: PathBuf,

  /// Directory holding per-category translation files
  #[serde(default = "default_translations_dir")]
  pub translations_dir: PathBuf,

  /// Directory holding sound files
  #[serde(default = "default_sound_dir")]
  pub sound_dir: PathBuf,
}

fn default_plugins_dir() -> PathBuf {
  PathBuf::from("addons/plugins/custom")
}

fn default_data_dir() -> PathBuf {
  PathBuf::from("addons/data/custom")
}

fn default_translations_dir() -> PathBuf {
  PathBuf::from("resource/translations/custom")
}

fn default_sound_dir() -> PathBuf {
  PathBuf::from("sound/custom")
}

impl Default for LayoutConfig {
  fn default() -> Self {
    Self {
      plugins_dir: default_plugins_dir(),
      data_dir: default_data_dir(),
      translations_dir: default_translations_dir(),
      sound_dir: default_sound_dir(),
    }
  }
}

impl LayoutConfig {
  /// Path of a plugin's metadata file inside its repository
  pub fn info_file(&self, plugin_root: &Path, name: &str) -> PathBuf {
    plugin_root.join(&self.plugins_dir).join(name).join("info.ini")
  }

  /// Repo-relative path of a plugin's metadata file (for staging)
  pub fn info_file_relative(&self, name: &str) -> PathBuf {
    self.plugins_dir.join(name).join("info.ini")
  }
}

/// One filter-table entry: a directory, its allowed extensions, and
/// file-name substrings that disqualify otherwise-allowed files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
  pub dir: PathBuf,
  pub extensions: Vec<String>,
  #[serde(default)]
  pub exceptions: Vec<String>,
}

impl ForgeConfig {
  /// Find config file in search order: forge.toml, .forge.toml, .config/forge.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("forge.toml"),
      path.join(".forge.toml"),
      path.join(".config").join("forge.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from forge.toml, resolving relative paths against `path`
  pub fn load(path: &Path) -> ForgeResult<Self> {
    let config_path = Self::find_config_path(path).ok_or_else(|| {
      ForgeError::Config(ConfigError::NotFound {
        search_root: path.to_path_buf(),
      })
    })?;

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let mut config: ForgeConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    config.resolve_paths(path);
    config
      .validate()
      .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;

    Ok(config)
  }

  /// Parse config from a string without path resolution (tests, tooling)
  pub fn parse(content: &str) -> ForgeResult<Self> {
    let config: ForgeConfig = toml_edit::de::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  fn resolve_paths(&mut self, base: &Path) {
    if self.workspace.root.is_relative() {
      self.workspace.root = base.join(&self.workspace.root);
    }
    if self.release.dir.is_relative() {
      self.release.dir = base.join(&self.release.dir);
    }
    if let Some(host) = &mut self.host
      && host.root.is_relative()
    {
      host.root = base.join(&host.root);
    }
  }

  fn validate(&self) -> ForgeResult<()> {
    if self.release.branch.is_empty() {
      return Err(ForgeError::Config(ConfigError::MissingField {
        field: "release.branch".to_string(),
      }));
    }

    for rule in self.rules.iter().chain(self.shared_rules.iter()) {
      if rule.extensions.is_empty() {
        return Err(ForgeError::with_help(
          format!("Rule for '{}' has no allowed extensions", rule.dir.display()),
          "Add at least one extension, e.g. extensions = [\"ini\"]",
        ));
      }
    }

    Ok(())
  }

  /// The host repository root, required by the `link` command
  pub fn host_root(&self) -> ForgeResult<&Path> {
    self
      .host
      .as_ref()
      .map(|h| h.root.as_path())
      .ok_or_else(|| {
        ForgeError::Config(ConfigError::MissingField {
          field: "host.root".to_string(),
        })
      })
  }
}

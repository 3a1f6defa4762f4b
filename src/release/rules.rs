//! Filter rules: which files under which directories are shippable
//!
//! Two independent tables exist per release run. The plugin table covers
//! plugin-specific subtrees (source, data, translations); the shared table
//! covers asset subtrees (materials, models) that are not plugin-scoped.
//! Results of both are unioned by the selector.

use crate::core::config::{LayoutConfig, RuleConfig};
use crate::core::error::{ForgeError, ForgeResult};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Readable data file extensions allowed in every plugin-scoped directory
const READABLE_DATA: &[&str] = &["ini", "json", "vdf", "xml"];

/// One directory's filter: allowed extensions plus disqualifying
/// file-name substrings
#[derive(Debug, Clone)]
pub struct FilterRule {
  pub dir: PathBuf,
  pub extensions: BTreeSet<String>,
  pub exceptions: Vec<String>,
}

impl FilterRule {
  pub fn new(dir: impl Into<PathBuf>, extensions: &[&str], exceptions: &[&str]) -> Self {
    Self {
      dir: dir.into(),
      extensions: extensions.iter().map(|e| e.to_string()).collect(),
      exceptions: exceptions.iter().map(|e| e.to_string()).collect(),
    }
  }

  /// A file matches iff its extension is allowed and no exception substring
  /// occurs in its name. The first exception hit disqualifies the file with
  /// no further checks.
  pub fn matches(&self, file_name: &str, extension: Option<&str>) -> bool {
    let Some(ext) = extension else {
      return false;
    };
    if !self.extensions.contains(ext) {
      return false;
    }
    !self.exceptions.iter().any(|e| file_name.contains(e.as_str()))
  }
}

/// A set of filter rules with unique directory keys
#[derive(Debug, Clone)]
pub struct RuleTable {
  rules: Vec<FilterRule>,
}

impl RuleTable {
  pub fn new(rules: Vec<FilterRule>) -> ForgeResult<Self> {
    {
      let mut seen: BTreeSet<&Path> = BTreeSet::new();
      for rule in &rules {
        if !seen.insert(rule.dir.as_path()) {
          return Err(ForgeError::message(format!(
            "Duplicate rule directory '{}'",
            rule.dir.display()
          )));
        }
      }
    }
    Ok(Self { rules })
  }

  pub fn rules(&self) -> &[FilterRule] {
    &self.rules
  }

  /// Default plugin-scoped table, derived from the configured layout
  pub fn plugin_defaults(layout: &LayoutConfig) -> Self {
    let mut source_exts: Vec<&str> = READABLE_DATA.to_vec();
    source_exts.extend(["md", "py"]);

    let mut data_exts: Vec<&str> = READABLE_DATA.to_vec();
    data_exts.extend(["md", "txt"]);

    Self {
      rules: vec![
        FilterRule::new(layout.plugins_dir.clone(), &source_exts, &[]),
        FilterRule::new(layout.data_dir.clone(), &data_exts, &[]),
        FilterRule::new(layout.translations_dir.clone(), &["ini"], &["_server.ini"]),
      ],
    }
  }

  /// Default shared-asset table (not plugin-scoped)
  pub fn shared_defaults() -> Self {
    Self {
      rules: vec![
        FilterRule::new("materials", &["vmt", "vtf"], &[]),
        FilterRule::new("models", &["mdl", "phy", "vtx", "vvd"], &[]),
      ],
    }
  }

  /// Build a table from config overrides
  pub fn from_config(entries: &[RuleConfig]) -> ForgeResult<Self> {
    let rules = entries
      .iter()
      .map(|e| FilterRule {
        dir: e.dir.clone(),
        extensions: e.extensions.iter().cloned().collect(),
        exceptions: e.exceptions.clone(),
      })
      .collect();
    Self::new(rules)
  }

  /// Resolve a table: config overrides when present, defaults otherwise
  pub fn resolve(entries: &[RuleConfig], defaults: impl FnOnce() -> Self) -> ForgeResult<Self> {
    if entries.is_empty() {
      Ok(defaults())
    } else {
      Self::from_config(entries)
    }
  }
}

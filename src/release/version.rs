//! Version management for a release attempt
//!
//! A release reads the plugin's current version from its info.ini, applies
//! exactly one bump, and persists the result back before packaging. The
//! metadata edit is line-preserving: comments and unrelated keys survive
//! byte-for-byte.

use crate::core::error::{ConfigError, ForgeError, ForgeResult, ValidationError};
use crate::core::vcs::Vcs;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Version bump class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Bump {
  Major,
  Minor,
  Patch,
  None,
}

impl Bump {
  /// Apply this bump to a version
  ///
  /// Major resets minor and patch, minor resets patch, none is identity.
  pub fn apply(self, current: &Version) -> Version {
    match self {
      Bump::Major => Version::new(current.major + 1, 0, 0),
      Bump::Minor => Version::new(current.major, current.minor + 1, 0),
      Bump::Patch => Version::new(current.major, current.minor, current.patch + 1),
      Bump::None => Version::new(current.major, current.minor, current.patch),
    }
  }

  /// Label used in menus and commit messages
  pub fn label(self) -> &'static str {
    match self {
      Bump::Major => "MAJOR",
      Bump::Minor => "MINOR",
      Bump::Patch => "PATCH",
      Bump::None => "None",
    }
  }
}

/// Parse a metadata version value: exactly three dot-separated
/// non-negative integers, nothing else
pub fn parse_version(value: &str) -> ForgeResult<Version> {
  let invalid = || {
    ForgeError::Config(ConfigError::InvalidVersion {
      value: value.to_string(),
    })
  };

  let parts: Vec<&str> = value.split('.').collect();
  if parts.len() != 3 {
    return Err(invalid());
  }

  let mut numbers = [0u64; 3];
  for (i, part) in parts.iter().enumerate() {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
      return Err(invalid());
    }
    numbers[i] = part.parse().map_err(|_| invalid())?;
  }

  Ok(Version::new(numbers[0], numbers[1], numbers[2]))
}

/// A plugin's info.ini, held as lines so a version rewrite leaves every
/// other byte untouched
pub struct InfoFile {
  path: PathBuf,
  lines: Vec<String>,
  version_line: usize,
  key_prefix: String,
  quoted: bool,
  version: Version,
}

impl InfoFile {
  /// Load and parse the metadata file
  ///
  /// Missing file, missing `version` key, or a malformed value is fatal.
  pub fn load(path: &Path) -> ForgeResult<Self> {
    if !path.is_file() {
      return Err(ForgeError::Config(ConfigError::MetadataMissing {
        path: path.to_path_buf(),
      }));
    }

    let content = fs::read_to_string(path)?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();

    let mut found: Option<(usize, String, bool, Version)> = None;
    for (idx, line) in lines.iter().enumerate() {
      let trimmed = line.trim_start();
      if trimmed.starts_with('#') || trimmed.starts_with(';') || trimmed.starts_with('[') {
        continue;
      }
      let Some((key, rest)) = line.split_once('=') else {
        continue;
      };
      if key.trim() != "version" {
        continue;
      }

      let (raw, quoted) = strip_quotes(rest.trim());
      let version = parse_version(raw)?;

      // Everything up to the value survives the rewrite verbatim
      let leading = &rest[..rest.len() - rest.trim_start().len()];
      found = Some((idx, format!("{}={}", key, leading), quoted, version));
      break;
    }

    match found {
      Some((version_line, key_prefix, quoted, version)) => Ok(Self {
        path: path.to_path_buf(),
        lines,
        version_line,
        key_prefix,
        quoted,
        version,
      }),
      None => Err(ForgeError::Config(ConfigError::VersionKeyMissing {
        path: path.to_path_buf(),
      })),
    }
  }

  pub fn version(&self) -> &Version {
    &self.version
  }

  /// Rewrite the version line, preserving key spelling and quote style
  pub fn set_version(&mut self, version: &Version) {
    let value = if self.quoted {
      format!("\"{}\"", version)
    } else {
      version.to_string()
    };
    self.lines[self.version_line] = format!("{}{}", self.key_prefix, value);
    self.version = version.clone();
  }

  /// Write the file back to disk
  pub fn save(&self) -> ForgeResult<()> {
    let mut content = self.lines.join("\n");
    content.push('\n');
    fs::write(&self.path, content)?;
    Ok(())
  }
}

fn strip_quotes(value: &str) -> (&str, bool) {
  for quote in ['"', '\''] {
    if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
      return (&value[1..value.len() - 1], true);
    }
  }
  (value, false)
}

/// The outcome of the version-management stage
#[derive(Debug, Clone)]
pub struct VersionUpdate {
  pub previous: Version,
  pub version: Version,
  pub bump: Bump,
}

/// Verify the repository is ready for a release: designated branch checked
/// out, no uncommitted changes
///
/// Either violation aborts before anything is mutated.
pub fn preflight(vcs: &dyn Vcs, release_branch: &str) -> ForgeResult<()> {
  let actual = vcs.current_branch()?;
  if actual != release_branch {
    return Err(ForgeError::Validation(ValidationError::WrongBranch {
      expected: release_branch.to_string(),
      actual,
    }));
  }

  if !vcs.is_clean()? {
    return Err(ForgeError::Validation(ValidationError::DirtyTree));
  }

  Ok(())
}

/// Persist a bump and commit exactly the metadata file
///
/// `Bump::None` leaves the file and the repository untouched. The push to
/// the remote is a separate step owned by the orchestrator.
pub fn apply_bump(
  vcs: &dyn Vcs,
  info: &mut InfoFile,
  stage_path: &Path,
  bump: Bump,
) -> ForgeResult<VersionUpdate> {
  let previous = info.version().clone();

  if bump == Bump::None {
    return Ok(VersionUpdate {
      version: previous.clone(),
      previous,
      bump,
    });
  }

  let next = bump.apply(&previous);
  info.set_version(&next);
  info.save()?;

  vcs.stage(stage_path)?;
  vcs.commit(&format!("{} version update ({})", bump.label(), next))?;

  Ok(VersionUpdate {
    previous,
    version: next,
    bump,
  })
}

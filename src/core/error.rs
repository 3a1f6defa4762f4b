//! Error types for plugforge with contextual messages and exit codes
//!
//! Every failure in the release path is categorized so the process exit
//! code tells scripts what class of problem occurred, and errors carry a
//! help message pointing the operator at a fix.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for plugforge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, unknown plugin, bad metadata)
  User = 1,
  /// System error (git, I/O)
  System = 2,
  /// Validation failure (preflight checks, existing release)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for plugforge
#[derive(Debug)]
pub enum ForgeError {
  /// Configuration errors
  Config(ConfigError),

  /// Git operation errors
  Git(GitError),

  /// Precondition violations
  Validation(ValidationError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl ForgeError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ForgeError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    ForgeError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ForgeError::Message { message, context, help } => ForgeError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ForgeError::Config(_) => ExitCode::User,
      ForgeError::Git(_) => ExitCode::System,
      ForgeError::Validation(_) => ExitCode::Validation,
      ForgeError::Io(_) => ExitCode::System,
      ForgeError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ForgeError::Config(e) => e.help_message(),
      ForgeError::Git(e) => e.help_message(),
      ForgeError::Validation(e) => e.help_message(),
      ForgeError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for ForgeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ForgeError::Config(e) => write!(f, "{}", e),
      ForgeError::Git(e) => write!(f, "{}", e),
      ForgeError::Validation(e) => write!(f, "{}", e),
      ForgeError::Io(e) => write!(f, "I/O error: {}", e),
      ForgeError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ForgeError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ForgeError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ForgeError {
  fn from(err: io::Error) -> Self {
    ForgeError::Io(err)
  }
}

impl From<String> for ForgeError {
  fn from(msg: String) -> Self {
    ForgeError::message(msg)
  }
}

impl From<&str> for ForgeError {
  fn from(msg: &str) -> Self {
    ForgeError::message(msg)
  }
}

impl From<toml_edit::TomlError> for ForgeError {
  fn from(err: toml_edit::TomlError) -> Self {
    ForgeError::message(format!("TOML parse error: {}", err))
  }
}

impl From<toml_edit::de::Error> for ForgeError {
  fn from(err: toml_edit::de::Error) -> Self {
    ForgeError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for ForgeError {
  fn from(err: serde_json::Error) -> Self {
    ForgeError::message(format!("JSON error: {}", err))
  }
}

impl From<semver::Error> for ForgeError {
  fn from(err: semver::Error) -> Self {
    ForgeError::message(format!("Version parse error: {}", err))
  }
}

impl From<zip::result::ZipError> for ForgeError {
  fn from(err: zip::result::ZipError) -> Self {
    ForgeError::message(format!("Archive error: {}", err))
  }
}

impl From<walkdir::Error> for ForgeError {
  fn from(err: walkdir::Error) -> Self {
    ForgeError::message(format!("Directory walk error: {}", err))
  }
}

impl From<std::path::StripPrefixError> for ForgeError {
  fn from(err: std::path::StripPrefixError) -> Self {
    ForgeError::message(format!("Path strip prefix error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for ForgeError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    ForgeError::message(format!("UTF-8 conversion error: {}", err))
  }
}

impl From<anyhow::Error> for ForgeError {
  fn from(err: anyhow::Error) -> Self {
    ForgeError::message(err.to_string())
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// forge.toml not found
  NotFound { search_root: PathBuf },

  /// Missing required field
  MissingField { field: String },

  /// Workspace root is not a directory
  WorkspaceMissing { root: PathBuf },

  /// Plugin not found in the workspace
  PluginNotFound { name: String },

  /// Plugin metadata file (info.ini) not found
  MetadataMissing { path: PathBuf },

  /// Metadata file has no version key
  VersionKeyMissing { path: PathBuf },

  /// Version value is not MAJOR.MINOR.PATCH
  InvalidVersion { value: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Create a forge.toml with a [workspace] section naming the plugin workspace root.".to_string())
      }
      ConfigError::PluginNotFound { name } => Some(format!(
        "Known plugins can be listed with `plugforge list`. Did you mean to run `plugforge create {}`?",
        name
      )),
      ConfigError::WorkspaceMissing { .. } => {
        Some("Check the `root` value under [workspace] in forge.toml.".to_string())
      }
      ConfigError::InvalidVersion { .. } => {
        Some("The `version` key must be exactly three dot-separated integers, e.g. 1.2.3".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { search_root } => {
        write!(
          f,
          "No plugforge configuration found.\nExpected file: {}/forge.toml",
          search_root.display()
        )
      }
      ConfigError::MissingField { field } => {
        write!(f, "Missing required field in config: {}", field)
      }
      ConfigError::WorkspaceMissing { root } => {
        write!(f, "Plugin workspace not found at: {}", root.display())
      }
      ConfigError::PluginNotFound { name } => {
        write!(f, "Plugin '{}' not found in the workspace", name)
      }
      ConfigError::MetadataMissing { path } => {
        write!(f, "No info.ini file found at: {}", path.display())
      }
      ConfigError::VersionKeyMissing { path } => {
        write!(f, "'version' not found in {}", path.display())
      }
      ConfigError::InvalidVersion { value } => {
        write!(f, "Invalid 'version' in info.ini: \"{}\"", value)
      }
    }
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Git command failed
  CommandFailed { command: String, stderr: String },

  /// Repository not found
  RepoNotFound { path: PathBuf },

  /// Push failed
  PushFailed {
    remote: String,
    branch: String,
    reason: String,
  },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::PushFailed { remote, branch, .. } => Some(format!(
        "The version bump commit exists locally but was not published. The local branch is now \
         ahead of '{}/{}'; push it manually before the next release attempt.",
        remote, branch
      )),
      GitError::RepoNotFound { path } => Some(format!(
        "Every plugin must be its own git repository. Initialize one at: {}",
        path.display()
      )),
      _ => None,
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, stderr } => {
        write!(f, "Git command failed: {}\n{}", command, stderr)
      }
      GitError::RepoNotFound { path } => {
        write!(f, "Git repository not found at: {}", path.display())
      }
      GitError::PushFailed { remote, branch, reason } => {
        write!(f, "Push to {}/{} failed: {}", remote, branch, reason)
      }
    }
  }
}

/// Precondition violations detected before any mutating step
#[derive(Debug)]
pub enum ValidationError {
  /// Not on the designated release branch
  WrongBranch { expected: String, actual: String },

  /// Working tree has uncommitted changes
  DirtyTree,

  /// A release archive already exists for this version
  ReleaseExists { path: PathBuf },

  /// Plugin name contains invalid characters
  InvalidPluginName { name: String },

  /// Plugin directory already exists (create)
  PluginExists { name: String },
}

impl ValidationError {
  fn help_message(&self) -> Option<String> {
    match self {
      ValidationError::WrongBranch { expected, .. } => {
        Some(format!("Check out '{}' before releasing.", expected))
      }
      ValidationError::DirtyTree => Some("Commit or stash the outstanding changes, then retry.".to_string()),
      ValidationError::ReleaseExists { .. } => {
        Some("Bump the version again or remove the stale archive to re-publish.".to_string())
      }
      ValidationError::InvalidPluginName { .. } => {
        Some("Plugin names may only contain alpha-numeric characters and underscores.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ValidationError::WrongBranch { expected, actual } => {
        write!(f, "Not on \"{}\" branch. On branch \"{}\"", expected, actual)
      }
      ValidationError::DirtyTree => {
        write!(f, "There are uncommitted changes")
      }
      ValidationError::ReleaseExists { path } => {
        write!(f, "Release already exists for current version: {}", path.display())
      }
      ValidationError::InvalidPluginName { name } => {
        write!(f, "Invalid plugin name \"{}\"", name)
      }
      ValidationError::PluginExists { name } => {
        write!(f, "Plugin \"{}\" already exists", name)
      }
    }
  }
}

/// Result type alias for plugforge
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ForgeResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ForgeResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ForgeError>,
{
  fn context(self, ctx: impl Into<String>) -> ForgeResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ForgeResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ForgeError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}

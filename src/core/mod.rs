//! Core building blocks shared by every plugforge command
//!
//! - **config**: forge.toml parsing and validation
//! - **error**: error types with contextual help messages and exit codes
//! - **vcs**: version-control abstraction (SystemGit + the `Vcs` trait)
//! - **workspace**: plugin discovery and name validation

pub mod config;
pub mod error;
pub mod vcs;
pub mod workspace;

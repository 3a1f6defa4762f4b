//! The release builder
//!
//! Packaging a plugin release runs through a fixed pipeline:
//! preflight the repository, bump and publish the version, list the files
//! tracked at HEAD, select the shippable subset through the filter tables,
//! and write the zip archive.
//!
//! - **rules**: directory → allowed-extension filter tables with exceptions
//! - **select**: walks rule directories and intersects with the tracked set
//! - **version**: info.ini metadata, semver bump, preflight checks
//! - **archive**: zip writing with reconstructed directory entries
//! - **run**: the orchestrator sequencing all of the above

pub mod archive;
pub mod rules;
pub mod run;
pub mod select;
pub mod version;

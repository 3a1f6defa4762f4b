//! CLI commands for plugforge
//!
//! One file per verb:
//! - **create**: scaffold a new plugin skeleton
//! - **link**: symlink plugin subtrees into the host repository
//! - **list**: enumerate discovered plugins
//! - **release**: package a versioned release archive

pub mod create;
pub mod link;
pub mod list;
pub mod release;

pub use create::run_create;
pub use link::run_link;
pub use list::run_list;
pub use release::run_release;

//! Two-level directory layout of an archive.
//!
//! - [`path`]: pure classification of entry names
//! - [`group`]: folding entry names into a [`DirectoryGroup`]
//! - [`tree`]: rendering a group for display

mod group;
mod path;
mod tree;

pub use group::{DirectoryGroup, group, read_directory_group};
pub use path::*;
pub use tree::render_tree;

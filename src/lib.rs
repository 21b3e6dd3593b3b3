//! # ichs
//!
//! Checks whether a ZIP archive is ready to be published to SDKMAN!.
//!
//! The archive is read once, front to back, straight from its URL. Only
//! the entry names are looked at: nothing is extracted and the download
//! is never buffered as a whole. The top two levels of directories are
//! grouped and checked against the packaging rules:
//!
//! - the archive holds exactly one top-level directory
//! - that directory contains a `bin/` directory
//!
//! All rules are evaluated, so every problem is reported in one run.
//!
//! ## Example
//!
//! ```no_run
//! use ichs::{HttpStream, ZipEntryStream, layout, rules};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let source = HttpStream::open("https://example.com/app-1.0.zip").await?;
//!     let mut entries = ZipEntryStream::new(source);
//!
//!     let group = layout::read_directory_group(&mut entries).await?;
//!     print!("{}", layout::render_tree("app-1.0.zip", &group));
//!
//!     let report = rules::check(&group);
//!     println!("ready: {}", report.is_valid());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod io;
pub mod layout;
pub mod output;
pub mod rules;
pub mod validation;
pub mod zip;

#[cfg(test)]
mod test_utils;

pub use cli::Cli;
pub use error::ArchiveReadError;
pub use io::{HttpStream, LocalFileStream, ReadStream};
pub use layout::DirectoryGroup;
pub use validation::Validation;
pub use zip::{ZipEntry, ZipEntryStream};

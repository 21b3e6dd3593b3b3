//! ZIP entry stream parsing.
//!
//! This module reads the entry names of a ZIP archive from a forward-only
//! byte stream, without extracting anything.
//!
//! ## Architecture
//!
//! - [`structures`]: Data structures representing ZIP format elements (local file headers, entries)
//! - [`stream`]: Sequential reader producing one [`ZipEntry`] per local file header
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and compressed data for each file
//! 2. Central Directory with metadata for all files
//! 3. End of Central Directory (EOCD) record at the end
//!
//! The Central Directory is only reachable by seeking to the end of the
//! file. Reading the local file headers instead works on a download that
//! is consumed once, front to back.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - ZIP64 sizes in local file headers
//! - Data descriptors after DEFLATE entries
//!
//! ## Limitations
//!
//! - No multi-disk archive support
//! - Entries other than DEFLATE need their sizes in the local file header

mod stream;
mod structures;

pub use stream::ZipEntryStream;
pub use structures::*;

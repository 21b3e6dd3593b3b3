mod http;
mod local;

pub use http::HttpStream;
pub use local::LocalFileStream;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for forward-only reading from a data source
///
/// Sources are consumed once, front to back. There is no seeking.
#[async_trait]
pub trait ReadStream: Send {
    /// Read the next bytes into the buffer, returning `0` at end of stream
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

use super::ReadStream;
use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Local file reader, consumed front to back like a download
pub struct LocalFileStream {
    file: File,
}

impl LocalFileStream {
    pub async fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).await?;
        tracing::debug!(path = %path.display(), "opened local archive");
        Ok(Self { file })
    }
}

#[async_trait]
impl ReadStream for LocalFileStream {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.file.read(buf).await?)
    }
}

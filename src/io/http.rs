use async_trait::async_trait;
use reqwest::{Client, Response};

use super::ReadStream;
use crate::error::{ArchiveReadError, Result};

/// HTTP body reader for remote ZIP files
///
/// Issues a single GET request and hands out the response body as it
/// arrives. A failed connection is not retried.
pub struct HttpStream {
    response: Response,
    chunk: Vec<u8>,
    chunk_pos: usize,
    transferred_bytes: u64,
}

impl HttpStream {
    /// Connect to the URL and start streaming its body
    pub async fn open(url: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        let response = client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ArchiveReadError::Status(response.status()));
        }

        tracing::debug!(url, content_length = ?response.content_length(), "connected");

        Ok(Self {
            response,
            chunk: Vec::new(),
            chunk_pos: 0,
            transferred_bytes: 0,
        })
    }

    /// Get total bytes received from the network so far
    pub fn transferred_bytes(&self) -> u64 {
        self.transferred_bytes
    }
}

#[async_trait]
impl ReadStream for HttpStream {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        // Pull body chunks until one has unread bytes
        while self.chunk_pos >= self.chunk.len() {
            match self.response.chunk().await? {
                Some(bytes) => {
                    self.transferred_bytes += bytes.len() as u64;
                    self.chunk = bytes.to_vec();
                    self.chunk_pos = 0;
                }
                None => return Ok(0),
            }
        }

        let n = buf.len().min(self.chunk.len() - self.chunk_pos);
        buf[..n].copy_from_slice(&self.chunk[self.chunk_pos..self.chunk_pos + n]);
        self.chunk_pos += n;

        Ok(n)
    }
}

impl Drop for HttpStream {
    fn drop(&mut self) {
        tracing::debug!(transferred = self.transferred_bytes, "connection closed");
    }
}

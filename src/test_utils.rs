//! Helpers shared by unit tests.

use async_trait::async_trait;
use std::io::{Cursor, Write};

use crate::error::{ArchiveReadError, Result};
use crate::io::ReadStream;

/// In-memory source that hands out at most `chunk_size` bytes per read.
pub struct MemoryStream {
    data: Vec<u8>,
    pos: usize,
    chunk_size: usize,
}

impl MemoryStream {
    pub fn new(data: Vec<u8>) -> Self {
        Self::chunked(data, 7)
    }

    pub fn chunked(data: Vec<u8>, chunk_size: usize) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size,
        }
    }
}

#[async_trait]
impl ReadStream for MemoryStream {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = buf.len().min(self.chunk_size).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Source that drops the connection after `fail_after` bytes.
pub struct FailingStream {
    inner: MemoryStream,
    remaining: usize,
}

impl FailingStream {
    pub fn new(data: Vec<u8>, fail_after: usize) -> Self {
        Self {
            inner: MemoryStream::new(data),
            remaining: fail_after,
        }
    }
}

#[async_trait]
impl ReadStream for FailingStream {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.remaining == 0 {
            return Err(ArchiveReadError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            )));
        }
        let limit = buf.len().min(self.remaining);
        let n = self.inner.read(&mut buf[..limit]).await?;
        self.remaining -= n;
        Ok(n)
    }
}

/// Build an archive holding the given entries in order.
///
/// Names ending in `/` become directory entries, everything else a small
/// stored file.
pub fn zip_with_entries(names: &[&str]) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for name in names {
        if name.ends_with('/') {
            zip.add_directory(*name, options).unwrap();
        } else {
            zip.start_file(*name, options).unwrap();
            zip.write_all(b"#!/bin/sh\necho hello\n").unwrap();
        }
    }

    zip.finish().unwrap().into_inner()
}

/// A local file entry written the way streaming writers do it: sizes
/// zeroed in the header, DEFLATE data, then a signed data descriptor.
pub fn deflated_entry_with_descriptor(name: &str, payload: &[u8]) -> Vec<u8> {
    use flate2::Compression;
    use flate2::write::DeflateEncoder;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(payload).unwrap();
    let compressed = encoder.finish().unwrap();

    let mut data = Vec::new();
    data.extend_from_slice(b"PK\x03\x04");
    data.extend_from_slice(&20u16.to_le_bytes());
    data.extend_from_slice(&0x0008u16.to_le_bytes());
    data.extend_from_slice(&8u16.to_le_bytes());
    data.extend_from_slice(&[0; 4]);
    data.extend_from_slice(&[0; 12]);
    data.extend_from_slice(&(name.len() as u16).to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(name.as_bytes());
    data.extend_from_slice(&compressed);
    data.extend_from_slice(b"PK\x07\x08");
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&(compressed.len() as u32).to_le_bytes());
    data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    data
}

/// A stored directory entry with no data.
pub fn directory_entry(name: &str) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"PK\x03\x04");
    data.extend_from_slice(&10u16.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&[0; 4]);
    data.extend_from_slice(&[0; 12]);
    data.extend_from_slice(&(name.len() as u16).to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(name.as_bytes());
    data
}

/// An empty End of Central Directory record.
pub fn end_of_central_directory() -> Vec<u8> {
    let mut data = b"PK\x05\x06".to_vec();
    data.extend_from_slice(&[0; 18]);
    data
}

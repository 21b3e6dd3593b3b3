//! Forward-only ZIP entry reader.
//!
//! This module walks the Local File Headers of an archive in the order
//! they appear on the wire, reading from any source that implements the
//! [`ReadStream`] trait.
//!
//! ## Reading Strategy
//!
//! A network-backed source cannot seek to the Central Directory at the
//! end of the file, so entries are discovered front to back:
//! 1. Read a Local File Header and the entry's name
//! 2. Skip the entry data, using the header sizes when they are known
//! 3. For DEFLATE entries with a trailing data descriptor, inflate the
//!    data only to find where it ends, then skip the descriptor
//! 4. Stop at the first Central Directory or End of Central Directory record
//!
//! Entry contents are never kept.

use flate2::{Decompress, FlushDecompress, Status};

use crate::error::{ArchiveReadError, Result};
use crate::io::ReadStream;

use super::structures::*;

/// Bytes requested from the source per read.
const READ_SIZE: usize = 64 * 1024;

/// Output scratch space for inflating entries that are being skipped.
const INFLATE_SCRATCH_SIZE: usize = 32 * 1024;

/// Lazy, finite sequence of the entries in a ZIP byte stream.
///
/// Each call to [`next_entry`](Self::next_entry) pulls just enough bytes
/// from the source to reach the following entry. After the end of the
/// entries (or an error) every further call returns `Ok(None)`; the
/// stream cannot be restarted.
///
/// ## Example
///
/// ```ignore
/// let mut entries = ZipEntryStream::new(HttpStream::open(url).await?);
/// while let Some(name) = entries.next_name().await? {
///     println!("{name}");
/// }
/// ```
pub struct ZipEntryStream<S: ReadStream> {
    /// The underlying data source
    source: S,
    /// Bytes read from the source but not consumed yet, starting at `pos`
    buf: Vec<u8>,
    pos: usize,
    finished: bool,
    entries_read: u64,
}

impl<S: ReadStream> ZipEntryStream<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            buf: Vec::new(),
            pos: 0,
            finished: false,
            entries_read: 0,
        }
    }

    /// Number of entries produced so far.
    pub fn entries_read(&self) -> u64 {
        self.entries_read
    }

    /// Get a reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read the next entry, or `None` once the entries are exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails or the bytes are not a
    /// well-formed sequence of ZIP local file entries. The stream is
    /// finished afterwards.
    pub async fn next_entry(&mut self) -> Result<Option<ZipEntry>> {
        if self.finished {
            return Ok(None);
        }

        match self.read_entry().await {
            Ok(Some(entry)) => {
                self.entries_read += 1;
                tracing::trace!(name = %entry.name, "entry");
                Ok(Some(entry))
            }
            Ok(None) => {
                self.finished = true;
                tracing::debug!(entries = self.entries_read, "end of entries");
                Ok(None)
            }
            Err(e) => {
                self.finished = true;
                Err(e)
            }
        }
    }

    /// Read the name of the next entry, or `None` at the end.
    pub async fn next_name(&mut self) -> Result<Option<String>> {
        Ok(self.next_entry().await?.map(|entry| entry.name))
    }

    async fn read_entry(&mut self) -> Result<Option<ZipEntry>> {
        if !self.fill(4).await? {
            // A clean end of stream at a record boundary ends the entries
            if self.available() == 0 {
                return Ok(None);
            }
            return Err(ArchiveReadError::format("truncated record signature"));
        }

        let signature = &self.buf[self.pos..self.pos + 4];
        if signature == CDFH_SIGNATURE
            || signature == EOCD_SIGNATURE
            || signature == ZIP64_EOCD_SIGNATURE
        {
            return Ok(None);
        }
        if signature != LFH_SIGNATURE {
            return Err(ArchiveReadError::format(format!(
                "unexpected record signature {signature:02x?} after {} entries",
                self.entries_read
            )));
        }

        let header = self.take(LFH_SIZE, "local file header").await?;
        let header = LocalFileHeader::from_bytes(&header)?;
        let name = self
            .take(header.file_name_length as usize, "file name")
            .await?;
        let extra = self
            .take(header.extra_field_length as usize, "extra field")
            .await?;

        let entry = ZipEntry::from_local_header(&header, &name, &extra)?;
        self.skip_data(&entry).await?;

        Ok(Some(entry))
    }

    /// Move past the entry's data and its data descriptor, if any.
    async fn skip_data(&mut self, entry: &ZipEntry) -> Result<()> {
        if !entry.has_data_descriptor() {
            return self.skip(entry.compressed_size, "entry data").await;
        }

        match entry.compression_method {
            CompressionMethod::Deflate => self.skip_deflate_stream().await?,
            // Some writers still fill in the sizes; directories carry no data
            _ if entry.compressed_size > 0 => {
                self.skip(entry.compressed_size, "entry data").await?
            }
            _ if entry.is_directory => {}
            method => {
                return Err(ArchiveReadError::format(format!(
                    "{}: cannot find the end of data for compression method {} with a data descriptor",
                    entry.name,
                    method.as_u16()
                )));
            }
        }

        self.skip_data_descriptor(entry).await
    }

    async fn skip_data_descriptor(&mut self, entry: &ZipEntry) -> Result<()> {
        if !self.fill(4).await? {
            return Err(ArchiveReadError::format("truncated data descriptor"));
        }
        if &self.buf[self.pos..self.pos + 4] == DATA_DESCRIPTOR_SIGNATURE {
            self.pos += 4;
        }
        self.skip(entry.data_descriptor_len(), "data descriptor").await
    }

    /// Inflate a DEFLATE stream without keeping its output, stopping
    /// exactly at its last compressed byte.
    async fn skip_deflate_stream(&mut self) -> Result<()> {
        let mut inflater = Decompress::new(false);
        let mut scratch = vec![0u8; INFLATE_SCRATCH_SIZE];

        loop {
            if self.available() == 0 && !self.fill(1).await? {
                return Err(ArchiveReadError::format("truncated deflate stream"));
            }

            let (in_before, out_before) = (inflater.total_in(), inflater.total_out());
            let status = inflater
                .decompress(&self.buf[self.pos..], &mut scratch, FlushDecompress::None)
                .map_err(|e| ArchiveReadError::format(format!("invalid deflate data: {e}")))?;
            let consumed = (inflater.total_in() - in_before) as usize;
            self.pos += consumed;

            match status {
                Status::StreamEnd => return Ok(()),
                Status::Ok | Status::BufError => {
                    // Stalled with input left: the inflater needs more at once
                    let wanted = self.available() + 1;
                    if consumed == 0
                        && inflater.total_out() == out_before
                        && !self.fill(wanted).await?
                    {
                        return Err(ArchiveReadError::format("truncated deflate stream"));
                    }
                }
            }
        }
    }

    fn available(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Make at least `n` unread bytes available. Returns `false` if the
    /// source ends first.
    async fn fill(&mut self, n: usize) -> Result<bool> {
        if self.available() >= n {
            return Ok(true);
        }

        self.buf.drain(..self.pos);
        self.pos = 0;

        while self.buf.len() < n {
            let len = self.buf.len();
            self.buf.resize(len + READ_SIZE, 0);
            let read = match self.source.read(&mut self.buf[len..]).await {
                Ok(read) => read,
                Err(e) => {
                    self.buf.truncate(len);
                    return Err(e);
                }
            };
            self.buf.truncate(len + read);

            if read == 0 {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Consume exactly `n` bytes.
    async fn take(&mut self, n: usize, what: &str) -> Result<Vec<u8>> {
        if !self.fill(n).await? {
            return Err(ArchiveReadError::format(format!("truncated {what}")));
        }
        let bytes = self.buf[self.pos..self.pos + n].to_vec();
        self.pos += n;
        Ok(bytes)
    }

    /// Discard exactly `n` bytes without buffering more than one read.
    async fn skip(&mut self, n: u64, what: &str) -> Result<()> {
        let mut remaining = n;
        while remaining > 0 {
            if self.available() == 0 && !self.fill(1).await? {
                return Err(ArchiveReadError::format(format!("truncated {what}")));
            }
            let step = remaining.min(self.available() as u64);
            self.pos += step as usize;
            remaining -= step;
        }
        Ok(())
    }
}

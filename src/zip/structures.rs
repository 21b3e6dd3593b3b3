use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

use crate::error::{ArchiveReadError, Result};

/// ZIP compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Stored,
    Deflate,
    Unknown(u16),
}

impl CompressionMethod {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0 => CompressionMethod::Stored,
            8 => CompressionMethod::Deflate,
            _ => CompressionMethod::Unknown(value),
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            CompressionMethod::Stored => 0,
            CompressionMethod::Deflate => 8,
            CompressionMethod::Unknown(v) => *v,
        }
    }
}

/// Local File Header (LFH) - 30 bytes
pub const LFH_SIGNATURE: &[u8] = b"PK\x03\x04";
pub const LFH_SIZE: usize = 30;

/// Records that follow the last entry and end the entry stream
pub const CDFH_SIGNATURE: &[u8] = b"PK\x01\x02";
pub const EOCD_SIGNATURE: &[u8] = b"PK\x05\x06";
pub const ZIP64_EOCD_SIGNATURE: &[u8] = b"PK\x06\x06";

/// Optional signature in front of a data descriptor
pub const DATA_DESCRIPTOR_SIGNATURE: &[u8] = b"PK\x07\x08";

/// General purpose flag: sizes and CRC follow the entry data
pub const FLAG_DATA_DESCRIPTOR: u16 = 0x0008;

/// Extra field id of the ZIP64 extended information block
const ZIP64_EXTRA_ID: u16 = 0x0001;

/// Fixed-size part of a Local File Header
pub struct LocalFileHeader {
    pub version_needed: u16,
    pub flags: u16,
    pub compression_method: u16,
    pub last_mod_time: u16,
    pub last_mod_date: u16,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
}

impl LocalFileHeader {
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < LFH_SIZE || &data[0..4] != LFH_SIGNATURE {
            return Err(ArchiveReadError::format("invalid local file header"));
        }

        let mut cursor = Cursor::new(&data[4..]);

        Ok(Self {
            version_needed: cursor.read_u16::<LittleEndian>()?,
            flags: cursor.read_u16::<LittleEndian>()?,
            compression_method: cursor.read_u16::<LittleEndian>()?,
            last_mod_time: cursor.read_u16::<LittleEndian>()?,
            last_mod_date: cursor.read_u16::<LittleEndian>()?,
            crc32: cursor.read_u32::<LittleEndian>()?,
            compressed_size: cursor.read_u32::<LittleEndian>()?,
            uncompressed_size: cursor.read_u32::<LittleEndian>()?,
            file_name_length: cursor.read_u16::<LittleEndian>()?,
            extra_field_length: cursor.read_u16::<LittleEndian>()?,
        })
    }
}

/// One entry as announced by its Local File Header
#[derive(Debug, Clone)]
pub struct ZipEntry {
    pub name: String,
    pub compression_method: CompressionMethod,
    pub flags: u16,
    pub compressed_size: u64,
    pub uncompressed_size: u64,
    pub is_directory: bool,
    /// The header carried a ZIP64 extra field, so a trailing data
    /// descriptor uses 8-byte sizes
    pub zip64: bool,
}

impl ZipEntry {
    /// Build an entry from its header, raw file name and extra field
    pub fn from_local_header(header: &LocalFileHeader, name: &[u8], extra: &[u8]) -> Result<Self> {
        // Use lossy conversion to handle non-UTF8 filenames gracefully
        let name = String::from_utf8_lossy(name).into_owned();
        let is_directory = name.ends_with('/');

        let mut uncompressed_size = header.uncompressed_size as u64;
        let mut compressed_size = header.compressed_size as u64;
        let mut zip64 = false;

        let mut cursor = Cursor::new(extra);
        let extra_end = extra.len() as u64;

        while cursor.position() + 4 <= extra_end {
            let header_id = cursor.read_u16::<LittleEndian>()?;
            let field_size = cursor.read_u16::<LittleEndian>()? as u64;
            let field_end = (cursor.position() + field_size).min(extra_end);

            if header_id == ZIP64_EXTRA_ID {
                zip64 = true;
                // Fields are present only if the header field is 0xFFFFFFFF
                if header.uncompressed_size == u32::MAX && cursor.position() + 8 <= field_end {
                    uncompressed_size = cursor.read_u64::<LittleEndian>()?;
                }
                if header.compressed_size == u32::MAX && cursor.position() + 8 <= field_end {
                    compressed_size = cursor.read_u64::<LittleEndian>()?;
                }
            }

            cursor.set_position(field_end);
        }

        Ok(Self {
            name,
            compression_method: CompressionMethod::from_u16(header.compression_method),
            flags: header.flags,
            compressed_size,
            uncompressed_size,
            is_directory,
            zip64,
        })
    }

    /// Whether the entry's sizes are only known after its data
    pub fn has_data_descriptor(&self) -> bool {
        self.flags & FLAG_DATA_DESCRIPTOR != 0
    }

    /// Length of the data descriptor after its optional signature
    pub fn data_descriptor_len(&self) -> u64 {
        if self.zip64 { 4 + 8 + 8 } else { 4 + 4 + 4 }
    }
}

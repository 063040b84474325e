use super::ext::SliceExt;

/// Position of the pointer table offset field, the last field of the header.
const POINTER_TABLE_OFFSET: u64 = 0x42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub header_size: u32,
    pub pointer_table_offset: u32,
}

impl Header {
    /// Reads and validates the fixed size header at the start of the archive.
    pub fn read(data: &[u8]) -> Result<Self, super::Error> {
        let truncated = |_| super::Error::TruncatedHeader(data.len() as u64);
        let header_size = data.read_u32_at(0).map_err(truncated)?;
        if header_size != super::HEADER_SIZE {
            return Err(super::Error::UnsupportedFormat(header_size));
        }
        let pointer_table_offset = data.read_u32_at(POINTER_TABLE_OFFSET).map_err(truncated)?;
        Ok(Self {
            header_size,
            pointer_table_offset,
        })
    }
}

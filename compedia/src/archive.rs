use super::ext::SliceExt;
use super::{Header, PointerEntry};

/// A validated archive borrowed from its raw bytes, usually a memory map.
#[derive(Debug)]
pub struct Archive<'data> {
    data: &'data [u8],
    header: Header,
}

impl<'data> Archive<'data> {
    pub fn new(data: &'data [u8]) -> Result<Self, super::Error> {
        let header = Header::read(data)?;
        log::debug!(
            "header size {:#x}, pointer table at {:#x}, archive size {:#x}",
            header.header_size,
            header.pointer_table_offset,
            data.len()
        );
        if header.pointer_table_offset as u64 >= data.len() as u64 {
            log::warn!(
                "pointer table offset {:#x} is not inside the archive ({:#x} bytes), no entries to read",
                header.pointer_table_offset,
                data.len()
            );
        }
        Ok(Self { data, header })
    }

    pub fn header(&self) -> Header {
        self.header
    }

    /// Size of the archive in bytes
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Walks the pointer table from its start to the end of the archive.
    pub fn entries(&self) -> Entries<'data> {
        Entries {
            data: self.data,
            cursor: self.header.pointer_table_offset as u64,
            failed: false,
        }
    }

    /// Packed contents of `entry`, exactly as stored.
    pub fn read_file(&self, entry: &PointerEntry) -> Result<&'data [u8], super::Error> {
        self.data.range(entry.start as u64, entry.length as u64)
    }
}

/// Iterator over the pointer table.
///
/// The table carries no entry count, so iteration stops once the cursor
/// reaches the end of the archive. The first malformed entry is yielded as
/// an [`Error::MalformedEntry`](super::Error::MalformedEntry) and ends the
/// walk, since the following offsets can no longer be trusted.
#[derive(Debug, Clone)]
pub struct Entries<'data> {
    data: &'data [u8],
    cursor: u64,
    failed: bool,
}

impl Entries<'_> {
    /// Position of the next record to decode.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }
}

impl Iterator for Entries<'_> {
    type Item = Result<PointerEntry, super::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.data.len() as u64 {
            return None;
        }
        let offset = self.cursor;
        match PointerEntry::read(self.data, offset) {
            Ok(entry) => {
                log::debug!(
                    "entry at {offset:#x}: {entry} [{:#x}..{:#x}], stride {:#x}",
                    entry.start,
                    entry.end(),
                    entry.stride()
                );
                self.cursor += entry.stride();
                Some(Ok(entry))
            }
            Err(source) => {
                self.failed = true;
                Some(Err(super::Error::MalformedEntry {
                    offset,
                    source: Box::new(source),
                }))
            }
        }
    }
}

impl std::iter::FusedIterator for Entries<'_> {}

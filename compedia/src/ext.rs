use byteorder::{ByteOrder, LE};

/// Bounds checked reads against the raw archive bytes.
pub trait SliceExt {
    fn range(&self, offset: u64, len: u64) -> Result<&[u8], super::Error>;
    fn read_u32_at(&self, offset: u64) -> Result<u32, super::Error>;
    fn read_trimmed_str(
        &self,
        offset: u64,
        len: u32,
        field: &'static str,
    ) -> Result<&str, super::Error>;
}

impl SliceExt for [u8] {
    fn range(&self, offset: u64, len: u64) -> Result<&[u8], super::Error> {
        let size = self.len() as u64;
        offset
            .checked_add(len)
            .filter(|&end| end <= size)
            .map(|end| &self[offset as usize..end as usize])
            .ok_or(super::Error::OutOfBounds { offset, len, size })
    }

    fn read_u32_at(&self, offset: u64) -> Result<u32, super::Error> {
        Ok(LE::read_u32(self.range(offset, 4)?))
    }

    fn read_trimmed_str(
        &self,
        offset: u64,
        len: u32,
        field: &'static str,
    ) -> Result<&str, super::Error> {
        // stored length counts a trailing byte that is never part of the string
        let len = len.checked_sub(1).ok_or(super::Error::EmptyString(field))?;
        std::str::from_utf8(self.range(offset, len as u64)?).map_err(|source| {
            super::Error::InvalidEncoding {
                field,
                offset,
                source,
            }
        })
    }
}

use super::ext::SliceExt;
use std::path::PathBuf;

/// Size of the fixed part of a pointer entry, before the two strings.
pub const ENTRY_HEADER_SIZE: u64 = 0x18;

/// One record of the pointer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEntry {
    /// Position of this record in the archive
    pub offset: u64,
    pub unknown_0: u32,
    /// Absolute position of the packed data
    pub start: u32,
    pub unknown_8: u32,
    pub length: u32,
    /// Stored length of the file name, including its trailing byte
    pub name_len: u32,
    /// Stored length of the path, including its trailing byte
    pub path_len: u32,
    pub name: String,
    /// Drive qualified DOS directory, e.g. `C:\Games\Data`
    pub path: String,
    /// `path` made relative to the extraction root
    pub dir: PathBuf,
}

impl PointerEntry {
    pub fn read(data: &[u8], offset: u64) -> Result<Self, super::Error> {
        let unknown_0 = data.read_u32_at(offset)?;
        let start = data.read_u32_at(offset + 0x04)?;
        let unknown_8 = data.read_u32_at(offset + 0x08)?;
        let length = data.read_u32_at(offset + 0x0C)?;
        let name_len = data.read_u32_at(offset + 0x10)?;
        let path_len = data.read_u32_at(offset + 0x14)?;

        // the whole record has to fit, so the walk can only ever land on the end of the archive
        data.range(offset, Self::stride_for(name_len, path_len))?;

        let name_offset = offset + ENTRY_HEADER_SIZE;
        let name = data
            .read_trimmed_str(name_offset, name_len, "file name")?
            .to_owned();
        let path = data
            .read_trimmed_str(name_offset + name_len as u64, path_len, "path")?
            .to_owned();
        let dir = super::drive_relative_to_platform(&path)?;

        data.range(start as u64, length as u64)?;

        Ok(Self {
            offset,
            unknown_0,
            start,
            unknown_8,
            length,
            name_len,
            path_len,
            name,
            path,
            dir,
        })
    }

    fn stride_for(name_len: u32, path_len: u32) -> u64 {
        ENTRY_HEADER_SIZE + name_len as u64 + path_len as u64
    }

    /// Total size of this record, the distance to the next one.
    pub fn stride(&self) -> u64 {
        Self::stride_for(self.name_len, self.path_len)
    }

    /// Absolute position just past the packed data.
    pub fn end(&self) -> u64 {
        self.start as u64 + self.length as u64
    }

    /// Output path relative to the extraction root.
    pub fn relative_path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}

impl std::fmt::Display for PointerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.path.ends_with('\\') {
            true => write!(f, "{}{}", self.path, self.name),
            false => write!(f, "{}\\{}", self.path, self.name),
        }
    }
}

#[cfg(test)]
mod test {
    use super::PointerEntry;
    use crate::Error;
    use byteorder::{WriteBytesExt, LE};
    use std::path::Path;

    fn record(fields: [u32; 6], strings: &[u8]) -> Vec<u8> {
        let mut data = vec![];
        for field in fields {
            data.write_u32::<LE>(field).unwrap();
        }
        data.extend_from_slice(strings);
        data
    }

    #[test]
    fn test_read_entry() {
        let mut data = vec![0xAA, 0xBB, 0xCC];
        data.extend(record(
            [0xdead, 0, 0xbeef, 3, 10, 21],
            b"intro.wav\0C:\\Games\\Data\\Sounds\0",
        ));
        let entry = PointerEntry::read(&data, 3).unwrap();
        assert_eq!(entry.offset, 3);
        assert_eq!(entry.unknown_0, 0xdead);
        assert_eq!(entry.unknown_8, 0xbeef);
        assert_eq!(entry.start, 0);
        assert_eq!(entry.length, 3);
        assert_eq!(entry.end(), 3);
        assert_eq!(entry.name, "intro.wav");
        assert_eq!(entry.path, "C:\\Games\\Data\\Sounds");
        assert_eq!(entry.stride(), 0x18 + 10 + 21);
        assert_eq!(entry.offset + entry.stride(), data.len() as u64);
        assert_eq!(
            entry.relative_path(),
            Path::new("Games")
                .join("Data")
                .join("Sounds")
                .join("intro.wav")
        );
        assert_eq!(entry.to_string(), "C:\\Games\\Data\\Sounds\\intro.wav");
    }

    #[test]
    fn test_truncated_fields() {
        let data = record([0, 0, 0, 0, 6, 5], b"");
        assert!(matches!(
            PointerEntry::read(&data[..0x13], 0),
            Err(Error::OutOfBounds { offset: 0x10, .. })
        ));
    }

    #[test]
    fn test_record_past_end() {
        // the final byte of the path is never decoded but must still be present
        let data = record([0, 0, 0, 0, 6, 5], b"a.bin\0C:\\x");
        assert!(matches!(
            PointerEntry::read(&data, 0),
            Err(Error::OutOfBounds { offset: 0, len: 35, size: 34 })
        ));
    }

    #[test]
    fn test_payload_past_end() {
        let data = record([0, 0x20, 0, 0x10, 6, 5], b"a.bin\0C:\\x\0");
        assert!(matches!(
            PointerEntry::read(&data, 0),
            Err(Error::OutOfBounds {
                offset: 0x20,
                len: 0x10,
                ..
            })
        ));
    }

    #[test]
    fn test_bad_strings() {
        let data = record([0, 0, 0, 0, 0, 5], b"C:\\x\0");
        assert!(matches!(
            PointerEntry::read(&data, 0),
            Err(Error::EmptyString("file name"))
        ));
        let data = record([0, 0, 0, 0, 3, 5], b"\xff\xfe\0C:\\x\0");
        assert!(matches!(
            PointerEntry::read(&data, 0),
            Err(Error::InvalidEncoding {
                field: "file name",
                ..
            })
        ));
        let data = record([0, 0, 0, 0, 6, 3], b"a.bin\0xy\0");
        assert!(matches!(
            PointerEntry::read(&data, 0),
            Err(Error::NotDriveQualified(p)) if p == "xy"
        ));
    }
}

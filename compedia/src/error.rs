use std::path::PathBuf;

#[derive(thiserror::Error)]
pub enum Error {
    // std errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // crate errors
    #[error("File {0} does not exist")]
    MissingSource(String),

    #[error("archive is {0} bytes, too short for the {:#x} byte header", super::HEADER_SIZE)]
    TruncatedHeader(u64),

    #[error(
        "found header size of {0:#x} instead of {:#x}, unsupported file format (some Compedia games use a different archive format)",
        super::HEADER_SIZE
    )]
    UnsupportedFormat(u32),

    #[error("read of {len} bytes at {offset:#x} runs past the end of the archive ({size:#x} bytes)")]
    OutOfBounds { offset: u64, len: u64, size: u64 },

    #[error("{field} at {offset:#x} is not valid utf8: {source}")]
    InvalidEncoding {
        field: &'static str,
        offset: u64,
        source: std::str::Utf8Error,
    },

    #[error("{0} has a stored length of zero")]
    EmptyString(&'static str),

    #[error("path \"{0}\" has no drive prefix")]
    NotDriveQualified(String),

    #[error("malformed pointer entry at {offset:#x}: {source}")]
    MalformedEntry { offset: u64, source: Box<Error> },

    #[error("entry at {0:#x} has an empty file name")]
    EmptyFileName(u64),

    #[error("Attempted to write to \"{0}\" which outside of output directory")]
    WriteOutsideOutput(String),

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

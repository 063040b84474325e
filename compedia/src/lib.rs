//! Reader for the pointer-table archives shipped on Compedia CD-ROM titles.
//!
//! An archive is a flat run of raw file contents followed by a table of
//! variable-length pointer entries that runs to the end of the file. There is
//! no compression, encryption or checksum; every entry is just a byte range
//! plus the DOS path it was packed from.
//!
//! ```no_run
//! # fn main() -> Result<(), compedia::Error> {
//! let data = std::fs::read("DATA.CMP")?;
//! let archive = compedia::Archive::new(&data)?;
//! for entry in archive.entries() {
//!     let entry = entry?;
//!     println!("{entry}: {} bytes", entry.length);
//! }
//! # Ok(())
//! # }
//! ```
mod archive;
mod entry;
mod error;
mod ext;
mod extract;
mod header;
mod path;

pub use {
    archive::*,
    entry::{PointerEntry, ENTRY_HEADER_SIZE},
    error::*,
    extract::*,
    header::Header,
    path::drive_relative_to_platform,
};

/// Value of the header size field for the supported archive layout
pub const HEADER_SIZE: u32 = 0x46;

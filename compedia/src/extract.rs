use std::fs;
use std::path::{Component, Path};

use path_clean::PathClean;

use super::{Archive, PointerEntry};

/// Reported to the caller while [`Archive::extract_all`] runs.
#[derive(Debug)]
pub enum Progress<'a> {
    /// About to write the file at this path
    Exporting(&'a Path),
    /// Writing the file failed, extraction carries on with the next entry
    Failed {
        path: &'a Path,
        error: &'a super::Error,
    },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub failed: usize,
}

impl Archive<'_> {
    /// Writes every entry below `output`, creating directories as needed and
    /// overwriting existing files.
    ///
    /// A file that cannot be written is reported through `progress` and
    /// counted in [`Summary::failed`]. A malformed pointer table aborts the
    /// run; files written before that point are left in place.
    pub fn extract_all(
        &self,
        output: &Path,
        mut progress: impl FnMut(Progress<'_>),
    ) -> Result<Summary, super::Error> {
        let mut summary = Summary::default();
        for entry in self.entries() {
            let entry = entry?;
            let relative = entry.relative_path().clean();
            let path = output.join(&relative);
            progress(Progress::Exporting(&path));
            match self.write_entry(&entry, &relative, &path) {
                Ok(()) => summary.written += 1,
                Err(error) => {
                    log::warn!("skipping entry at {:#x}: {error}", entry.offset);
                    summary.failed += 1;
                    progress(Progress::Failed {
                        path: &path,
                        error: &error,
                    });
                }
            }
        }
        Ok(summary)
    }

    fn write_entry(
        &self,
        entry: &PointerEntry,
        relative: &Path,
        path: &Path,
    ) -> Result<(), super::Error> {
        if entry.name.is_empty() {
            return Err(super::Error::EmptyFileName(entry.offset));
        }
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(super::Error::WriteOutsideOutput(
                path.to_string_lossy().into_owned(),
            ));
        }
        let data = self.read_file(entry)?;
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, data)
        };
        write().map_err(|source| super::Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

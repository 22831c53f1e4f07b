//! Memory-mapped module images.
//!
//! Linked modules (`.netmodule` files) and linked resource files are usually on disk next to
//! the compilation output. Mapping them avoids reading a whole module just to decode a handful
//! of ManifestResource rows, and the mapping is shared by the resource reader and the file
//! hasher.

use super::Backend;
use crate::{
    Error::{Error, FileError, OutOfBounds},
    Result,
};

use memmap2::Mmap;
use std::{fs, path::Path};

/// Module image backed by a read-only memory mapping.
#[derive(Debug)]
pub struct Physical {
    data: Mmap,
}

impl Physical {
    /// Maps the file at `path`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file can't be opened, or
    /// [`crate::Error::Error`] if the mapping fails.
    pub fn new(path: impl AsRef<Path>) -> Result<Physical> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(error) => return Err(FileError(error)),
        };

        // The mapping is read-only and lives as long as `Physical`; external truncation
        // of a module while a compilation is running is not supported.
        let mmap = match unsafe { Mmap::map(&file) } {
            Ok(mmap) => mmap,
            Err(error) => return Err(Error(error.to_string())),
        };

        Ok(Physical { data: mmap })
    }
}

impl Backend for Physical {
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        let Some(offset_end) = offset.checked_add(len) else {
            return Err(OutOfBounds);
        };

        if offset_end > self.data.len() {
            return Err(OutOfBounds);
        }

        Ok(&self.data[offset..offset_end])
    }

    fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn maps_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"module-bytes").unwrap();
        file.flush().unwrap();

        let physical = Physical::new(file.path()).unwrap();
        assert_eq!(physical.len(), 12);
        assert_eq!(physical.data(), b"module-bytes");
        assert_eq!(physical.data_slice(7, 5).unwrap(), b"bytes");
        assert!(physical.data_slice(10, 5).is_err());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Physical::new(dir.path().join("missing.netmodule"));
        assert!(matches!(result, Err(FileError(_))));
    }
}

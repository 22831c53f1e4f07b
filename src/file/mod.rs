//! Byte-level access to module images and linked resource files.
//!
//! The emitter never parses a full PE file; it only needs raw bytes for two things: hashing a
//! linked module or resource file for the File table, and decoding the ManifestResource rows
//! of a linked module when its embedded resources are pulled into the assembly manifest.
//!
//! # Key Components
//!
//! - [`Image`] - Shared, immutable byte source for one module or resource file
//! - [`Backend`] - Storage abstraction (owned memory or a memory mapping)
//! - [`io`] - Bounds-checked little-endian readers
//!
//! # Examples
//!
//! ```rust
//! use dotemit::file::Image;
//!
//! let image = Image::from_mem(vec![0x4D, 0x5A, 0x90, 0x00])?;
//! assert_eq!(image.len(), 4);
//! assert_eq!(image.data_slice(0, 2)?, b"MZ");
//! # Ok::<(), dotemit::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! [`Image`] is immutable after construction and is shared between the resource reader, the
//! file hasher and any number of emission threads.

pub mod io;

mod memory;
mod physical;

use std::{fmt, path::Path};

use crate::{Error::Empty, Result};
pub use memory::Memory;
pub use physical::Physical;

/// Storage abstraction for image bytes.
pub trait Backend: Send + Sync {
    /// Returns `len` bytes starting at `offset`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the range exceeds the data.
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]>;

    /// Returns the complete data.
    fn data(&self) -> &[u8];

    /// Returns the data length in bytes.
    fn len(&self) -> usize;
}

/// An immutable module or resource file image.
pub struct Image {
    backend: Box<dyn Backend>,
}

impl Image {
    /// Creates an image from an owned buffer.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] if `data` is empty.
    pub fn from_mem(data: Vec<u8>) -> Result<Image> {
        if data.is_empty() {
            return Err(Empty);
        }

        Ok(Image {
            backend: Box::new(Memory::new(data)),
        })
    }

    /// Memory-maps the file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file can't be opened or mapped, or [`crate::Error::Empty`]
    /// if it has no content.
    pub fn from_file(path: &Path) -> Result<Image> {
        let physical = Physical::new(path)?;
        if physical.len() == 0 {
            return Err(Empty);
        }

        Ok(Image {
            backend: Box::new(physical),
        })
    }

    /// Returns the complete image.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.backend.data()
    }

    /// Returns `len` bytes starting at `offset`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the range exceeds the image.
    pub fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        self.backend.data_slice(offset, len)
    }

    /// Returns the image size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Returns `true` if the image holds no bytes. Never the case for a constructed image.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backend.len() == 0
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image").field("len", &self.len()).finish()
    }
}

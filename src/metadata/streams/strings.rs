//! The `#Strings` heap of a linked module.
//!
//! Null-terminated UTF-8 strings addressed by byte offset. Offset 0 is always the empty string,
//! a heap whose first byte isn't zero is rejected as malformed.

use std::{ffi::CStr, str};

use crate::{Error::OutOfBounds, Result};

/// Read-only view over a `#Strings` heap.
///
/// ```rust
/// use dotemit::metadata::streams::Strings;
///
/// let heap = [0x00, b'a', b'.', b'r', b'e', b's', b'x', 0x00];
/// let strings = Strings::from(&heap)?;
/// assert_eq!(strings.get(1)?, "a.resx");
/// # Ok::<(), dotemit::Error>(())
/// ```
pub struct Strings<'a> {
    data: &'a [u8],
}

impl<'a> Strings<'a> {
    /// Wraps `data` as a strings heap.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the heap is empty or doesn't start with a
    /// null byte.
    pub fn from(data: &'a [u8]) -> Result<Strings<'a>> {
        if data.first() != Some(&0) {
            return Err(malformed_error!("Provided #Strings heap is empty"));
        }

        Ok(Strings { data })
    }

    /// Returns the string starting at `index`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] for an index past the heap, or
    /// [`crate::Error::Malformed`] if the string is unterminated or not UTF-8.
    pub fn get(&self, index: usize) -> Result<&'a str> {
        if index >= self.data.len() {
            return Err(OutOfBounds);
        }

        CStr::from_bytes_until_nul(&self.data[index..])
            .ok()
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| malformed_error!("Invalid string at index - {}", index))
    }

    /// Heap size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false` for a constructed heap.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

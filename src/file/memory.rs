use super::Backend;
use crate::{Error::OutOfBounds, Result};

/// Module image held in an owned byte buffer.
///
/// Used for images the compiler produced or loaded itself, and by tests.
#[derive(Debug)]
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Wraps an owned buffer.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Memory {
        Memory { data }
    }
}

impl Backend for Memory {
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
        self.data.as_slice()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices() {
        let memory = Memory::new(vec![1, 2, 3, 4, 5]);

        assert_eq!(memory.len(), 5);
        assert_eq!(memory.data_slice(1, 3).unwrap(), &[2, 3, 4]);
        assert_eq!(memory.data_slice(5, 0).unwrap(), &[] as &[u8]);
        assert!(memory.data_slice(4, 2).is_err());
        assert!(memory.data_slice(usize::MAX, 2).is_err());
    }
}

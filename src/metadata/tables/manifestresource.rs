//! Raw ManifestResource rows, as stored in a linked module's metadata.
//!
//! Only reading is needed here: when a linked module is merged into an assembly, the
//! module's own embedded resources have to be listed in the assembly manifest with their
//! original offsets. [`ManifestResourceRaw::row_read`] decodes one row, heap and coded indexes
//! stay unresolved.
//!
//! # Row layout (§II.22.24)
//!
//! | Column         | Size                      |
//! |----------------|---------------------------|
//! | Offset         | 4                         |
//! | Flags          | 4                         |
//! | Name           | 2 or 4 (`#Strings` index) |
//! | Implementation | 2 or 4 (coded index)      |

use bitflags::bitflags;

use crate::{
    file::io::{read_le_at, read_le_at_dyn},
    metadata::token::Token,
    Result,
};

bitflags! {
    #[derive(PartialEq, Eq, Debug, Clone, Copy)]
    /// All possible flags for `ManifestResourceAttributes`, §II.23.1.9
    pub struct ManifestResourceAttributes : u32 {
        /// The Resource is exported from the Assembly
        const PUBLIC = 0x0001;
        /// The Resource is private to the Assembly
        const PRIVATE = 0x0002;
    }
}

/// Number of tag bits of the `Implementation` coded index (File, AssemblyRef, ExportedType)
const IMPLEMENTATION_TAG_BITS: u32 = 2;

/// Index widths of the ManifestResource table inside one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManifestResourceLayout {
    /// `#Strings` heap is larger than 64k and uses 4-byte indexes
    pub large_strings: bool,
    /// Any table the `Implementation` coded index can reference exceeds 2^14 rows
    pub large_implementation: bool,
}

impl ManifestResourceLayout {
    /// Size of one row in bytes.
    #[must_use]
    #[rustfmt::skip]
    pub fn row_size(&self) -> usize {
        /* offset_field */   4 +
        /* flags */          4 +
        /* name */           if self.large_strings { 4 } else { 2 } +
        /* implementation */ if self.large_implementation { 4 } else { 2 }
    }
}

/// One undecoded row of the ManifestResource table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestResourceRaw {
    /// `RowID`
    pub rid: u32,
    /// Token
    pub token: Token,
    /// Offset of the row inside the table data
    pub offset: usize,
    /// Offset of the resource data inside the module's resource section
    pub offset_field: u32,
    /// a 4-byte bitmask of type `ManifestResourceAttributes`
    pub flags: u32,
    /// an index into the String heap
    pub name: u32,
    /// an `Implementation` coded index, zero when the resource is embedded in this module
    pub implementation: u32,
}

impl ManifestResourceRaw {
    /// Decodes the row with id `rid` at `offset`, advancing the offset past the row.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the row is truncated.
    pub fn row_read(
        data: &[u8],
        offset: &mut usize,
        rid: u32,
        layout: ManifestResourceLayout,
    ) -> Result<Self> {
        Ok(ManifestResourceRaw {
            rid,
            token: Token::new(0x2800_0000 + rid),
            offset: *offset,
            offset_field: read_le_at::<u32>(data, offset)?,
            flags: read_le_at::<u32>(data, offset)?,
            name: read_le_at_dyn(data, offset, layout.large_strings)?,
            implementation: read_le_at_dyn(data, offset, layout.large_implementation)?,
        })
    }

    /// Returns `true` if the resource data lives in the module itself.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.implementation >> IMPLEMENTATION_TAG_BITS == 0
    }

    /// Resolved visibility flags.
    #[must_use]
    pub fn attributes(&self) -> ManifestResourceAttributes {
        ManifestResourceAttributes::from_bits_truncate(self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn crafted_short() {
        let data = vec![
            0x01, 0x01, 0x01, 0x01, // offset_field
            0x01, 0x00, 0x00, 0x00, // flags
            0x03, 0x03, // name
            0x04, 0x00, // implementation (tag 0 = File, index = 1)
        ];

        let layout = ManifestResourceLayout::default();
        assert_eq!(layout.row_size(), 12);

        let mut offset = 0;
        let row = ManifestResourceRaw::row_read(&data, &mut offset, 1, layout).unwrap();

        assert_eq!(offset, 12);
        assert_eq!(row.rid, 1);
        assert_eq!(row.token.value(), 0x2800_0001);
        assert_eq!(row.offset_field, 0x0101_0101);
        assert_eq!(row.attributes(), ManifestResourceAttributes::PUBLIC);
        assert_eq!(row.name, 0x0303);
        assert_eq!(row.implementation, 0x0004);
        assert!(!row.is_embedded());
    }

    #[test]
    fn crafted_long() {
        let data = vec![
            0x10, 0x00, 0x00, 0x00, // offset_field
            0x02, 0x00, 0x00, 0x00, // flags
            0x03, 0x03, 0x03, 0x03, // name
            0x00, 0x00, 0x00, 0x00, // implementation (null, embedded)
        ];

        let layout = ManifestResourceLayout {
            large_strings: true,
            large_implementation: true,
        };
        assert_eq!(layout.row_size(), 16);

        let mut offset = 0;
        let row = ManifestResourceRaw::row_read(&data, &mut offset, 7, layout).unwrap();

        assert_eq!(row.token, Token::new(0x2800_0007));
        assert_eq!(row.offset_field, 0x10);
        assert_eq!(row.attributes(), ManifestResourceAttributes::PRIVATE);
        assert_eq!(row.name, 0x0303_0303);
        assert!(row.is_embedded());
    }

    #[test]
    fn truncated() {
        let data = vec![0x00; 10];
        let mut offset = 0;
        let result = ManifestResourceRaw::row_read(
            &data,
            &mut offset,
            1,
            ManifestResourceLayout::default(),
        );
        assert!(matches!(result, Err(Error::OutOfBounds)));
    }
}

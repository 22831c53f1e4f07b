use crate::{
    file::Image,
    metadata::tables::{ManifestResourceAttributes, ManifestResourceLayout},
    symbols::{ManifestLocation, ModuleSymbol, ModuleSymbolRc},
};

/// Offset of the ManifestResource rows inside a generated module image
const TABLE_OFFSET: usize = 16;

/// One ManifestResource row of a generated module image.
pub struct ResourceRow {
    pub name: String,
    pub is_public: bool,
    pub offset: u32,
    /// Raw `Implementation` coded index, 0 for resources embedded in the module
    pub implementation: u16,
}

impl ResourceRow {
    pub fn embedded(name: &str, is_public: bool, offset: u32) -> Self {
        ResourceRow {
            name: name.to_string(),
            is_public,
            offset,
            implementation: 0,
        }
    }

    // File row 1, tag 0
    pub fn external(name: &str) -> Self {
        ResourceRow {
            name: name.to_string(),
            is_public: true,
            offset: 0,
            implementation: 1 << 2,
        }
    }
}

// Helper function to build a module image with a short-index ManifestResource table followed
// by its `#Strings` heap. The first name always lands at heap index 1.
pub fn linked_module_image(rows: &[ResourceRow]) -> (Vec<u8>, ManifestLocation) {
    let layout = ManifestResourceLayout::default();

    let mut strings = vec![0u8];
    let mut table = Vec::with_capacity(rows.len() * layout.row_size());
    for row in rows {
        let name_index = u16::try_from(strings.len()).unwrap();
        strings.extend_from_slice(row.name.as_bytes());
        strings.push(0);

        let flags = if row.is_public {
            ManifestResourceAttributes::PUBLIC
        } else {
            ManifestResourceAttributes::PRIVATE
        };

        table.extend_from_slice(&row.offset.to_le_bytes());
        table.extend_from_slice(&flags.bits().to_le_bytes());
        table.extend_from_slice(&name_index.to_le_bytes());
        table.extend_from_slice(&row.implementation.to_le_bytes());
    }

    let mut image = vec![0u8; TABLE_OFFSET];
    image[0] = 0x4D;
    image[1] = 0x5A;
    image.extend_from_slice(&table);
    let strings_offset = image.len();
    image.extend_from_slice(&strings);

    let manifest = ManifestLocation {
        table_offset: TABLE_OFFSET,
        row_count: u32::try_from(rows.len()).unwrap(),
        layout,
        strings_offset,
        strings_size: strings.len(),
    };

    (image, manifest)
}

// Helper function to create a linked module holding `rows`
pub fn linked_module(name: &str, rows: &[ResourceRow]) -> ModuleSymbolRc {
    let (bytes, manifest) = linked_module_image(rows);
    ModuleSymbol::linked(name, Image::from_mem(bytes).unwrap(), manifest)
}

// Helper function to create a linked module whose manifest table lies past the end of its image
pub fn malformed_module(name: &str) -> ModuleSymbolRc {
    let manifest = ManifestLocation {
        table_offset: 0x1000,
        row_count: 1,
        layout: ManifestResourceLayout::default(),
        strings_offset: 0,
        strings_size: 1,
    };

    ModuleSymbol::linked(name, Image::from_mem(vec![0u8; 8]).unwrap(), manifest)
}

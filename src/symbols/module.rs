//! Modules of an assembly.
//!
//! Module 0 is the primary module built from source and holds the compilation's types. Every
//! other module was compiled separately (a `.netmodule`) and is linked into the assembly:
//! the emitter never rewrites it, it only lists the file in the manifest, hashes it, and lifts
//! its embedded resources into the assembly's ManifestResource table.

use std::{fmt, sync::Arc};

use crate::{
    file::Image,
    metadata::{
        resources::EmbeddedResource,
        streams::Strings,
        tables::{ManifestResourceLayout, ManifestResourceRaw},
    },
    symbols::NamedTypeRc,
    Error::OutOfBounds,
    Result,
};

/// A reference-counted pointer to a [`ModuleSymbol`]
pub type ModuleSymbolRc = Arc<ModuleSymbol>;

/// Where the manifest data of a linked module lives inside its image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManifestLocation {
    /// Offset of the first ManifestResource row
    pub table_offset: usize,
    /// Number of ManifestResource rows
    pub row_count: u32,
    /// Index sizes of the rows
    pub layout: ManifestResourceLayout,
    /// Offset of the `#Strings` heap
    pub strings_offset: usize,
    /// Size of the `#Strings` heap
    pub strings_size: usize,
}

enum ModuleContent {
    Primary { types: Vec<NamedTypeRc> },
    Linked { image: Image, manifest: ManifestLocation },
}

/// A module of the assembly being emitted.
pub struct ModuleSymbol {
    name: String,
    content: ModuleContent,
}

impl ModuleSymbol {
    /// The primary module, holding the compilation's own types.
    pub fn primary(name: impl Into<String>, types: Vec<NamedTypeRc>) -> ModuleSymbolRc {
        Arc::new(ModuleSymbol {
            name: name.into(),
            content: ModuleContent::Primary { types },
        })
    }

    /// A linked module backed by `image`.
    pub fn linked(name: impl Into<String>, image: Image, manifest: ManifestLocation) -> ModuleSymbolRc {
        Arc::new(ModuleSymbol {
            name: name.into(),
            content: ModuleContent::Linked { image, manifest },
        })
    }

    /// File name of the module, as written to the File table.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` for the primary module.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        matches!(self.content, ModuleContent::Primary { .. })
    }

    /// Types declared in the module; linked modules expose none.
    #[must_use]
    pub fn types(&self) -> &[NamedTypeRc] {
        match &self.content {
            ModuleContent::Primary { types } => types,
            ModuleContent::Linked { .. } => &[],
        }
    }

    /// The image of a linked module.
    #[must_use]
    pub fn image(&self) -> Option<&Image> {
        match &self.content {
            ModuleContent::Primary { .. } => None,
            ModuleContent::Linked { image, .. } => Some(image),
        }
    }

    /// Reads the resources embedded in this module, in table order.
    ///
    /// Rows whose `Implementation` points elsewhere (another file or assembly) are skipped.
    /// The primary module has no image and yields nothing.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] or [`crate::Error::Malformed`] if the manifest
    /// location doesn't fit the image or the rows reference invalid strings.
    pub fn embedded_resources(&self) -> Result<Vec<EmbeddedResource>> {
        let ModuleContent::Linked { image, manifest } = &self.content else {
            return Ok(Vec::new());
        };

        let strings = Strings::from(image.data_slice(manifest.strings_offset, manifest.strings_size)?)?;

        let table_size = (manifest.row_count as usize)
            .checked_mul(manifest.layout.row_size())
            .ok_or(OutOfBounds)?;
        let table = image.data_slice(manifest.table_offset, table_size)?;

        let mut resources = Vec::with_capacity(manifest.row_count as usize);
        let mut offset = 0;
        for rid in 1..=manifest.row_count {
            let row = ManifestResourceRaw::row_read(table, &mut offset, rid, manifest.layout)?;
            if !row.is_embedded() {
                continue;
            }

            resources.push(EmbeddedResource {
                name: strings.get(row.name as usize)?.to_string(),
                flags: row.attributes(),
                offset: row.offset_field,
            });
        }

        Ok(resources)
    }
}

impl fmt::Debug for ModuleSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            ModuleContent::Primary { types } => f
                .debug_struct("ModuleSymbol")
                .field("name", &self.name)
                .field("types", &types.len())
                .finish(),
            ModuleContent::Linked { image, manifest } => f
                .debug_struct("ModuleSymbol")
                .field("name", &self.name)
                .field("image", image)
                .field("manifest", manifest)
                .finish(),
        }
    }
}

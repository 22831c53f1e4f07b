//! Rows of the assembly's ManifestResource table.
//!
//! Own resources come from the source assembly's descriptions; resources embedded in linked
//! modules are harvested by [`crate::emit::AssemblyBuilder`] and keep their module's offset.

use std::fmt;

use crate::{
    emit::files::FileReferenceRc,
    metadata::{
        resources::{EmbeddedResource, ResourceData, ResourceDescription},
        tables::ManifestResourceAttributes,
    },
};

/// A ManifestResource row of the assembly being emitted.
///
/// Three shapes occur:
/// - embedded in the manifest module: `data` is set, no `external_file`
/// - linked as a separate file: `external_file` is set, `offset` is 0
/// - embedded in a linked module: `external_file` is the module, `offset` is the position
///   inside that module's resources, unchanged from the module's own manifest
#[derive(Clone)]
pub struct ManagedResource {
    /// Manifest name
    pub name: String,
    /// Exported from the assembly
    pub is_public: bool,
    /// Contents to embed into the manifest module
    pub data: Option<ResourceData>,
    /// File holding the resource, if it isn't in the manifest module
    pub external_file: Option<FileReferenceRc>,
    /// Offset inside the resources of the holding module
    pub offset: u32,
}

impl ManagedResource {
    /// An own resource. `file` must be the file reference of a linked resource.
    #[must_use]
    pub fn from_description(resource: &ResourceDescription, file: Option<FileReferenceRc>) -> Self {
        ManagedResource {
            name: resource.name.clone(),
            is_public: resource.is_public,
            data: resource.is_embedded.then(|| resource.data.clone()),
            external_file: file,
            offset: 0,
        }
    }

    /// A resource embedded in the linked module `file`.
    #[must_use]
    pub fn from_linked_module(resource: EmbeddedResource, file: FileReferenceRc) -> Self {
        ManagedResource {
            is_public: resource.is_public(),
            name: resource.name,
            data: None,
            external_file: Some(file),
            offset: resource.offset,
        }
    }

    /// `Flags` column of the row.
    #[must_use]
    pub fn attributes(&self) -> ManifestResourceAttributes {
        if self.is_public {
            ManifestResourceAttributes::PUBLIC
        } else {
            ManifestResourceAttributes::PRIVATE
        }
    }
}

impl fmt::Debug for ManagedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedResource")
            .field("name", &self.name)
            .field("is_public", &self.is_public)
            .field(
                "external_file",
                &self.external_file.as_ref().map(|file| file.file_name()),
            )
            .field("offset", &self.offset)
            .finish()
    }
}

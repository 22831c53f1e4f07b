//! Entries of the assembly's File table.
//!
//! A multi-file assembly lists every file besides the manifest module: linked modules, which
//! contain metadata, and linked resources, which don't. Each entry carries a hash of the file
//! contents computed with the assembly's declared algorithm.

use std::{fmt, sync::Arc};

use crate::{
    metadata::{
        identity::{hash_data, is_supported_algorithm},
        resources::{ResourceData, ResourceDescription},
        tables::FileAttributes,
    },
    symbols::ModuleSymbolRc,
    Error, Result,
};

/// A reference-counted pointer to a [`FileReference`]
pub type FileReferenceRc = Arc<FileReference>;

/// One file of a multi-file assembly.
pub enum FileReference {
    /// A linked module
    Module(ModuleSymbolRc),
    /// A linked resource file
    Resource {
        /// File name as written to the File table
        file_name: String,
        /// Contents, read when hashing
        data: ResourceData,
    },
}

impl FileReference {
    /// File reference of a linked resource.
    #[must_use]
    pub fn resource(resource: &ResourceDescription) -> Self {
        FileReference::Resource {
            file_name: resource.file_name().to_string(),
            data: resource.data.clone(),
        }
    }

    /// File name as written to the File table.
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            FileReference::Module(module) => module.name(),
            FileReference::Resource { file_name, .. } => file_name,
        }
    }

    /// Returns `true` for modules.
    #[must_use]
    pub fn has_metadata(&self) -> bool {
        matches!(self, FileReference::Module(_))
    }

    /// `Flags` column of the File row.
    #[must_use]
    pub fn attributes(&self) -> u32 {
        if self.has_metadata() {
            FileAttributes::CONTAINS_META_DATA
        } else {
            FileAttributes::CONTAINS_NO_META_DATA
        }
    }

    /// Hash of the file contents with the `AssemblyHashAlgorithm` `algorithm`.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedHashAlgorithm`] before touching the file if the algorithm is
    /// unknown, or [`Error::FileError`] if a resource file can't be read.
    pub fn hash_value(&self, algorithm: u32) -> Result<Vec<u8>> {
        if !is_supported_algorithm(algorithm) {
            return Err(Error::UnsupportedHashAlgorithm(algorithm));
        }

        match self {
            FileReference::Module(module) => match module.image() {
                Some(image) => hash_data(algorithm, image.data()),
                None => Err(malformed_error!(
                    "Module '{}' has no image to hash",
                    module.name()
                )),
            },
            FileReference::Resource { data, .. } => hash_data(algorithm, &data.read()?),
        }
    }
}

impl fmt::Debug for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileReference")
            .field("file_name", &self.file_name())
            .field("has_metadata", &self.has_metadata())
            .finish()
    }
}

/// A File table row, ready for the table writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    /// `FileAttributes`
    pub flags: u32,
    /// File name
    pub name: String,
    /// Hash of the contents, empty if it couldn't be computed
    pub hash_value: Vec<u8>,
}

//! Resources of an assembly and of its linked modules.
//!
//! Resources declared by the compilation are [`ResourceDescription`]s: a name, a visibility and
//! a way to get at the bytes. Embedded ones are copied into the assembly image, the others are
//! linked: they stay separate files and show up in the File table. Modules linked into the
//! assembly bring their own embedded resources along, read back as [`EmbeddedResource`]s from
//! the module's ManifestResource table.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{metadata::tables::ManifestResourceAttributes, Result};

/// Source of a resource's bytes.
#[derive(Clone)]
pub enum ResourceData {
    /// Bytes held in memory
    Bytes(Arc<[u8]>),
    /// A file read on demand
    File(PathBuf),
}

impl ResourceData {
    /// Reads the complete resource.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if a file-backed resource can't be read.
    pub fn read(&self) -> Result<Arc<[u8]>> {
        match self {
            ResourceData::Bytes(bytes) => Ok(bytes.clone()),
            ResourceData::File(path) => Ok(Arc::from(std::fs::read(path)?)),
        }
    }
}

impl fmt::Debug for ResourceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceData::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            ResourceData::File(path) => write!(f, "File({})", path.display()),
        }
    }
}

/// A resource declared by the compilation (`/resource` or `/linkresource`).
#[derive(Debug, Clone)]
pub struct ResourceDescription {
    /// Manifest name
    pub name: String,
    /// Exported from the assembly
    pub is_public: bool,
    /// Copied into the image rather than linked as a separate file
    pub is_embedded: bool,
    /// File name of a linked resource, as written to the File table
    pub file_name: Option<String>,
    /// Where the bytes come from
    pub data: ResourceData,
}

impl ResourceDescription {
    /// An embedded resource with in-memory content.
    pub fn embedded(name: impl Into<String>, is_public: bool, bytes: impl Into<Arc<[u8]>>) -> Self {
        ResourceDescription {
            name: name.into(),
            is_public,
            is_embedded: true,
            file_name: None,
            data: ResourceData::Bytes(bytes.into()),
        }
    }

    /// A linked resource backed by the file at `path`. The File table entry uses the file name
    /// component of `path`.
    pub fn linked(name: impl Into<String>, is_public: bool, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        ResourceDescription {
            name: name.into(),
            is_public,
            is_embedded: false,
            file_name: path
                .file_name()
                .map(|file_name| file_name.to_string_lossy().into_owned()),
            data: ResourceData::File(path.to_path_buf()),
        }
    }

    /// File name used for the File table: the explicit file name, or the resource name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(&self.name)
    }

    /// Manifest visibility flags.
    #[must_use]
    pub fn attributes(&self) -> ManifestResourceAttributes {
        if self.is_public {
            ManifestResourceAttributes::PUBLIC
        } else {
            ManifestResourceAttributes::PRIVATE
        }
    }
}

/// An embedded resource of a linked module, as stored in the module's manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedResource {
    /// Manifest name
    pub name: String,
    /// Visibility flags
    pub flags: ManifestResourceAttributes,
    /// Offset of the resource inside the module's resource section
    pub offset: u32,
}

impl EmbeddedResource {
    /// Returns `true` if the resource is exported.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.flags.contains(ManifestResourceAttributes::PUBLIC)
    }
}

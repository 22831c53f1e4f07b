//! Writer-facing emission model.
//!
//! This module turns the bound symbol model into what a metadata table writer consumes for
//! the assembly as a whole. It doesn't serialize anything itself.
//!
//! # Key Components
//!
//! - [`AssemblyBuilder`] - Assembly row, File table, ManifestResource table, `MethodImpl` records
//! - [`FileReference`] - One linked module or linked resource file
//! - [`ManagedResource`] - One manifest resource
//! - [`MethodImplementation`] - Explicit interface implementation record
//! - [`MetadataVisitor`] - Generic traversal over [`MetadataNode`]s
//! - [`EmitOptions`] - Limits and threading behaviour
//! - [`BufferPool`] - Pooled scratch lists
//!
//! # Diagnostics
//!
//! Problems found while building the model (unsupported hash algorithm, unreadable linked
//! modules, over-long names) are pushed into a caller-supplied
//! [`crate::metadata::diagnostics::Diagnostics`] and never interrupt emission.
//!
//! # Thread Safety
//!
//! [`AssemblyBuilder`] is [`Send`] and [`Sync`]. Its only lazily computed state, the file
//! list, is published once; everything else is fixed at construction.

mod assembly;
mod config;
mod files;
mod methodimpl;
mod pool;
mod resources;
mod visitor;

pub use assembly::AssemblyBuilder;
pub use config::EmitOptions;
pub use files::{FileReference, FileReferenceRc, FileRow};
pub use methodimpl::{MethodImplRow, MethodImplementation};
pub use pool::{BufferPool, PooledVec};
pub use resources::ManagedResource;
pub use visitor::{walk_assembly, walk_module, walk_node, walk_type, MetadataNode, MetadataVisitor};

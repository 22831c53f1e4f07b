//! ECMA-335 metadata pieces the emitter needs.
//!
//! Only the parts of the metadata model that the assembly-level emitter touches live here:
//! the identity that ends up in the Assembly row, the raw rows read back from linked modules,
//! resource descriptions, tokens and the diagnostics sink shared by all emission passes.
//!
//! # Key Components
//!
//! - [`identity`] - Assembly names, versions, public keys and file hashing
//! - [`tables`] - Flags of the Assembly, File and ManifestResource tables, raw row reading
//! - [`streams`] - The `#Strings` heap of linked modules
//! - [`resources`] - Resources supplied by the compilation
//! - [`diagnostics`] - Non-fatal problems found during emission
//! - [`token`] - Metadata table row references

/// Diagnostics collected while emitting
pub mod diagnostics;
/// Assembly identity, strong-name tokens and file hashing
pub mod identity;
/// Resources supplied by the compilation
pub mod resources;
/// Metadata heaps of linked modules
pub mod streams;
/// Metadata table flags and raw rows
pub mod tables;
/// Commonly used metadata token type
pub mod token;

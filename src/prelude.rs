//! # dotemit Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the dotemit library. Import this module to get quick access to everything needed to
//! describe an assembly and hand it to the emitter.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dotemit operations
pub use crate::Error;

/// The result type used throughout dotemit
pub use crate::Result;

// ================================================================================================
// Emission
// ================================================================================================

/// Per-compilation emission facade and its options
pub use crate::emit::{AssemblyBuilder, EmitOptions};

/// Records handed to the metadata writer
pub use crate::emit::{
    FileReference, FileReferenceRc, FileRow, ManagedResource, MethodImplRow, MethodImplementation,
};

/// Generic traversal of the emission model
pub use crate::emit::{walk_assembly, MetadataNode, MetadataVisitor};

// ================================================================================================
// Symbols
// ================================================================================================

/// Assemblies, modules and types
pub use crate::symbols::{
    ManifestLocation, ModuleSymbol, ModuleSymbolRc, NamedType, NamedTypeRc, NamedTypeRef,
    SourceAssembly,
};

/// Methods
pub use crate::symbols::{
    BoundMethod, BoundMethodFlags, ExplicitInterfaceForwarding, MethodRc, MethodSymbol,
    WrappedMethod, WrappedMethodOverrides,
};

/// Signature and attribute building blocks
pub use crate::symbols::{
    Accessibility, AttributeData, Parameter, RefKind, SymbolRef, SyntaxReference, TypeRef,
};

// ================================================================================================
// Metadata
// ================================================================================================

/// Assembly identity
pub use crate::metadata::identity::{AssemblyContentType, AssemblyIdentity, AssemblyVersion};

/// Table flags and hash algorithm identifiers
pub use crate::metadata::tables::{
    AssemblyFlags, AssemblyHashAlgorithm, FileAttributes, ManifestResourceAttributes,
};

/// Resources supplied by the compilation
pub use crate::metadata::resources::{ResourceData, ResourceDescription};

/// Diagnostics
pub use crate::metadata::diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics, ErrorCode};

/// Metadata token type for referencing table entries
pub use crate::metadata::token::Token;

/// Module images
pub use crate::file::Image;

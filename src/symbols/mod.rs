//! Symbol model handed to the emitter.
//!
//! Binding produces an immutable graph of symbols; this module defines the parts of that graph
//! the emission layer reads. Assemblies and modules are concrete types, methods are accessed
//! through the [`MethodSymbol`] capability trait so emit-time synthetic methods
//! ([`WrappedMethod`]) and bound methods ([`BoundMethod`]) look the same to the writer.
//!
//! # Key Components
//!
//! - [`SourceAssembly`] - Identity, modules and resources of the assembly being compiled
//! - [`ModuleSymbol`] - Primary module or a linked module image
//! - [`NamedType`] - Type definitions with their methods
//! - [`MethodSymbol`] - Read-only method contract
//! - [`WrappedMethod`] - Synthetic method forwarding to an underlying one
//! - [`ExplicitInterfaceForwarding`] - Explicit interface forwarding stubs
//!
//! # Ownership
//!
//! Types own their methods through [`MethodRc`]; methods point back at their containing type
//! through a weak [`NamedTypeRef`], so the graph has no reference cycles.

use std::sync::Arc;

mod assembly;
mod bound;
mod method;
mod module;
mod synthesized;
mod types;
mod wrapped;

pub use assembly::SourceAssembly;
pub use bound::{BoundMethod, BoundMethodFlags};
pub use method::{
    AttributeData, CallingConvention, DllImportData, MarshalInfo, MethodImplAttributes,
    MethodKind, MethodSymbol, ObsoleteAttributeData, Parameter, RefKind, SecurityAttribute,
    SyntaxReference,
};
pub use module::{ManifestLocation, ModuleSymbol, ModuleSymbolRc};
pub use synthesized::ExplicitInterfaceForwarding;
pub use types::{
    CustomModifier, NamedType, NamedTypeRc, NamedTypeRef, PrimitiveType, TypeParameter, TypeRef,
};
pub use wrapped::{WrappedMethod, WrappedMethodOverrides};

/// A reference-counted method, bound or synthesized
pub type MethodRc = Arc<dyn MethodSymbol>;

/// Declared accessibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accessibility {
    /// No accessibility applies (namespaces, local functions)
    #[default]
    NotApplicable,
    /// `private`
    Private,
    /// `private protected`
    ProtectedAndInternal,
    /// `protected`
    Protected,
    /// `internal`
    Internal,
    /// `protected internal`
    ProtectedOrInternal,
    /// `public`
    Public,
}

/// Reference to a symbol that contains or is associated with a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolRef {
    /// A namespace, by full name
    Namespace(String),
    /// A type of the compilation
    Type(NamedTypeRef),
    /// A property, by name
    Property(String),
    /// An event, by name
    Event(String),
}

impl From<&NamedTypeRc> for SymbolRef {
    fn from(named: &NamedTypeRc) -> Self {
        SymbolRef::Type(NamedTypeRef::new(named))
    }
}

//! Generic traversal of the emission model.
//!
//! Implement [`MetadataVisitor`] and override the `visit_*` methods of the nodes you care
//! about. Call the matching `walk_*` function inside an override to continue into children,
//! or leave it out to prune the subtree.
//!
//! [`MetadataNode`] enumerates everything a generic pass can be handed. Method implementation
//! records are not part of it: a `MethodImpl` row is derived data that writers request
//! explicitly through [`AssemblyBuilder::method_implementations`], so there is no way to route
//! one through a visitor by accident.
//!
//! ```rust
//! use std::sync::Arc;
//! use dotemit::{
//!     emit::{walk_assembly, AssemblyBuilder, MetadataVisitor},
//!     metadata::{diagnostics::Diagnostics, identity::{AssemblyIdentity, AssemblyVersion}},
//!     symbols::{ModuleSymbol, SourceAssembly},
//! };
//!
//! #[derive(Default)]
//! struct ModuleCounter(usize);
//!
//! impl MetadataVisitor for ModuleCounter {
//!     fn visit_module(&mut self, _module: &ModuleSymbol) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let source = SourceAssembly::new(
//!     AssemblyIdentity::new("App", AssemblyVersion::default()),
//!     ModuleSymbol::primary("App.dll", Vec::new()),
//! );
//! let builder = AssemblyBuilder::new(Arc::new(source), None, Vec::new());
//!
//! let mut counter = ModuleCounter::default();
//! walk_assembly(&mut counter, &builder, &Diagnostics::new());
//! assert_eq!(counter.0, 1);
//! ```

use crate::{
    emit::{
        assembly::AssemblyBuilder, files::FileReference, resources::ManagedResource,
    },
    metadata::diagnostics::Diagnostics,
    symbols::{MethodSymbol, ModuleSymbol, NamedType},
};

/// A node of the emission model.
#[derive(Clone, Copy)]
pub enum MetadataNode<'a> {
    /// A module of the assembly
    Module(&'a ModuleSymbol),
    /// A type definition
    Type(&'a NamedType),
    /// A method definition
    Method(&'a dyn MethodSymbol),
    /// A File table entry
    File(&'a FileReference),
    /// A ManifestResource table entry
    Resource(&'a ManagedResource),
}

/// Pass over the emission model.
pub trait MetadataVisitor: Sized {
    /// Dispatches on the node kind.
    fn visit_node(&mut self, node: MetadataNode<'_>) {
        walk_node(self, node);
    }

    /// Visits a module and, by default, its types.
    fn visit_module(&mut self, module: &ModuleSymbol) {
        walk_module(self, module);
    }

    /// Visits a type and, by default, its methods.
    fn visit_type(&mut self, named: &NamedType) {
        walk_type(self, named);
    }

    /// Visits a method.
    fn visit_method(&mut self, _method: &dyn MethodSymbol) {
        // Leaf node
    }

    /// Visits a file.
    fn visit_file(&mut self, _file: &FileReference) {
        // Leaf node
    }

    /// Visits a manifest resource.
    fn visit_resource(&mut self, _resource: &ManagedResource) {
        // Leaf node
    }
}

/// Visits modules, additional top-level types, files and resources of `builder`, in the order
/// the writer emits them.
pub fn walk_assembly<V: MetadataVisitor>(
    visitor: &mut V,
    builder: &AssemblyBuilder,
    diagnostics: &Diagnostics,
) {
    for module in builder.source().modules() {
        visitor.visit_node(MetadataNode::Module(module));
    }

    for named in builder.additional_top_level_types() {
        visitor.visit_node(MetadataNode::Type(named));
    }

    for file in builder.files(diagnostics) {
        visitor.visit_node(MetadataNode::File(file));
    }

    for resource in &builder.resources(diagnostics) {
        visitor.visit_node(MetadataNode::Resource(resource));
    }
}

/// Routes `node` to the matching `visit_*` method.
pub fn walk_node<V: MetadataVisitor>(visitor: &mut V, node: MetadataNode<'_>) {
    match node {
        MetadataNode::Module(module) => visitor.visit_module(module),
        MetadataNode::Type(named) => visitor.visit_type(named),
        MetadataNode::Method(method) => visitor.visit_method(method),
        MetadataNode::File(file) => visitor.visit_file(file),
        MetadataNode::Resource(resource) => visitor.visit_resource(resource),
    }
}

/// Visits the types of `module`.
pub fn walk_module<V: MetadataVisitor>(visitor: &mut V, module: &ModuleSymbol) {
    for named in module.types() {
        visitor.visit_node(MetadataNode::Type(named));
    }
}

/// Visits the methods of `named`.
pub fn walk_type<V: MetadataVisitor>(visitor: &mut V, named: &NamedType) {
    for method in named.iter_methods() {
        visitor.visit_node(MetadataNode::Method(method.as_ref()));
    }
}

//! Synthetic methods that forward to an underlying method.
//!
//! Emit-time code often needs a method that is "like that one, except ...": the same method
//! with rewritten attributes, or an accessor moved to another type. [`WrappedMethod`] holds the underlying method and a [`WrappedMethodOverrides`]
//! implementation. The override trait lists exactly the facets a synthetic method must decide
//! for itself and gives none of them a default body, so a new wrapper kind that forgets one
//! does not compile. Every other facet of [`MethodSymbol`] is forwarded verbatim and lives
//! only here.
//!
//! Forwarded facets include the arity, the calling convention and the `MethodDef` flag bits,
//! so a wrapper fits only where the underlying method's signature and flags are already the
//! ones to emit.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use dotemit::symbols::{
//!     AttributeData, BoundMethod, MethodRc, MethodSymbol, Parameter, SymbolRef,
//!     SyntaxReference, TypeParameter, TypeRef, CustomModifier, WrappedMethod,
//!     WrappedMethodOverrides,
//! };
//!
//! /// Same method, attributes dropped.
//! struct WithoutAttributes;
//!
//! impl WrappedMethodOverrides for WithoutAttributes {
//!     fn type_parameters<'a>(&'a self, u: &'a dyn MethodSymbol) -> &'a [TypeParameter] { u.type_parameters() }
//!     fn type_arguments<'a>(&'a self, u: &'a dyn MethodSymbol) -> &'a [TypeRef] { u.type_arguments() }
//!     fn returns_void(&self, u: &dyn MethodSymbol) -> bool { u.returns_void() }
//!     fn return_type<'a>(&'a self, u: &'a dyn MethodSymbol) -> &'a TypeRef { u.return_type() }
//!     fn return_type_custom_modifiers<'a>(&'a self, u: &'a dyn MethodSymbol) -> &'a [CustomModifier] { u.return_type_custom_modifiers() }
//!     fn parameters<'a>(&'a self, u: &'a dyn MethodSymbol) -> &'a [Parameter] { u.parameters() }
//!     fn associated_symbol(&self, u: &dyn MethodSymbol) -> Option<SymbolRef> { u.associated_symbol() }
//!     fn containing_symbol(&self, u: &dyn MethodSymbol) -> Option<SymbolRef> { u.containing_symbol() }
//!     fn is_explicit_interface_implementation(&self, u: &dyn MethodSymbol) -> bool { u.is_explicit_interface_implementation() }
//!     fn explicit_interface_implementations<'a>(&'a self, u: &'a dyn MethodSymbol) -> &'a [MethodRc] { u.explicit_interface_implementations() }
//!     fn attributes<'a>(&'a self, _: &'a dyn MethodSymbol) -> &'a [AttributeData] { &[] }
//!     fn return_type_attributes<'a>(&'a self, _: &'a dyn MethodSymbol) -> &'a [AttributeData] { &[] }
//!     fn calculate_local_syntax_offset(&self, u: &dyn MethodSymbol, position: i32, tree: &SyntaxReference) -> i32 {
//!         u.calculate_local_syntax_offset(position, tree)
//!     }
//! }
//!
//! let underlying: MethodRc = Arc::new(BoundMethod { name: "Run".into(), ..BoundMethod::default() });
//! let wrapped = WrappedMethod::new(underlying, WithoutAttributes);
//! assert_eq!(wrapped.name(), "Run");
//! assert!(wrapped.attributes().is_empty());
//! ```

use crate::{
    metadata::diagnostics::Location,
    symbols::{
        method::{
            AttributeData, CallingConvention, DllImportData, MarshalInfo, MethodImplAttributes,
            MethodKind, MethodSymbol, ObsoleteAttributeData, Parameter, RefKind,
            SecurityAttribute, SyntaxReference,
        },
        Accessibility, CustomModifier, MethodRc, SymbolRef, TypeParameter, TypeRef,
    },
};

/// The facets a synthetic method must supply itself.
///
/// Each method receives the underlying method, so an implementation can still forward
/// selectively.
pub trait WrappedMethodOverrides: Send + Sync {
    /// Generic parameters of the synthetic method.
    fn type_parameters<'a>(&'a self, underlying: &'a dyn MethodSymbol) -> &'a [TypeParameter];

    /// Generic arguments of the synthetic method.
    fn type_arguments<'a>(&'a self, underlying: &'a dyn MethodSymbol) -> &'a [TypeRef];

    /// `true` if the synthetic method returns `void`.
    fn returns_void(&self, underlying: &dyn MethodSymbol) -> bool;

    /// Return type.
    fn return_type<'a>(&'a self, underlying: &'a dyn MethodSymbol) -> &'a TypeRef;

    /// `modopt`/`modreq` on the return type.
    fn return_type_custom_modifiers<'a>(
        &'a self,
        underlying: &'a dyn MethodSymbol,
    ) -> &'a [CustomModifier];

    /// Parameters.
    fn parameters<'a>(&'a self, underlying: &'a dyn MethodSymbol) -> &'a [Parameter];

    /// Property or event the synthetic method belongs to.
    fn associated_symbol(&self, underlying: &dyn MethodSymbol) -> Option<SymbolRef>;

    /// Symbol declaring the synthetic method.
    fn containing_symbol(&self, underlying: &dyn MethodSymbol) -> Option<SymbolRef>;

    /// `true` if the synthetic method explicitly implements interface members.
    fn is_explicit_interface_implementation(&self, underlying: &dyn MethodSymbol) -> bool;

    /// Interface methods implemented explicitly.
    fn explicit_interface_implementations<'a>(
        &'a self,
        underlying: &'a dyn MethodSymbol,
    ) -> &'a [MethodRc];

    /// Custom attributes of the synthetic method.
    fn attributes<'a>(&'a self, underlying: &'a dyn MethodSymbol) -> &'a [AttributeData];

    /// Custom attributes of the return value.
    fn return_type_attributes<'a>(&'a self, underlying: &'a dyn MethodSymbol)
        -> &'a [AttributeData];

    /// Maps a local to a syntax offset relative to the synthetic method's body.
    fn calculate_local_syntax_offset(
        &self,
        underlying: &dyn MethodSymbol,
        local_position: i32,
        local_tree: &SyntaxReference,
    ) -> i32;
}

/// A synthetic method built from an underlying method and an override set.
///
/// The underlying method is shared, never owned exclusively, and is always present: the
/// constructor takes a [`MethodRc`], there is no empty wrapper.
pub struct WrappedMethod<O> {
    underlying: MethodRc,
    overrides: O,
}

impl<O: WrappedMethodOverrides> WrappedMethod<O> {
    /// Wraps `underlying`.
    pub fn new(underlying: MethodRc, overrides: O) -> Self {
        WrappedMethod {
            underlying,
            overrides,
        }
    }

    /// The method all passthrough facets come from.
    #[must_use]
    pub fn underlying(&self) -> &MethodRc {
        &self.underlying
    }

    /// The override set.
    #[must_use]
    pub fn overrides(&self) -> &O {
        &self.overrides
    }
}

impl<O: WrappedMethodOverrides> MethodSymbol for WrappedMethod<O> {
    // Overridden

    fn type_parameters(&self) -> &[TypeParameter] {
        self.overrides.type_parameters(self.underlying.as_ref())
    }

    fn type_arguments(&self) -> &[TypeRef] {
        self.overrides.type_arguments(self.underlying.as_ref())
    }

    fn returns_void(&self) -> bool {
        self.overrides.returns_void(self.underlying.as_ref())
    }

    fn return_type(&self) -> &TypeRef {
        self.overrides.return_type(self.underlying.as_ref())
    }

    fn return_type_custom_modifiers(&self) -> &[CustomModifier] {
        self.overrides
            .return_type_custom_modifiers(self.underlying.as_ref())
    }

    fn parameters(&self) -> &[Parameter] {
        self.overrides.parameters(self.underlying.as_ref())
    }

    fn associated_symbol(&self) -> Option<SymbolRef> {
        self.overrides.associated_symbol(self.underlying.as_ref())
    }

    fn containing_symbol(&self) -> Option<SymbolRef> {
        self.overrides.containing_symbol(self.underlying.as_ref())
    }

    fn is_explicit_interface_implementation(&self) -> bool {
        self.overrides
            .is_explicit_interface_implementation(self.underlying.as_ref())
    }

    fn explicit_interface_implementations(&self) -> &[MethodRc] {
        self.overrides
            .explicit_interface_implementations(self.underlying.as_ref())
    }

    fn attributes(&self) -> &[AttributeData] {
        self.overrides.attributes(self.underlying.as_ref())
    }

    fn return_type_attributes(&self) -> &[AttributeData] {
        self.overrides
            .return_type_attributes(self.underlying.as_ref())
    }

    fn calculate_local_syntax_offset(
        &self,
        local_position: i32,
        local_tree: &SyntaxReference,
    ) -> i32 {
        self.overrides.calculate_local_syntax_offset(
            self.underlying.as_ref(),
            local_position,
            local_tree,
        )
    }

    // Forwarded

    fn parameter_count(&self) -> usize {
        self.underlying.parameter_count()
    }

    fn arity(&self) -> usize {
        self.underlying.arity()
    }

    fn is_vararg(&self) -> bool {
        self.underlying.is_vararg()
    }

    fn ref_kind(&self) -> RefKind {
        self.underlying.ref_kind()
    }

    fn calling_convention(&self) -> CallingConvention {
        self.underlying.calling_convention()
    }

    fn name(&self) -> &str {
        self.underlying.name()
    }

    fn method_kind(&self) -> MethodKind {
        self.underlying.method_kind()
    }

    fn locations(&self) -> &[Location] {
        self.underlying.locations()
    }

    fn declaring_syntax_references(&self) -> &[SyntaxReference] {
        self.underlying.declaring_syntax_references()
    }

    fn declared_accessibility(&self) -> Accessibility {
        self.underlying.declared_accessibility()
    }

    fn is_static(&self) -> bool {
        self.underlying.is_static()
    }

    fn is_virtual(&self) -> bool {
        self.underlying.is_virtual()
    }

    fn is_async(&self) -> bool {
        self.underlying.is_async()
    }

    fn is_override(&self) -> bool {
        self.underlying.is_override()
    }

    fn is_abstract(&self) -> bool {
        self.underlying.is_abstract()
    }

    fn is_sealed(&self) -> bool {
        self.underlying.is_sealed()
    }

    fn is_extern(&self) -> bool {
        self.underlying.is_extern()
    }

    fn is_implicitly_declared(&self) -> bool {
        self.underlying.is_implicitly_declared()
    }

    fn is_extension_method(&self) -> bool {
        self.underlying.is_extension_method()
    }

    fn hides_base_members_by_name(&self) -> bool {
        self.underlying.hides_base_members_by_name()
    }

    fn is_metadata_virtual(&self, ignore_interface_implementation_changes: bool) -> bool {
        self.underlying
            .is_metadata_virtual(ignore_interface_implementation_changes)
    }

    fn is_metadata_final(&self) -> bool {
        self.underlying.is_metadata_final()
    }

    fn is_metadata_new_slot(&self, ignore_interface_implementation_changes: bool) -> bool {
        self.underlying
            .is_metadata_new_slot(ignore_interface_implementation_changes)
    }

    fn is_access_checked_on_override(&self) -> bool {
        self.underlying.is_access_checked_on_override()
    }

    fn is_external(&self) -> bool {
        self.underlying.is_external()
    }

    fn has_special_name(&self) -> bool {
        self.underlying.has_special_name()
    }

    fn has_runtime_special_name(&self) -> bool {
        self.underlying.has_runtime_special_name()
    }

    fn requires_security_object(&self) -> bool {
        self.underlying.requires_security_object()
    }

    fn implementation_attributes(&self) -> MethodImplAttributes {
        self.underlying.implementation_attributes()
    }

    fn generate_debug_info(&self) -> bool {
        self.underlying.generate_debug_info()
    }

    fn dll_import_data(&self) -> Option<&DllImportData> {
        self.underlying.dll_import_data()
    }

    fn return_value_marshalling_information(&self) -> Option<&MarshalInfo> {
        self.underlying.return_value_marshalling_information()
    }

    fn return_value_is_marshalled_explicitly(&self) -> bool {
        self.underlying.return_value_is_marshalled_explicitly()
    }

    fn return_value_marshalling_descriptor(&self) -> &[u8] {
        self.underlying.return_value_marshalling_descriptor()
    }

    fn has_declarative_security(&self) -> bool {
        self.underlying.has_declarative_security()
    }

    fn security_information(&self) -> &[SecurityAttribute] {
        self.underlying.security_information()
    }

    fn applied_conditional_symbols(&self) -> &[String] {
        self.underlying.applied_conditional_symbols()
    }

    fn obsolete_attribute_data(&self) -> Option<&ObsoleteAttributeData> {
        self.underlying.obsolete_attribute_data()
    }

    fn documentation_comment_xml(&self, culture: Option<&str>, expand_includes: bool) -> String {
        self.underlying
            .documentation_comment_xml(culture, expand_includes)
    }
}

//! Explicit interface implementation forwarding stubs.
//!
//! When a type inherits a method that matches an interface member, but the runtime wouldn't
//! bind the two on its own (a non-virtual base method, a signature differing only in custom
//! modifiers), the emitter adds a private stub that implements the interface member
//! explicitly and forwards to the inherited method.
//!
//! The stub is its own [`MethodSymbol`] rather than a [`crate::symbols::WrappedMethod`]: its
//! signature and its `MethodDef` flags both come from the interface member, while a wrapper
//! would forward arity, calling convention and the metadata bits from the inherited method.
//! Only the source locations are taken from the method it forwards to.

use std::sync::Arc;

use crate::{
    metadata::diagnostics::Location,
    symbols::{
        method::{
            AttributeData, CallingConvention, DllImportData, MarshalInfo, MethodImplAttributes,
            MethodKind, MethodSymbol, ObsoleteAttributeData, Parameter, RefKind,
            SecurityAttribute, SyntaxReference,
        },
        Accessibility, CustomModifier, MethodRc, NamedTypeRc, NamedTypeRef, SymbolRef,
        TypeParameter, TypeRef,
    },
};

/// A private `virtual final newslot` method implementing one interface member by calling an
/// existing method of the implementing type.
pub struct ExplicitInterfaceForwarding {
    name: String,
    implemented: [MethodRc; 1],
    implementing_method: MethodRc,
    implementing_type: NamedTypeRef,
}

impl ExplicitInterfaceForwarding {
    /// Builds the stub in `implementing_type` that implements `interface_method` by calling
    /// `implementing_method`, and registers it with the type.
    ///
    /// The stub is named `Interface.Member` after the interface's full name, so it never
    /// collides with the method it forwards to.
    pub fn synthesize(
        implementing_type: &NamedTypeRc,
        interface_method: MethodRc,
        implementing_method: MethodRc,
    ) -> MethodRc {
        let name = match interface_method.containing_type() {
            Some(interface) => format!("{}.{}", interface.fullname(), interface_method.name()),
            None => interface_method.name().to_string(),
        };

        let stub: MethodRc = Arc::new(ExplicitInterfaceForwarding {
            name,
            implemented: [interface_method],
            implementing_method,
            implementing_type: NamedTypeRef::new(implementing_type),
        });

        tracing::trace!(
            target_type = %implementing_type.fullname(),
            method = stub.name(),
            "synthesized explicit interface forwarding stub"
        );

        implementing_type.add_method(stub.clone());
        stub
    }

    /// The interface method the stub implements.
    #[must_use]
    pub fn interface_method(&self) -> &MethodRc {
        &self.implemented[0]
    }

    /// The method the stub's body calls.
    #[must_use]
    pub fn implementing_method(&self) -> &MethodRc {
        &self.implementing_method
    }
}

impl MethodSymbol for ExplicitInterfaceForwarding {
    fn type_parameters(&self) -> &[TypeParameter] {
        self.interface_method().type_parameters()
    }

    fn type_arguments(&self) -> &[TypeRef] {
        self.interface_method().type_arguments()
    }

    fn returns_void(&self) -> bool {
        self.interface_method().returns_void()
    }

    fn return_type(&self) -> &TypeRef {
        self.interface_method().return_type()
    }

    fn return_type_custom_modifiers(&self) -> &[CustomModifier] {
        self.interface_method().return_type_custom_modifiers()
    }

    fn parameters(&self) -> &[Parameter] {
        self.interface_method().parameters()
    }

    fn parameter_count(&self) -> usize {
        self.parameters().len()
    }

    fn arity(&self) -> usize {
        self.type_parameters().len()
    }

    fn is_vararg(&self) -> bool {
        self.interface_method().is_vararg()
    }

    fn ref_kind(&self) -> RefKind {
        self.interface_method().ref_kind()
    }

    fn calling_convention(&self) -> CallingConvention {
        let mut convention = CallingConvention::HAS_THIS;
        if self.arity() > 0 {
            convention |= CallingConvention::GENERIC;
        }
        if self.is_vararg() {
            convention |= CallingConvention::VARARG;
        }
        convention
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn method_kind(&self) -> MethodKind {
        MethodKind::ExplicitInterfaceImplementation
    }

    fn containing_symbol(&self) -> Option<SymbolRef> {
        Some(SymbolRef::Type(self.implementing_type.clone()))
    }

    fn associated_symbol(&self) -> Option<SymbolRef> {
        None
    }

    fn locations(&self) -> &[Location] {
        self.implementing_method.locations()
    }

    fn declaring_syntax_references(&self) -> &[SyntaxReference] {
        &[]
    }

    fn declared_accessibility(&self) -> Accessibility {
        Accessibility::Private
    }

    fn is_static(&self) -> bool {
        false
    }

    fn is_virtual(&self) -> bool {
        false
    }

    fn is_async(&self) -> bool {
        false
    }

    fn is_override(&self) -> bool {
        false
    }

    fn is_abstract(&self) -> bool {
        false
    }

    fn is_sealed(&self) -> bool {
        false
    }

    fn is_extern(&self) -> bool {
        false
    }

    fn is_implicitly_declared(&self) -> bool {
        true
    }

    fn is_extension_method(&self) -> bool {
        false
    }

    fn hides_base_members_by_name(&self) -> bool {
        false
    }

    fn is_explicit_interface_implementation(&self) -> bool {
        true
    }

    fn explicit_interface_implementations(&self) -> &[MethodRc] {
        &self.implemented
    }

    // a MethodImpl body is always a virtual slot of its own
    fn is_metadata_virtual(&self, _ignore_interface_implementation_changes: bool) -> bool {
        true
    }

    fn is_metadata_final(&self) -> bool {
        true
    }

    fn is_metadata_new_slot(&self, _ignore_interface_implementation_changes: bool) -> bool {
        true
    }

    fn is_access_checked_on_override(&self) -> bool {
        false
    }

    fn is_external(&self) -> bool {
        false
    }

    fn has_special_name(&self) -> bool {
        false
    }

    fn has_runtime_special_name(&self) -> bool {
        false
    }

    fn requires_security_object(&self) -> bool {
        false
    }

    fn implementation_attributes(&self) -> MethodImplAttributes {
        MethodImplAttributes::IL
    }

    fn generate_debug_info(&self) -> bool {
        false
    }

    fn attributes(&self) -> &[AttributeData] {
        &[]
    }

    fn return_type_attributes(&self) -> &[AttributeData] {
        &[]
    }

    fn dll_import_data(&self) -> Option<&DllImportData> {
        None
    }

    fn return_value_marshalling_information(&self) -> Option<&MarshalInfo> {
        None
    }

    fn return_value_is_marshalled_explicitly(&self) -> bool {
        false
    }

    fn return_value_marshalling_descriptor(&self) -> &[u8] {
        &[]
    }

    fn has_declarative_security(&self) -> bool {
        false
    }

    fn security_information(&self) -> &[SecurityAttribute] {
        &[]
    }

    fn applied_conditional_symbols(&self) -> &[String] {
        &[]
    }

    fn obsolete_attribute_data(&self) -> Option<&ObsoleteAttributeData> {
        None
    }

    fn documentation_comment_xml(&self, _culture: Option<&str>, _expand_includes: bool) -> String {
        String::new()
    }

    fn calculate_local_syntax_offset(
        &self,
        _local_position: i32,
        _local_tree: &SyntaxReference,
    ) -> i32 {
        // stubs declare no locals
        -1
    }
}

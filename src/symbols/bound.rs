use bitflags::bitflags;

use crate::{
    metadata::diagnostics::Location,
    symbols::{
        method::{
            AttributeData, CallingConvention, DllImportData, MarshalInfo, MethodImplAttributes,
            MethodKind, MethodSymbol, ObsoleteAttributeData, Parameter, RefKind,
            SecurityAttribute, SyntaxReference,
        },
        Accessibility, CustomModifier, MethodRc, NamedTypeRef, SymbolRef, TypeParameter, TypeRef,
    },
};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Boolean facets of a [`BoundMethod`]
    pub struct BoundMethodFlags: u32 {
        /// `static`
        const STATIC = 0x0000_0001;
        /// `virtual`
        const VIRTUAL = 0x0000_0002;
        /// `async`
        const ASYNC = 0x0000_0004;
        /// `override`
        const OVERRIDE = 0x0000_0008;
        /// `abstract`
        const ABSTRACT = 0x0000_0010;
        /// `sealed`
        const SEALED = 0x0000_0020;
        /// `extern`
        const EXTERN = 0x0000_0040;
        /// Declared by the compiler
        const IMPLICITLY_DECLARED = 0x0000_0080;
        /// `__arglist`
        const VARARG = 0x0000_0100;
        /// Extension method
        const EXTENSION = 0x0000_0200;
        /// Hides base members by name
        const HIDE_BY_NAME = 0x0000_0400;
        /// `virtual` in metadata
        const METADATA_VIRTUAL = 0x0000_0800;
        /// `final` in metadata
        const METADATA_FINAL = 0x0000_1000;
        /// `newslot` in metadata
        const METADATA_NEW_SLOT = 0x0000_2000;
        /// Made `virtual newslot` in metadata only to implement an interface
        const INTERFACE_IMPLEMENTATION_VIRTUAL = 0x0000_4000;
        /// `strict`
        const ACCESS_CHECKED_ON_OVERRIDE = 0x0000_8000;
        /// Body provided externally
        const EXTERNAL = 0x0001_0000;
        /// `specialname`
        const SPECIAL_NAME = 0x0002_0000;
        /// `rtspecialname`
        const RUNTIME_SPECIAL_NAME = 0x0004_0000;
        /// `reqsecobj`
        const REQUIRES_SECURITY_OBJECT = 0x0008_0000;
        /// Has `DeclSecurity` rows
        const DECLARATIVE_SECURITY = 0x0010_0000;
        /// Return value has a `FieldMarshal` row
        const MARSHALLED_EXPLICITLY = 0x0020_0000;
        /// Emit debug information
        const GENERATE_DEBUG_INFO = 0x0040_0000;
    }
}

/// A method as produced by binding.
///
/// All facets are plain fields; the struct is built once and then shared as a
/// [`MethodRc`]. `Default` yields a private, parameterless `void` method named `""`.
#[derive(Debug, Clone)]
pub struct BoundMethod {
    /// Name
    pub name: String,
    /// Kind of method
    pub kind: MethodKind,
    /// Boolean facets
    pub flags: BoundMethodFlags,
    /// Declared accessibility
    pub accessibility: Accessibility,
    /// Declaring type
    pub containing_type: Option<NamedTypeRef>,
    /// Property or event this method is an accessor of
    pub associated: Option<SymbolRef>,
    /// Generic parameters
    pub type_parameters: Vec<TypeParameter>,
    /// Generic arguments
    pub type_arguments: Vec<TypeRef>,
    /// Return type
    pub return_type: TypeRef,
    /// `modopt`/`modreq` on the return type
    pub return_type_custom_modifiers: Vec<CustomModifier>,
    /// Return passing mode
    pub ref_kind: RefKind,
    /// Parameters, excluding `this`
    pub parameters: Vec<Parameter>,
    /// Signature calling convention
    pub calling_convention: CallingConvention,
    /// `ImplFlags`
    pub implementation_attributes: MethodImplAttributes,
    /// Interface methods implemented explicitly
    pub explicit_interface_implementations: Vec<MethodRc>,
    /// Custom attributes
    pub attributes: Vec<AttributeData>,
    /// Custom attributes of the return value
    pub return_type_attributes: Vec<AttributeData>,
    /// Source locations
    pub locations: Vec<Location>,
    /// Declaring syntax
    pub syntax_references: Vec<SyntaxReference>,
    /// P/Invoke data
    pub dll_import: Option<DllImportData>,
    /// `MarshalAs` data of the return value
    pub return_value_marshalling: Option<MarshalInfo>,
    /// Encoded `FieldMarshal` blob of the return value
    pub return_value_marshalling_descriptor: Vec<u8>,
    /// Declarative security
    pub security: Vec<SecurityAttribute>,
    /// `ConditionalAttribute` symbols
    pub conditional_symbols: Vec<String>,
    /// Obsolete data
    pub obsolete: Option<ObsoleteAttributeData>,
    /// Documentation XML
    pub documentation: String,
    /// Position of the method body start, local syntax offsets are relative to it
    pub body_position: i32,
}

impl Default for BoundMethod {
    fn default() -> Self {
        BoundMethod {
            name: String::new(),
            kind: MethodKind::Ordinary,
            flags: BoundMethodFlags::GENERATE_DEBUG_INFO,
            accessibility: Accessibility::Private,
            containing_type: None,
            associated: None,
            type_parameters: Vec::new(),
            type_arguments: Vec::new(),
            return_type: TypeRef::Void,
            return_type_custom_modifiers: Vec::new(),
            ref_kind: RefKind::None,
            parameters: Vec::new(),
            calling_convention: CallingConvention::DEFAULT,
            implementation_attributes: MethodImplAttributes::IL,
            explicit_interface_implementations: Vec::new(),
            attributes: Vec::new(),
            return_type_attributes: Vec::new(),
            locations: Vec::new(),
            syntax_references: Vec::new(),
            dll_import: None,
            return_value_marshalling: None,
            return_value_marshalling_descriptor: Vec::new(),
            security: Vec::new(),
            conditional_symbols: Vec::new(),
            obsolete: None,
            documentation: String::new(),
            body_position: 0,
        }
    }
}

impl BoundMethod {
    fn has(&self, flag: BoundMethodFlags) -> bool {
        self.flags.contains(flag)
    }
}

impl MethodSymbol for BoundMethod {
    fn type_parameters(&self) -> &[TypeParameter] {
        &self.type_parameters
    }

    fn type_arguments(&self) -> &[TypeRef] {
        &self.type_arguments
    }

    fn returns_void(&self) -> bool {
        self.return_type == TypeRef::Void
    }

    fn return_type(&self) -> &TypeRef {
        &self.return_type
    }

    fn return_type_custom_modifiers(&self) -> &[CustomModifier] {
        &self.return_type_custom_modifiers
    }

    fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    fn arity(&self) -> usize {
        self.type_parameters.len()
    }

    fn is_vararg(&self) -> bool {
        self.has(BoundMethodFlags::VARARG)
    }

    fn ref_kind(&self) -> RefKind {
        self.ref_kind
    }

    fn calling_convention(&self) -> CallingConvention {
        self.calling_convention
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn method_kind(&self) -> MethodKind {
        self.kind
    }

    fn containing_symbol(&self) -> Option<SymbolRef> {
        self.containing_type.clone().map(SymbolRef::Type)
    }

    fn associated_symbol(&self) -> Option<SymbolRef> {
        self.associated.clone()
    }

    fn locations(&self) -> &[Location] {
        &self.locations
    }

    fn declaring_syntax_references(&self) -> &[SyntaxReference] {
        &self.syntax_references
    }

    fn declared_accessibility(&self) -> Accessibility {
        self.accessibility
    }

    fn is_static(&self) -> bool {
        self.has(BoundMethodFlags::STATIC)
    }

    fn is_virtual(&self) -> bool {
        self.has(BoundMethodFlags::VIRTUAL)
    }

    fn is_async(&self) -> bool {
        self.has(BoundMethodFlags::ASYNC)
    }

    fn is_override(&self) -> bool {
        self.has(BoundMethodFlags::OVERRIDE)
    }

    fn is_abstract(&self) -> bool {
        self.has(BoundMethodFlags::ABSTRACT)
    }

    fn is_sealed(&self) -> bool {
        self.has(BoundMethodFlags::SEALED)
    }

    fn is_extern(&self) -> bool {
        self.has(BoundMethodFlags::EXTERN)
    }

    fn is_implicitly_declared(&self) -> bool {
        self.has(BoundMethodFlags::IMPLICITLY_DECLARED)
    }

    fn is_extension_method(&self) -> bool {
        self.has(BoundMethodFlags::EXTENSION)
    }

    fn hides_base_members_by_name(&self) -> bool {
        self.has(BoundMethodFlags::HIDE_BY_NAME)
    }

    fn is_explicit_interface_implementation(&self) -> bool {
        !self.explicit_interface_implementations.is_empty()
    }

    fn explicit_interface_implementations(&self) -> &[MethodRc] {
        &self.explicit_interface_implementations
    }

    fn is_metadata_virtual(&self, ignore_interface_implementation_changes: bool) -> bool {
        self.has(BoundMethodFlags::METADATA_VIRTUAL)
            || (!ignore_interface_implementation_changes
                && self.has(BoundMethodFlags::INTERFACE_IMPLEMENTATION_VIRTUAL))
    }

    fn is_metadata_final(&self) -> bool {
        self.has(BoundMethodFlags::METADATA_FINAL)
    }

    fn is_metadata_new_slot(&self, ignore_interface_implementation_changes: bool) -> bool {
        self.has(BoundMethodFlags::METADATA_NEW_SLOT)
            || (!ignore_interface_implementation_changes
                && self.has(BoundMethodFlags::INTERFACE_IMPLEMENTATION_VIRTUAL))
    }

    fn is_access_checked_on_override(&self) -> bool {
        self.has(BoundMethodFlags::ACCESS_CHECKED_ON_OVERRIDE)
    }

    fn is_external(&self) -> bool {
        self.has(BoundMethodFlags::EXTERNAL)
    }

    fn has_special_name(&self) -> bool {
        self.has(BoundMethodFlags::SPECIAL_NAME)
    }

    fn has_runtime_special_name(&self) -> bool {
        self.has(BoundMethodFlags::RUNTIME_SPECIAL_NAME)
    }

    fn requires_security_object(&self) -> bool {
        self.has(BoundMethodFlags::REQUIRES_SECURITY_OBJECT)
    }

    fn implementation_attributes(&self) -> MethodImplAttributes {
        self.implementation_attributes
    }

    fn generate_debug_info(&self) -> bool {
        self.has(BoundMethodFlags::GENERATE_DEBUG_INFO)
    }

    fn attributes(&self) -> &[AttributeData] {
        &self.attributes
    }

    fn return_type_attributes(&self) -> &[AttributeData] {
        &self.return_type_attributes
    }

    fn dll_import_data(&self) -> Option<&DllImportData> {
        self.dll_import.as_ref()
    }

    fn return_value_marshalling_information(&self) -> Option<&MarshalInfo> {
        self.return_value_marshalling.as_ref()
    }

    fn return_value_is_marshalled_explicitly(&self) -> bool {
        self.has(BoundMethodFlags::MARSHALLED_EXPLICITLY)
    }

    fn return_value_marshalling_descriptor(&self) -> &[u8] {
        &self.return_value_marshalling_descriptor
    }

    fn has_declarative_security(&self) -> bool {
        self.has(BoundMethodFlags::DECLARATIVE_SECURITY)
    }

    fn security_information(&self) -> &[SecurityAttribute] {
        &self.security
    }

    fn applied_conditional_symbols(&self) -> &[String] {
        &self.conditional_symbols
    }

    fn obsolete_attribute_data(&self) -> Option<&ObsoleteAttributeData> {
        self.obsolete.as_ref()
    }

    fn documentation_comment_xml(&self, _culture: Option<&str>, _expand_includes: bool) -> String {
        // stored with includes already expanded
        self.documentation.clone()
    }

    fn calculate_local_syntax_offset(
        &self,
        local_position: i32,
        _local_tree: &SyntaxReference,
    ) -> i32 {
        local_position - self.body_position
    }
}

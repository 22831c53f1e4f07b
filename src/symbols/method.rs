//! The method capability set consumed by the emitter.
//!
//! [`MethodSymbol`] is the read-only contract every method the metadata writer sees has to
//! fulfil, whether it was bound from source ([`crate::symbols::BoundMethod`]) or manufactured at
//! emit time ([`crate::symbols::WrappedMethod`]). The facets are grouped the way the writer
//! consumes them: signature, declaration, metadata row flags and attached data.

use std::fmt;

use bitflags::bitflags;

use crate::{
    metadata::{diagnostics::Location, token::Token},
    symbols::{
        Accessibility, CustomModifier, MethodRc, NamedTypeRc, SymbolRef, TypeParameter, TypeRef,
    },
};

/// How a value is passed or returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefKind {
    /// By value
    #[default]
    None,
    /// `ref`
    Ref,
    /// `ref readonly` / `in`
    RefReadOnly,
    /// `out`
    Out,
}

/// What kind of member a method is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MethodKind {
    /// A regular method
    #[default]
    Ordinary,
    /// Instance constructor
    Constructor,
    /// Type initializer
    StaticConstructor,
    /// Finalizer
    Destructor,
    /// Explicit implementation of an interface member
    ExplicitInterfaceImplementation,
    /// Property getter
    PropertyGet,
    /// Property setter
    PropertySet,
    /// Event add accessor
    EventAdd,
    /// Event remove accessor
    EventRemove,
    /// User defined operator
    UserDefinedOperator,
    /// User defined conversion
    Conversion,
    /// `Invoke` of a delegate type
    DelegateInvoke,
    /// Local function lowered to a method
    LocalFunction,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Calling convention byte of a method signature, §II.23.2.1
    pub struct CallingConvention: u8 {
        /// Default managed calling convention
        const DEFAULT = 0x00;
        /// Variable argument list
        const VARARG = 0x05;
        /// The signature has generic parameters
        const GENERIC = 0x10;
        /// Instance method, `this` is passed implicitly
        const HAS_THIS = 0x20;
        /// `this` is passed as the first explicit parameter
        const EXPLICIT_THIS = 0x40;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// `ImplFlags` column of the `MethodDef` table, §II.23.1.10
    pub struct MethodImplAttributes: u32 {
        /// Method body is CIL
        const IL = 0x0000;
        /// Method body is native code
        const NATIVE = 0x0001;
        /// Method body is provided by the runtime
        const RUNTIME = 0x0003;
        /// Method body is unmanaged
        const UNMANAGED = 0x0004;
        /// Method may not be inlined
        const NO_INLINING = 0x0008;
        /// Method is defined, the body is provided elsewhere
        const FORWARD_REF = 0x0010;
        /// Method is single threaded through the body
        const SYNCHRONIZED = 0x0020;
        /// Method may not be optimized
        const NO_OPTIMIZATION = 0x0040;
        /// Method signature is exported exactly as declared
        const PRESERVE_SIG = 0x0080;
        /// Method should be inlined if possible
        const AGGRESSIVE_INLINING = 0x0100;
        /// Internal call
        const INTERNAL_CALL = 0x1000;
    }
}

/// A method or return-value parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Name
    pub name: String,
    /// Zero-based position
    pub ordinal: u32,
    /// Parameter type
    pub ty: TypeRef,
    /// Passing mode
    pub ref_kind: RefKind,
    /// `modopt`/`modreq` on the parameter type
    pub custom_modifiers: Vec<CustomModifier>,
}

/// An applied custom attribute, ready to be written to the `CustomAttribute` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeData {
    /// Token of the attribute constructor
    pub constructor: Token,
    /// Full name of the attribute type
    pub type_name: String,
    /// Encoded value blob, §II.23.3
    pub value: Vec<u8>,
}

/// Data of a `DllImport` (P/Invoke) method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DllImportData {
    /// Name of the native module
    pub module_name: String,
    /// Entry point, `None` when it equals the method name
    pub entry_point: Option<String>,
    /// `ImplMap` mapping flags, §II.23.1.8
    pub flags: u16,
}

/// Return value marshalling declared through `MarshalAs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarshalInfo {
    /// `NATIVE_TYPE` constant
    pub native_type: u8,
    /// Additional descriptor bytes following the native type
    pub descriptor: Vec<u8>,
}

/// One declarative security attribute set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityAttribute {
    /// Security action, §II.22.11
    pub action: u16,
    /// The permission set attribute
    pub attribute: AttributeData,
}

/// Data of an `ObsoleteAttribute` or a similar attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObsoleteAttributeData {
    /// Message shown to callers
    pub message: Option<String>,
    /// Use is an error rather than a warning
    pub is_error: bool,
    /// Custom diagnostic identifier
    pub diagnostic_id: Option<String>,
}

/// Reference to the syntax that declares a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxReference {
    /// Path of the syntax tree
    pub path: String,
    /// Start position inside the tree
    pub start: u32,
    /// Length of the declaring node
    pub length: u32,
}

impl fmt::Debug for dyn MethodSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodSymbol({})", self.name())
    }
}

/// Read-only view of a method, as needed to emit its metadata.
///
/// Facets returning slices or references borrow from the symbol; none of them mutate or
/// compute anything observable, so the writer may call them in any order and from any thread.
pub trait MethodSymbol: Send + Sync {
    // Signature

    /// Generic parameters declared by the method.
    fn type_parameters(&self) -> &[TypeParameter];

    /// Generic arguments, equal to the parameters for a definition.
    fn type_arguments(&self) -> &[TypeRef];

    /// `true` if the method returns `void`.
    fn returns_void(&self) -> bool;

    /// Return type.
    fn return_type(&self) -> &TypeRef;

    /// `modopt`/`modreq` on the return type.
    fn return_type_custom_modifiers(&self) -> &[CustomModifier];

    /// Parameters, excluding `this`.
    fn parameters(&self) -> &[Parameter];

    /// Number of parameters.
    fn parameter_count(&self) -> usize;

    /// Number of generic parameters.
    fn arity(&self) -> usize;

    /// `true` for `__arglist` methods.
    fn is_vararg(&self) -> bool;

    /// How the value is returned.
    fn ref_kind(&self) -> RefKind;

    /// Calling convention of the signature.
    fn calling_convention(&self) -> CallingConvention;

    // Declaration

    /// Name as written to the `#Strings` heap.
    fn name(&self) -> &str;

    /// Kind of method.
    fn method_kind(&self) -> MethodKind;

    /// The type, namespace or other symbol declaring this method.
    fn containing_symbol(&self) -> Option<SymbolRef>;

    /// Property or event this method is an accessor of.
    fn associated_symbol(&self) -> Option<SymbolRef>;

    /// Source locations of the declaration.
    fn locations(&self) -> &[Location];

    /// Syntax nodes declaring the method.
    fn declaring_syntax_references(&self) -> &[SyntaxReference];

    /// Accessibility as declared.
    fn declared_accessibility(&self) -> Accessibility;

    /// `static`
    fn is_static(&self) -> bool;

    /// `virtual`
    fn is_virtual(&self) -> bool;

    /// `async`
    fn is_async(&self) -> bool;

    /// `override`
    fn is_override(&self) -> bool;

    /// `abstract`
    fn is_abstract(&self) -> bool;

    /// `sealed`
    fn is_sealed(&self) -> bool;

    /// `extern`
    fn is_extern(&self) -> bool;

    /// Declared by the compiler rather than in source.
    fn is_implicitly_declared(&self) -> bool;

    /// `this` parameter of an extension method.
    fn is_extension_method(&self) -> bool;

    /// Hides base members by name rather than by signature.
    fn hides_base_members_by_name(&self) -> bool;

    /// `true` if the method explicitly implements interface members.
    fn is_explicit_interface_implementation(&self) -> bool;

    /// Interface methods implemented explicitly.
    fn explicit_interface_implementations(&self) -> &[MethodRc];

    // Metadata row

    /// `virtual` bit of the `MethodDef` row.
    ///
    /// With `ignore_interface_implementation_changes`, a method that only became virtual to
    /// implement an interface reports its original state.
    fn is_metadata_virtual(&self, ignore_interface_implementation_changes: bool) -> bool;

    /// `final` bit of the `MethodDef` row.
    fn is_metadata_final(&self) -> bool;

    /// `newslot` bit of the `MethodDef` row.
    fn is_metadata_new_slot(&self, ignore_interface_implementation_changes: bool) -> bool;

    /// `strict` bit: overriding requires access to the method.
    fn is_access_checked_on_override(&self) -> bool;

    /// Body is provided externally (P/Invoke or runtime).
    fn is_external(&self) -> bool;

    /// `specialname`
    fn has_special_name(&self) -> bool;

    /// `rtspecialname`
    fn has_runtime_special_name(&self) -> bool;

    /// `reqsecobj`
    fn requires_security_object(&self) -> bool;

    /// `ImplFlags` of the row.
    fn implementation_attributes(&self) -> MethodImplAttributes;

    /// Emit sequence points and locals for this method.
    fn generate_debug_info(&self) -> bool;

    // Attached data

    /// Custom attributes of the method.
    fn attributes(&self) -> &[AttributeData];

    /// Custom attributes of the return value.
    fn return_type_attributes(&self) -> &[AttributeData];

    /// P/Invoke data.
    fn dll_import_data(&self) -> Option<&DllImportData>;

    /// Return value marshalling from `MarshalAs`.
    fn return_value_marshalling_information(&self) -> Option<&MarshalInfo>;

    /// `true` if the return value has a `FieldMarshal` row.
    fn return_value_is_marshalled_explicitly(&self) -> bool;

    /// Encoded `FieldMarshal` blob of the return value.
    fn return_value_marshalling_descriptor(&self) -> &[u8];

    /// `true` if the method has `DeclSecurity` rows.
    fn has_declarative_security(&self) -> bool;

    /// Declarative security attribute sets.
    fn security_information(&self) -> &[SecurityAttribute];

    /// Conditional compilation symbols from `ConditionalAttribute`.
    fn applied_conditional_symbols(&self) -> &[String];

    /// Obsolete data, if the method is marked obsolete.
    fn obsolete_attribute_data(&self) -> Option<&ObsoleteAttributeData>;

    /// XML documentation comment for `culture`, optionally expanding `<include>` elements.
    fn documentation_comment_xml(&self, culture: Option<&str>, expand_includes: bool) -> String;

    /// Maps a local declared at `local_position` in `local_tree` to a syntax offset relative to
    /// the method body.
    fn calculate_local_syntax_offset(&self, local_position: i32, local_tree: &SyntaxReference)
        -> i32;

    /// The type declaring this method, if the containing symbol is a live type.
    fn containing_type(&self) -> Option<NamedTypeRc> {
        match self.containing_symbol() {
            Some(SymbolRef::Type(named)) => named.upgrade(),
            _ => None,
        }
    }
}

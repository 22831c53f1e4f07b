use std::sync::Arc;

use crate::{
    metadata::{
        identity::{AssemblyIdentity, AssemblyVersion},
        token::Token,
    },
    symbols::{
        Accessibility, BoundMethod, BoundMethodFlags, MethodRc, ModuleSymbol, NamedType,
        NamedTypeRc, NamedTypeRef, Parameter, PrimitiveType, RefKind, SourceAssembly, TypeRef,
    },
};

// Helper function to create a type in the `Demo` namespace
pub fn named_type(token: u32, name: &str) -> NamedTypeRc {
    NamedType::new(Token::new(token), "Demo", name)
}

// Helper function to create an abstract interface method taking one `int`, added to `owner`
pub fn interface_method(owner: &NamedTypeRc, name: &str, return_type: TypeRef) -> MethodRc {
    let method: MethodRc = Arc::new(BoundMethod {
        name: name.to_string(),
        flags: BoundMethodFlags::VIRTUAL
            | BoundMethodFlags::ABSTRACT
            | BoundMethodFlags::METADATA_VIRTUAL
            | BoundMethodFlags::METADATA_NEW_SLOT
            | BoundMethodFlags::HIDE_BY_NAME,
        accessibility: Accessibility::Public,
        containing_type: Some(NamedTypeRef::new(owner)),
        return_type,
        parameters: vec![Parameter {
            name: "value".to_string(),
            ordinal: 0,
            ty: TypeRef::Primitive(PrimitiveType::I4),
            ref_kind: RefKind::None,
            custom_modifiers: Vec::new(),
        }],
        ..BoundMethod::default()
    });
    owner.add_method(method.clone());
    method
}

// Helper function to create a public instance method with no parameters, added to `owner`
pub fn ordinary_method(owner: &NamedTypeRc, name: &str, return_type: TypeRef) -> MethodRc {
    let method: MethodRc = Arc::new(BoundMethod {
        name: name.to_string(),
        accessibility: Accessibility::Public,
        containing_type: Some(NamedTypeRef::new(owner)),
        return_type,
        ..BoundMethod::default()
    });
    owner.add_method(method.clone());
    method
}

// Helper function to create a class whose only method explicitly implements `I{type_name}.{method_name}`.
// Returns the class and the interface method.
pub fn explicit_implementation(
    token: u32,
    type_name: &str,
    method_name: &str,
) -> (NamedTypeRc, MethodRc) {
    let interface = named_type(token | 0x0000_8000, &format!("I{type_name}"));
    let contract = interface_method(&interface, method_name, TypeRef::Void);

    let class = named_type(token, type_name);
    let body: MethodRc = Arc::new(BoundMethod {
        name: method_name.to_string(),
        flags: BoundMethodFlags::METADATA_VIRTUAL
            | BoundMethodFlags::METADATA_FINAL
            | BoundMethodFlags::METADATA_NEW_SLOT
            | BoundMethodFlags::INTERFACE_IMPLEMENTATION_VIRTUAL
            | BoundMethodFlags::HIDE_BY_NAME,
        accessibility: Accessibility::Private,
        containing_type: Some(NamedTypeRef::new(&class)),
        parameters: contract.parameters().to_vec(),
        explicit_interface_implementations: vec![contract.clone()],
        ..BoundMethod::default()
    });
    class.add_method(body);

    (class, contract)
}

// Helper function to create an assembly `name` whose primary module `{name}.dll` holds `types`
pub fn source_assembly(name: &str, types: Vec<NamedTypeRc>) -> SourceAssembly {
    SourceAssembly::new(
        AssemblyIdentity::new(name, AssemblyVersion::new(1, 0, 0, 0)),
        ModuleSymbol::primary(format!("{name}.dll"), types),
    )
}

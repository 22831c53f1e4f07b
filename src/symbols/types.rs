//! Named types and the type references used in method signatures.

use std::{
    fmt,
    sync::{Arc, Weak},
};

use crate::{metadata::token::Token, symbols::MethodRc};

/// A reference-counted pointer to a [`NamedType`]
pub type NamedTypeRc = Arc<NamedType>;

/// A weak reference to a [`NamedType`], used where a back-edge would otherwise form a cycle
/// (a method pointing at its containing type).
#[derive(Clone)]
pub struct NamedTypeRef {
    weak_ref: Weak<NamedType>,
}

impl NamedTypeRef {
    /// Create a new `NamedTypeRef` from a strong reference
    #[must_use]
    pub fn new(strong_ref: &NamedTypeRc) -> Self {
        Self {
            weak_ref: Arc::downgrade(strong_ref),
        }
    }

    /// Get a strong reference to the type, returning None if the type has been dropped
    #[must_use]
    pub fn upgrade(&self) -> Option<NamedTypeRc> {
        self.weak_ref.upgrade()
    }

    /// Check if the referenced type is still alive
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.weak_ref.strong_count() > 0
    }

    /// Get the token of the referenced type (if still alive)
    #[must_use]
    pub fn token(&self) -> Option<Token> {
        self.upgrade().map(|t| t.token)
    }

    /// Get the full name of the referenced type (if still alive)
    #[must_use]
    pub fn fullname(&self) -> Option<String> {
        self.upgrade().map(|t| t.fullname())
    }
}

impl From<&NamedTypeRc> for NamedTypeRef {
    fn from(strong_ref: &NamedTypeRc) -> Self {
        Self::new(strong_ref)
    }
}

impl PartialEq for NamedTypeRef {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.weak_ref, &other.weak_ref)
    }
}

impl Eq for NamedTypeRef {}

impl fmt::Debug for NamedTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(named) => write!(f, "NamedTypeRef({})", named.fullname()),
            None => write!(f, "NamedTypeRef(<dropped>)"),
        }
    }
}

/// A type definition of the compilation.
///
/// Methods are appended after the type is shared, since every method keeps a
/// [`NamedTypeRef`] back to its containing type.
pub struct NamedType {
    /// `TypeDef` token
    pub token: Token,
    /// Namespace, empty for the global namespace
    pub namespace: String,
    /// Simple name
    pub name: String,
    /// Methods declared by this type, in declaration order
    pub methods: boxcar::Vec<MethodRc>,
}

impl NamedType {
    /// Creates a shared type without methods.
    pub fn new(token: Token, namespace: impl Into<String>, name: impl Into<String>) -> NamedTypeRc {
        Arc::new(NamedType {
            token,
            namespace: namespace.into(),
            name: name.into(),
            methods: boxcar::Vec::new(),
        })
    }

    /// `Namespace.Name`, or just `Name` in the global namespace.
    #[must_use]
    pub fn fullname(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Appends a method.
    pub fn add_method(&self, method: MethodRc) {
        self.methods.push(method);
    }

    /// Iterates the declared methods.
    pub fn iter_methods(&self) -> impl Iterator<Item = &MethodRc> {
        self.methods.iter().map(|(_, method)| method)
    }
}

impl fmt::Debug for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedType")
            .field("token", &self.token)
            .field("name", &self.fullname())
            .field("methods", &self.methods.count())
            .finish()
    }
}

/// Element types that need no further resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum PrimitiveType {
    Boolean,
    Char,
    I1,
    U1,
    I2,
    U2,
    I4,
    U4,
    I8,
    U8,
    R4,
    R8,
    I,
    U,
    String,
    Object,
}

/// A type as it appears in a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// `void`
    Void,
    /// A built-in element type
    Primitive(PrimitiveType),
    /// A type definition or reference, by token and full name
    Named {
        /// `TypeDef`, `TypeRef` or `TypeSpec` token
        token: Token,
        /// Full name for display
        name: String,
    },
    /// A generic type parameter (`!n`) or method type parameter (`!!n`)
    GenericParameter {
        /// `true` for a method type parameter
        method: bool,
        /// Zero-based ordinal
        ordinal: u32,
    },
    /// A single dimensional, zero based array
    SzArray(Box<TypeRef>),
    /// A managed pointer
    ByRef(Box<TypeRef>),
}

impl TypeRef {
    /// Reference to a named type of the compilation.
    #[must_use]
    pub fn named(named: &NamedType) -> Self {
        TypeRef::Named {
            token: named.token,
            name: named.fullname(),
        }
    }
}

/// A `modopt` or `modreq` attached to a return type or parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomModifier {
    /// `true` for `modopt`, `false` for `modreq`
    pub is_optional: bool,
    /// The modifier type
    pub modifier: TypeRef,
}

/// A generic parameter declared by a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    /// Name
    pub name: String,
    /// Zero-based ordinal
    pub ordinal: u32,
}

//! Explicit interface implementation records.
//!
//! A `MethodImpl` row tells the runtime that a method body implements a specific interface
//! method, regardless of names. [`MethodImplementation`] is the emitter's form of one row: an
//! immutable pair of methods plus the implementing method's containing type, which is also the
//! row's `Class`. Records are leaves of the emission model; they have no node in
//! [`crate::emit::MetadataNode`], writers iterate
//! [`crate::emit::AssemblyBuilder::method_implementations`] instead.

use std::fmt;

use crate::{
    metadata::token::Token,
    symbols::{MethodRc, MethodSymbol, NamedTypeRc},
    Error, Result,
};

/// An explicit interface implementation: `implementing` implements `implemented`.
#[derive(Clone)]
pub struct MethodImplementation {
    containing_type: NamedTypeRc,
    implementing: MethodRc,
    implemented: MethodRc,
}

impl MethodImplementation {
    /// Pairs an implementing method with the interface method it implements.
    ///
    /// # Errors
    /// Returns [`Error::MissingContainingType`] if the implementing method isn't declared in a
    /// live type.
    pub fn new(implementing: MethodRc, implemented: MethodRc) -> Result<Self> {
        let containing_type = implementing
            .containing_type()
            .ok_or_else(|| Error::MissingContainingType(implementing.name().to_string()))?;

        Ok(MethodImplementation {
            containing_type,
            implementing,
            implemented,
        })
    }

    /// Type declaring the implementing method.
    #[must_use]
    pub fn containing_type(&self) -> &NamedTypeRc {
        &self.containing_type
    }

    /// The method providing the body.
    #[must_use]
    pub fn implementing_method(&self) -> &MethodRc {
        &self.implementing
    }

    /// The interface method being implemented.
    #[must_use]
    pub fn implemented_method(&self) -> &MethodRc {
        &self.implemented
    }

    /// Produces the `MethodImpl` row, resolving both methods to `MethodDef` or `MemberRef`
    /// tokens with `resolve`.
    ///
    /// # Errors
    /// Returns [`Error::Error`] if `resolve` has no token for one of the methods.
    pub fn to_row<F>(&self, mut resolve: F) -> Result<MethodImplRow>
    where
        F: FnMut(&dyn MethodSymbol) -> Option<Token>,
    {
        let body = resolve(self.implementing.as_ref()).ok_or_else(|| {
            Error::Error(format!("No token for method '{}'", self.implementing.name()))
        })?;
        let declaration = resolve(self.implemented.as_ref()).ok_or_else(|| {
            Error::Error(format!("No token for method '{}'", self.implemented.name()))
        })?;

        Ok(MethodImplRow {
            class: self.containing_type.token,
            method_body: body,
            method_declaration: declaration,
        })
    }
}

impl fmt::Debug for MethodImplementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MethodImplementation({}: {} implements {})",
            self.containing_type.fullname(),
            self.implementing.name(),
            self.implemented.name()
        )
    }
}

/// A `MethodImpl` table row, §II.22.27.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodImplRow {
    /// `TypeDef` of the implementing type
    pub class: Token,
    /// `MethodDefOrRef` of the body
    pub method_body: Token,
    /// `MethodDefOrRef` of the interface method
    pub method_declaration: Token,
}

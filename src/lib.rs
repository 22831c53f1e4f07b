// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]
#![allow(clippy::too_many_arguments)]
//#![deny(unsafe_code)]
// - 'file/physical.rs' uses mmap to map a file into memory

//! # dotemit
//!
//! The assembly-level emission layer of a .NET compiler. `dotemit` sits between the bound
//! symbol graph and a metadata table writer: it decides what goes into the Assembly row, which
//! files the manifest lists and how they are hashed, which resources the assembly exposes, and
//! which `MethodImpl` rows explicit interface implementations need.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use dotemit::prelude::*;
//!
//! let identity = AssemblyIdentity::new("Contoso.Core", AssemblyVersion::new(1, 2, 0, 0));
//! let source = SourceAssembly::new(identity, ModuleSymbol::primary("Contoso.Core.dll", Vec::new()))
//!     .with_resource(ResourceDescription::embedded("Strings.resources", true, vec![0u8; 4]));
//!
//! let builder = AssemblyBuilder::new(Arc::new(source), None, Vec::new());
//! let diagnostics = Diagnostics::new();
//!
//! assert_eq!(builder.name(), "Contoso.Core");
//! assert!(builder.files(&diagnostics).is_empty());
//! assert_eq!(builder.resources(&diagnostics).len(), 1);
//! assert!(!diagnostics.has_any());
//! ```
//!
//! ## Architecture
//!
//! - [`symbols`] - The bound symbol model the emitter reads: assemblies, modules, types and
//!   the [`symbols::MethodSymbol`] contract, including emit-time wrapped methods
//! - [`emit`] - [`emit::AssemblyBuilder`] and the records it produces for the writer
//! - [`metadata`] - Identity, table flags, linked module manifest reading and diagnostics
//! - [`file`] - Module images backed by memory or memory-mapped files
//! - [`prelude`] - Convenient re-exports
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Diagnostics versus errors
//!
//! Emission never stops for a problem a user can fix in their project. Unsupported hash
//! algorithms, unreadable linked modules, and over-long metadata names are reported to a
//! [`metadata::diagnostics::Diagnostics`] sink while the builder carries on with what it has.
//! [`Error`] is reserved for broken inputs a caller has to handle.
//!
//! ## Thread Safety
//!
//! Symbols and the [`emit::AssemblyBuilder`] are [`Send`] and [`Sync`]. Writers can query
//! the builder from several threads; lazily computed state is published exactly once.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Module images and low-level little-endian reads
pub mod file;

/// Metadata identity, table flags, heaps and diagnostics
pub mod metadata;

/// The bound symbol model consumed by the emitter
pub mod symbols;

/// Writer-facing emission model
///
/// # Key Types
///
/// - [`emit::AssemblyBuilder`] - Per-compilation emission facade
/// - [`emit::MethodImplementation`] - Explicit interface implementation record
/// - [`emit::FileReference`] - Entry of the File table
/// - [`emit::ManagedResource`] - Entry of the ManifestResource table
pub mod emit;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use dotemit::prelude::*;
///
/// let version: AssemblyVersion = "4.0.0.0".parse()?;
/// assert_eq!(version, AssemblyVersion::new(4, 0, 0, 0));
/// # Ok::<(), dotemit::Error>(())
/// ```
pub mod prelude;

/// `dotemit` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `dotemit` Error type
///
/// The main error type for all operations in this crate.
///
/// # Examples
///
/// ```rust
/// use dotemit::{file::Image, Error};
///
/// match Image::from_mem(Vec::new()) {
///     Err(Error::Empty) => {}
///     _ => unreachable!(),
/// }
/// ```
pub use error::Error;

//! The assembly-level view handed to the metadata writer.
//!
//! [`AssemblyBuilder`] wraps a bound [`SourceAssembly`] and answers everything the writer asks
//! about the assembly as a whole: its name in metadata, the synthesized top-level types, the
//! File table, the ManifestResource table, the `MethodImpl` records and the Assembly row
//! itself. Apart from the file list all answers are pure projections of construction-time
//! input.
//!
//! # File list
//!
//! The file list is computed on first request and published exactly once per builder. Callers
//! racing on the first request block on the one computation and all receive the same slice.
//! The unsupported-hash-algorithm diagnostic is raised by that computation only, and only if
//! there is at least one file to hash.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use dotemit::{
//!     emit::AssemblyBuilder,
//!     metadata::{
//!         diagnostics::Diagnostics,
//!         identity::{AssemblyIdentity, AssemblyVersion},
//!         resources::ResourceDescription,
//!     },
//!     symbols::{ModuleSymbol, SourceAssembly},
//! };
//!
//! let source = SourceAssembly::new(
//!     AssemblyIdentity::new("App", AssemblyVersion::new(1, 0, 0, 0)),
//!     ModuleSymbol::primary("App.dll", Vec::new()),
//! )
//! .with_resource(ResourceDescription::linked("data", true, "data.bin"));
//!
//! let builder = AssemblyBuilder::new(Arc::new(source), Some("App.Release.dll"), Vec::new());
//! let diagnostics = Diagnostics::new();
//!
//! assert_eq!(builder.metadata_name(), "App.Release");
//! assert_eq!(builder.files(&diagnostics).len(), 1);
//! assert_eq!(builder.files(&diagnostics)[0].file_name(), "data.bin");
//! assert!(!diagnostics.has_any());
//! ```

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use rayon::prelude::*;

use crate::{
    emit::{
        config::EmitOptions,
        files::{FileReference, FileReferenceRc, FileRow},
        methodimpl::MethodImplementation,
        pool::BufferPool,
        resources::ManagedResource,
    },
    metadata::{
        diagnostics::{Diagnostic, Diagnostics, ErrorCode, Location},
        identity::{is_supported_algorithm, AssemblyContentType, AssemblyVersion},
        tables::AssemblyFlags,
    },
    symbols::{ModuleSymbolRc, NamedTypeRc, SourceAssembly},
    Error, Result,
};

/// Writer-facing model of one assembly.
pub struct AssemblyBuilder {
    source: Arc<SourceAssembly>,
    options: EmitOptions,
    metadata_name: String,
    additional_types: Vec<NamedTypeRc>,
    files: OnceLock<Arc<[FileReferenceRc]>>,
    module_files: DashMap<usize, FileReferenceRc>,
    file_scratch: BufferPool<FileReferenceRc>,
    resource_scratch: BufferPool<ManagedResource>,
}

impl AssemblyBuilder {
    /// Creates the builder for `source`.
    ///
    /// `output_name` is the file name requested for the output (`/out:`); its extension is
    /// dropped and the rest becomes the metadata name, otherwise the assembly's own name is used.
    /// `additional_types` are synthesized top-level types with no declaration in source.
    pub fn new(
        source: Arc<SourceAssembly>,
        output_name: Option<&str>,
        additional_types: Vec<NamedTypeRc>,
    ) -> Self {
        let metadata_name = match output_name {
            Some(name) => strip_extension(name).to_string(),
            None => source.metadata_name().to_string(),
        };

        let options = EmitOptions::default();
        AssemblyBuilder {
            source,
            metadata_name,
            additional_types,
            files: OnceLock::new(),
            module_files: DashMap::new(),
            file_scratch: BufferPool::new(options.scratch_capacity),
            resource_scratch: BufferPool::new(options.scratch_capacity),
            options,
        }
    }

    /// Replaces the default options.
    #[must_use]
    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.file_scratch = BufferPool::new(options.scratch_capacity);
        self.resource_scratch = BufferPool::new(options.scratch_capacity);
        self.options = options;
        self
    }

    /// The bound assembly.
    #[must_use]
    pub fn source(&self) -> &Arc<SourceAssembly> {
        &self.source
    }

    /// Name written to the Assembly row.
    #[must_use]
    pub fn metadata_name(&self) -> &str {
        &self.metadata_name
    }

    /// Synthesized top-level types, in the order given at construction.
    #[must_use]
    pub fn additional_top_level_types(&self) -> &[NamedTypeRc] {
        &self.additional_types
    }

    /// Files of the assembly: every linked module, then every linked resource.
    ///
    /// Computed once; later calls, concurrent or not, return the same slice without reporting
    /// anything.
    #[tracing::instrument(skip_all, fields(assembly = %self.metadata_name))]
    pub fn files(&self, diagnostics: &Diagnostics) -> &[FileReferenceRc] {
        self.files.get_or_init(|| {
            let mut builder = self.file_scratch.acquire();

            for module in self.source.linked_modules() {
                builder.push(self.translate_module(module, diagnostics));
            }

            for resource in self.source.resources() {
                if !resource.is_embedded {
                    builder.push(Arc::new(FileReference::resource(resource)));
                }
            }

            let files = builder.to_immutable();

            // No files, nothing to hash: the algorithm isn't checked at all
            if !files.is_empty() && !is_supported_algorithm(self.source.hash_algorithm()) {
                diagnostics.push(Diagnostic::new(ErrorCode::CryptoHashFailed, Location::None));
            }

            tracing::debug!(count = files.len(), "published file list");
            files
        })
    }

    /// File table rows with the hash of every file.
    ///
    /// A resource file that can't be read gets an empty hash and a `ResourceFileUnreadable`
    /// diagnostic. With an unsupported algorithm all hashes are empty; that case was already
    /// reported by [`AssemblyBuilder::files`].
    pub fn file_rows(&self, diagnostics: &Diagnostics) -> Vec<FileRow> {
        let algorithm = self.source.hash_algorithm();

        self.files(diagnostics)
            .iter()
            .map(|file| {
                let hash_value = match file.hash_value(algorithm) {
                    Ok(hash) => hash,
                    Err(Error::UnsupportedHashAlgorithm(_)) => Vec::new(),
                    Err(error) => {
                        tracing::debug!(file = file.file_name(), %error, "file hash failed");
                        diagnostics.report(ErrorCode::ResourceFileUnreadable, file.file_name());
                        Vec::new()
                    }
                };

                FileRow {
                    flags: file.attributes(),
                    name: file.file_name().to_string(),
                    hash_value,
                }
            })
            .collect()
    }

    /// Appends the resources embedded in linked modules to `builder`, module by module.
    ///
    /// A module whose image can't be read reports `BindToBogus` with its name and contributes
    /// nothing; the remaining modules are still harvested.
    #[tracing::instrument(skip_all, fields(assembly = %self.metadata_name))]
    pub fn embedded_resources_from_added_modules(
        &self,
        diagnostics: &Diagnostics,
        builder: &mut Vec<ManagedResource>,
    ) {
        let harvest = |module: &ModuleSymbolRc| -> Vec<ManagedResource> {
            let file = self.translate_module(module, diagnostics);

            match module.embedded_resources() {
                Ok(resources) => resources
                    .into_iter()
                    .map(|resource| ManagedResource::from_linked_module(resource, file.clone()))
                    .collect(),
                Err(error) => {
                    tracing::debug!(module = module.name(), %error, "unreadable linked module");
                    diagnostics.push(
                        Diagnostic::new(
                            ErrorCode::BindToBogus,
                            Location::Module(module.name().to_string()),
                        )
                        .with_argument(module.name()),
                    );
                    Vec::new()
                }
            }
        };

        let linked = self.source.linked_modules();
        let harvested: Vec<Vec<ManagedResource>> = if self.options.parallel_harvest {
            linked.par_iter().map(harvest).collect()
        } else {
            linked.iter().map(harvest).collect()
        };

        builder.extend(harvested.into_iter().flatten());
    }

    /// The ManifestResource table: own resources in declaration order, then the resources
    /// embedded in linked modules.
    pub fn resources(&self, diagnostics: &Diagnostics) -> Vec<ManagedResource> {
        let files = self.files(diagnostics);
        let mut linked_files = files[self.source.linked_modules().len()..].iter();

        let mut builder = self.resource_scratch.acquire();
        for resource in self.source.resources() {
            let file = if resource.is_embedded {
                None
            } else {
                linked_files.next().cloned()
            };
            builder.push(ManagedResource::from_description(resource, file));
        }

        self.embedded_resources_from_added_modules(diagnostics, &mut builder);
        builder.to_vec()
    }

    /// `MethodImpl` records for every explicit interface implementation declared by the
    /// primary module's types and the additional top-level types.
    ///
    /// # Errors
    /// Returns [`Error::MissingContainingType`] if an implementing method doesn't resolve to a
    /// live containing type.
    pub fn method_implementations(&self) -> Result<Vec<MethodImplementation>> {
        let mut records = Vec::new();

        let types = self
            .source
            .primary_module()
            .types()
            .iter()
            .chain(&self.additional_types);
        for named in types {
            for method in named.iter_methods() {
                if !method.is_explicit_interface_implementation() {
                    continue;
                }

                for implemented in method.explicit_interface_implementations() {
                    records.push(MethodImplementation::new(
                        method.clone(),
                        implemented.clone(),
                    )?);
                }
            }
        }

        Ok(records)
    }

    // Assembly row

    /// Assembly flags. `PUBLIC_KEY` is set exactly when the identity has a public key.
    #[must_use]
    pub fn flags(&self) -> AssemblyFlags {
        let identity = self.source.identity();

        let mut flags = self.source.flags() | identity.flags();
        flags.set(AssemblyFlags::PUBLIC_KEY, identity.has_public_key());
        flags
    }

    /// Key container used for signing.
    #[must_use]
    pub fn signature_key(&self) -> Option<&str> {
        self.source.signature_key()
    }

    /// Full public key, empty for unsigned assemblies.
    #[must_use]
    pub fn public_key(&self) -> &[u8] {
        self.source.identity().public_key()
    }

    /// Culture name, `""` if culture-neutral.
    #[must_use]
    pub fn culture(&self) -> &str {
        self.source.identity().culture_name()
    }

    /// Retargetable bit of the identity.
    #[must_use]
    pub fn is_retargetable(&self) -> bool {
        self.source.identity().retargetable
    }

    /// Content type of the identity.
    #[must_use]
    pub fn content_type(&self) -> AssemblyContentType {
        self.source.identity().content_type
    }

    /// Public key token, empty for unsigned assemblies.
    #[must_use]
    pub fn public_key_token(&self) -> &[u8] {
        self.source.identity().public_key_token()
    }

    /// Assembly version.
    #[must_use]
    pub fn version(&self) -> AssemblyVersion {
        self.source.identity().version
    }

    /// Declared `AssemblyHashAlgorithm`.
    #[must_use]
    pub fn hash_algorithm(&self) -> u32 {
        self.source.hash_algorithm()
    }

    /// Name of the Assembly row, same as [`AssemblyBuilder::metadata_name`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata_name
    }

    /// Writer-facing reference of a linked module, created once per module.
    ///
    /// Modules are told apart by identity, not by name: the source assembly keeps every linked
    /// module alive for as long as the builder exists, so the address is a stable key.
    fn translate_module(&self, module: &ModuleSymbolRc, diagnostics: &Diagnostics) -> FileReferenceRc {
        self.module_files
            .entry(Arc::as_ptr(module) as usize)
            .or_insert_with(|| {
                if module.name().len() > self.options.max_metadata_name_length {
                    diagnostics.push(
                        Diagnostic::new(
                            ErrorCode::MetadataNameTooLong,
                            Location::Module(module.name().to_string()),
                        )
                        .with_argument(module.name()),
                    );
                }

                tracing::trace!(module = module.name(), "translated linked module");
                Arc::new(FileReference::Module(module.clone()))
            })
            .clone()
    }
}

/// Drops the last extension of a file name: `App.exe` becomes `App`, `App` stays `App`.
///
/// Only the final path component is searched, so a dot in a directory name is kept.
fn strip_extension(file_name: &str) -> &str {
    let component_start = file_name.rfind(['/', '\\']).map_or(0, |index| index + 1);
    match file_name[component_start..].rfind('.') {
        Some(index) => &file_name[..component_start + index],
        None => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            identity::{AssemblyIdentity, AssemblyVersion},
            resources::ResourceDescription,
            tables::AssemblyHashAlgorithm,
        },
        symbols::{ExplicitInterfaceForwarding, ModuleSymbol, TypeRef},
        test::factories::{
            explicit_implementation, interface_method, linked_module, malformed_module,
            named_type, ordinary_method, source_assembly, ResourceRow,
        },
    };
    use std::{sync::Barrier, thread};

    #[test]
    fn metadata_name_override() {
        let source = Arc::new(source_assembly("Contoso", Vec::new()));

        let by_identity = AssemblyBuilder::new(source.clone(), None, Vec::new());
        assert_eq!(by_identity.metadata_name(), "Contoso");

        let by_output = AssemblyBuilder::new(source.clone(), Some("Other.Name.dll"), Vec::new());
        assert_eq!(by_output.metadata_name(), "Other.Name");
        assert_eq!(by_output.name(), "Other.Name");

        let no_extension = AssemblyBuilder::new(source, Some("Bare"), Vec::new());
        assert_eq!(no_extension.metadata_name(), "Bare");
    }

    #[test]
    fn strip_extension_edges() {
        assert_eq!(strip_extension("a.b.c"), "a.b");
        assert_eq!(strip_extension("App."), "App");
        assert_eq!(strip_extension(".dll"), "");
        assert_eq!(strip_extension(""), "");
        assert_eq!(strip_extension("out.d/App"), "out.d/App");
        assert_eq!(strip_extension("out.d/App.exe"), "out.d/App");
        assert_eq!(strip_extension("bin.x86\\App"), "bin.x86\\App");
        assert_eq!(strip_extension("bin\\App.dll"), "bin\\App");
    }

    #[test]
    fn additional_types_are_kept_in_order() {
        let first = named_type(0x0200_0010, "<PrivateImplementationDetails>");
        let second = named_type(0x0200_0011, "<>f__AnonymousType0");
        let builder = AssemblyBuilder::new(
            Arc::new(source_assembly("App", Vec::new())),
            None,
            vec![first.clone(), second.clone()],
        );

        let types = builder.additional_top_level_types();
        assert_eq!(types.len(), 2);
        assert!(Arc::ptr_eq(&types[0], &first));
        assert!(Arc::ptr_eq(&types[1], &second));
    }

    #[test]
    fn files_are_computed_once() {
        let source = source_assembly("App", Vec::new())
            .with_linked_module(malformed_module("A.netmodule"))
            .with_hash_algorithm(0x8001);
        let builder = AssemblyBuilder::new(Arc::new(source), None, Vec::new());
        let diagnostics = Diagnostics::new();

        let first = builder.files(&diagnostics);
        let second = builder.files(&diagnostics);

        assert_eq!(first.len(), 1);
        assert!(std::ptr::eq(first, second));
        assert_eq!(diagnostics.count_code(ErrorCode::CryptoHashFailed), 1);
    }

    #[test]
    fn files_are_published_once_under_contention() {
        let source = source_assembly("App", Vec::new())
            .with_linked_module(malformed_module("A.netmodule"))
            .with_linked_module(malformed_module("B.netmodule"))
            .with_hash_algorithm(0x8001);
        let builder = Arc::new(AssemblyBuilder::new(Arc::new(source), None, Vec::new()));
        let diagnostics = Arc::new(Diagnostics::new());
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let builder = Arc::clone(&builder);
                let diagnostics = Arc::clone(&diagnostics);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    builder.files(&diagnostics).as_ptr() as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(builder.files(&diagnostics).len(), 2);
        assert_eq!(diagnostics.count_code(ErrorCode::CryptoHashFailed), 1);
    }

    #[test]
    fn no_hash_diagnostic_without_files() {
        let source = source_assembly("App", Vec::new()).with_hash_algorithm(0x8001);
        let builder = AssemblyBuilder::new(Arc::new(source), None, Vec::new());
        let diagnostics = Diagnostics::new();

        assert!(builder.files(&diagnostics).is_empty());
        assert!(!diagnostics.has_any());
    }

    #[test]
    fn supported_algorithms_report_nothing() {
        for algorithm in [
            AssemblyHashAlgorithm::NONE,
            AssemblyHashAlgorithm::MD5,
            AssemblyHashAlgorithm::SHA1,
            AssemblyHashAlgorithm::SHA256,
            AssemblyHashAlgorithm::SHA384,
            AssemblyHashAlgorithm::SHA512,
        ] {
            let source = source_assembly("App", Vec::new())
                .with_linked_module(malformed_module("A.netmodule"))
                .with_hash_algorithm(algorithm);
            let builder = AssemblyBuilder::new(Arc::new(source), None, Vec::new());
            let diagnostics = Diagnostics::new();

            assert_eq!(builder.files(&diagnostics).len(), 1);
            assert!(!diagnostics.has_any(), "algorithm 0x{algorithm:04x}");
        }
    }

    #[test]
    fn resource_files_follow_module_files() {
        let source = source_assembly("App", Vec::new())
            .with_linked_module(malformed_module("A.netmodule"))
            .with_resource(ResourceDescription::linked("first", true, "first.bin"))
            .with_resource(ResourceDescription::embedded("inline", true, vec![1u8]))
            .with_resource(ResourceDescription::linked("second", false, "second.bin"));
        let builder = AssemblyBuilder::new(Arc::new(source), None, Vec::new());

        let names: Vec<_> = builder
            .files(&Diagnostics::new())
            .iter()
            .map(|file| file.file_name().to_string())
            .collect();
        assert_eq!(names, ["A.netmodule", "first.bin", "second.bin"]);
    }

    #[test]
    fn long_module_name_is_reported_once() {
        let long_name = format!("{}.netmodule", "x".repeat(40));
        let source = source_assembly("App", Vec::new())
            .with_linked_module(linked_module(&long_name, &[ResourceRow::embedded("R", true, 0)]));
        let builder = AssemblyBuilder::new(Arc::new(source), None, Vec::new()).with_options(
            EmitOptions {
                max_metadata_name_length: 32,
                ..EmitOptions::default()
            },
        );
        let diagnostics = Diagnostics::new();

        builder.files(&diagnostics);
        let mut harvested = Vec::new();
        builder.embedded_resources_from_added_modules(&diagnostics, &mut harvested);

        assert_eq!(harvested.len(), 1);
        let reported = diagnostics.with_code(ErrorCode::MetadataNameTooLong);
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].location, Location::Module(long_name.clone()));
        assert!(Arc::ptr_eq(
            harvested[0].external_file.as_ref().unwrap(),
            &builder.files(&diagnostics)[0]
        ));
    }

    #[test]
    fn harvest_skips_malformed_modules() {
        for options in [EmitOptions::default(), EmitOptions::sequential()] {
            let source = source_assembly("App", Vec::new())
                .with_linked_module(linked_module(
                    "A.netmodule",
                    &[ResourceRow::embedded("A.resources", true, 0)],
                ))
                .with_linked_module(malformed_module("Broken.netmodule"))
                .with_linked_module(linked_module(
                    "C.netmodule",
                    &[
                        ResourceRow::embedded("C1.resources", false, 0),
                        ResourceRow::embedded("C2.resources", true, 0x80),
                    ],
                ));
            let builder =
                AssemblyBuilder::new(Arc::new(source), None, Vec::new()).with_options(options);
            let diagnostics = Diagnostics::new();

            let mut harvested = Vec::new();
            builder.embedded_resources_from_added_modules(&diagnostics, &mut harvested);

            let names: Vec<_> = harvested.iter().map(|r| r.name.as_str()).collect();
            assert_eq!(names, ["A.resources", "C1.resources", "C2.resources"]);
            assert_eq!(harvested[2].offset, 0x80);

            let reported = diagnostics.with_code(ErrorCode::BindToBogus);
            assert_eq!(reported.len(), 1);
            assert_eq!(reported[0].arguments, ["Broken.netmodule"]);
            assert_eq!(
                reported[0].location,
                Location::Module("Broken.netmodule".to_string())
            );
        }
    }

    #[test]
    fn resources_combine_own_and_harvested() {
        let source = source_assembly("App", Vec::new())
            .with_linked_module(linked_module(
                "A.netmodule",
                &[ResourceRow::embedded("A.resources", true, 0x10)],
            ))
            .with_resource(ResourceDescription::embedded("Own.resources", true, vec![1u8, 2]))
            .with_resource(ResourceDescription::linked("readme", false, "readme.txt"));
        let builder = AssemblyBuilder::new(Arc::new(source), None, Vec::new());
        let diagnostics = Diagnostics::new();

        let resources = builder.resources(&diagnostics);
        let names: Vec<_> = resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Own.resources", "readme", "A.resources"]);

        assert!(resources[0].data.is_some());
        assert!(resources[0].external_file.is_none());

        let files = builder.files(&diagnostics);
        assert!(Arc::ptr_eq(resources[1].external_file.as_ref().unwrap(), &files[1]));
        assert!(Arc::ptr_eq(resources[2].external_file.as_ref().unwrap(), &files[0]));
        assert_eq!(resources[2].offset, 0x10);
        assert!(!diagnostics.has_any());
    }

    #[test]
    fn file_rows_report_unreadable_resources() {
        let source = source_assembly("App", Vec::new())
            .with_linked_module(linked_module("A.netmodule", &[]))
            .with_resource(ResourceDescription::linked("gone", false, "/nonexistent/gone.bin"));
        let builder = AssemblyBuilder::new(Arc::new(source), None, Vec::new());
        let diagnostics = Diagnostics::new();

        let rows = builder.file_rows(&diagnostics);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "A.netmodule");
        assert_eq!(rows[0].hash_value.len(), 20);
        assert_eq!(rows[1].name, "gone.bin");
        assert!(rows[1].hash_value.is_empty());

        let reported = diagnostics.with_code(ErrorCode::ResourceFileUnreadable);
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].arguments, ["gone.bin"]);
    }

    #[test]
    fn public_key_flag_matches_key() {
        let unsigned = AssemblyBuilder::new(
            Arc::new(source_assembly("App", Vec::new()).with_flags(AssemblyFlags::PUBLIC_KEY)),
            None,
            Vec::new(),
        );
        assert!(!unsigned.flags().contains(AssemblyFlags::PUBLIC_KEY));
        assert!(unsigned.public_key().is_empty());
        assert!(unsigned.public_key_token().is_empty());

        let identity = AssemblyIdentity::new("Signed", AssemblyVersion::new(2, 1, 0, 0))
            .with_public_key(vec![0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0])
            .with_culture("en-US")
            .retargetable();
        let source = SourceAssembly::new(identity, ModuleSymbol::primary("Signed.dll", Vec::new()))
            .with_signature_key("KeyContainer")
            .with_flags(AssemblyFlags::ENABLE_JIT_COMPILE_TRACKING);
        let signed = AssemblyBuilder::new(Arc::new(source), None, Vec::new());

        let flags = signed.flags();
        assert!(flags.contains(AssemblyFlags::PUBLIC_KEY));
        assert!(flags.contains(AssemblyFlags::RETARGETABLE));
        assert!(flags.contains(AssemblyFlags::ENABLE_JIT_COMPILE_TRACKING));
        assert_eq!(
            signed.public_key_token(),
            &[0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x89]
        );
        assert_eq!(signed.culture(), "en-US");
        assert!(signed.is_retargetable());
        assert_eq!(signed.content_type(), AssemblyContentType::Default);
        assert_eq!(signed.version(), AssemblyVersion::new(2, 1, 0, 0));
        assert_eq!(signed.signature_key(), Some("KeyContainer"));
        assert_eq!(signed.hash_algorithm(), AssemblyHashAlgorithm::SHA1);
    }

    #[test]
    fn method_implementations_from_all_types() {
        let (class, interface_method) = explicit_implementation(0x0200_0003, "Handle", "Dispose");
        let (synthesized, _) = explicit_implementation(0x0200_0004, "<>Closure", "Invoke");

        let builder = AssemblyBuilder::new(
            Arc::new(source_assembly("App", vec![class.clone()])),
            None,
            vec![synthesized.clone()],
        );

        let records = builder.method_implementations().unwrap();
        assert_eq!(records.len(), 2);
        assert!(Arc::ptr_eq(records[0].containing_type(), &class));
        assert!(Arc::ptr_eq(records[0].implemented_method(), &interface_method));
        assert!(Arc::ptr_eq(records[1].containing_type(), &synthesized));
    }

    #[test]
    fn method_impl_bodies_are_virtual_slots() {
        let interface = named_type(0x0200_0002, "IRunner");
        let contract = interface_method(&interface, "Run", TypeRef::Void);
        let runner = named_type(0x0200_0003, "Runner");
        let inherited = ordinary_method(&runner, "Run", TypeRef::Void);
        ExplicitInterfaceForwarding::synthesize(&runner, contract, inherited);

        let (class, _) = explicit_implementation(0x0200_0004, "Handle", "Dispose");

        let builder = AssemblyBuilder::new(
            Arc::new(source_assembly("App", vec![runner, class])),
            None,
            Vec::new(),
        );

        let records = builder.method_implementations().unwrap();
        assert_eq!(records.len(), 2);
        for record in &records {
            let body = record.implementing_method();
            assert_eq!(body.parameters().len(), body.parameter_count(), "{}", body.name());
            assert!(body.is_metadata_virtual(false), "{}", body.name());
            assert_eq!(
                body.parameters().len(),
                record.implemented_method().parameters().len()
            );
        }
    }

    #[test]
    fn same_named_modules_stay_distinct() {
        let source = source_assembly("App", Vec::new())
            .with_linked_module(linked_module(
                "Shared.netmodule",
                &[ResourceRow::embedded("First.resources", true, 0)],
            ))
            .with_linked_module(linked_module(
                "Shared.netmodule",
                &[ResourceRow::embedded("Second.resources", true, 0)],
            ));
        let builder = AssemblyBuilder::new(Arc::new(source), None, Vec::new());
        let diagnostics = Diagnostics::new();

        let files = builder.files(&diagnostics);
        assert_eq!(files.len(), 2);
        assert!(!Arc::ptr_eq(&files[0], &files[1]));

        let resources = builder.resources(&diagnostics);
        assert_eq!(resources.len(), 2);
        assert!(Arc::ptr_eq(resources[0].external_file.as_ref().unwrap(), &files[0]));
        assert!(Arc::ptr_eq(resources[1].external_file.as_ref().unwrap(), &files[1]));
    }
}

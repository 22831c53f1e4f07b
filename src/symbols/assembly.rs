use crate::{
    metadata::{
        identity::AssemblyIdentity,
        resources::ResourceDescription,
        tables::{AssemblyFlags, AssemblyHashAlgorithm},
    },
    symbols::ModuleSymbolRc,
};

/// The assembly being compiled, as produced by binding.
///
/// Holds the identity plus everything assembly-level attributes contributed
/// (`AssemblyFlagsAttribute`, `AssemblyAlgorithmIdAttribute`, `AssemblyKeyNameAttribute`) and
/// the resources passed on the command line. Module 0 is always the primary module.
///
/// ```rust
/// use dotemit::{
///     metadata::identity::{AssemblyIdentity, AssemblyVersion},
///     symbols::{ModuleSymbol, SourceAssembly},
/// };
///
/// let assembly = SourceAssembly::new(
///     AssemblyIdentity::new("App", AssemblyVersion::new(1, 0, 0, 0)),
///     ModuleSymbol::primary("App.dll", Vec::new()),
/// );
/// assert_eq!(assembly.modules().len(), 1);
/// assert_eq!(assembly.metadata_name(), "App");
/// ```
#[derive(Debug, Clone)]
pub struct SourceAssembly {
    identity: AssemblyIdentity,
    modules: Vec<ModuleSymbolRc>,
    hash_algorithm: u32,
    flags: AssemblyFlags,
    signature_key: Option<String>,
    resources: Vec<ResourceDescription>,
}

impl SourceAssembly {
    /// Creates an assembly with a single primary module, SHA-1 file hashes and no resources.
    #[must_use]
    pub fn new(identity: AssemblyIdentity, primary: ModuleSymbolRc) -> Self {
        SourceAssembly {
            identity,
            modules: vec![primary],
            hash_algorithm: AssemblyHashAlgorithm::SHA1,
            flags: AssemblyFlags::empty(),
            signature_key: None,
            resources: Vec::new(),
        }
    }

    /// Appends a linked module.
    #[must_use]
    pub fn with_linked_module(mut self, module: ModuleSymbolRc) -> Self {
        self.modules.push(module);
        self
    }

    /// Sets the `AssemblyHashAlgorithm` used for file hashes.
    #[must_use]
    pub fn with_hash_algorithm(mut self, hash_algorithm: u32) -> Self {
        self.hash_algorithm = hash_algorithm;
        self
    }

    /// Sets flags from `AssemblyFlagsAttribute`.
    #[must_use]
    pub fn with_flags(mut self, flags: AssemblyFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the key container name used for signing.
    #[must_use]
    pub fn with_signature_key(mut self, signature_key: impl Into<String>) -> Self {
        self.signature_key = Some(signature_key.into());
        self
    }

    /// Appends a resource.
    #[must_use]
    pub fn with_resource(mut self, resource: ResourceDescription) -> Self {
        self.resources.push(resource);
        self
    }

    /// Bound identity.
    #[must_use]
    pub fn identity(&self) -> &AssemblyIdentity {
        &self.identity
    }

    /// Name of the assembly in metadata.
    #[must_use]
    pub fn metadata_name(&self) -> &str {
        &self.identity.name
    }

    /// All modules, the primary one first.
    #[must_use]
    pub fn modules(&self) -> &[ModuleSymbolRc] {
        &self.modules
    }

    /// The primary module.
    #[must_use]
    pub fn primary_module(&self) -> &ModuleSymbolRc {
        &self.modules[0]
    }

    /// Linked modules, in the order they were added.
    #[must_use]
    pub fn linked_modules(&self) -> &[ModuleSymbolRc] {
        &self.modules[1..]
    }

    /// Declared hash algorithm.
    #[must_use]
    pub fn hash_algorithm(&self) -> u32 {
        self.hash_algorithm
    }

    /// Flags from `AssemblyFlagsAttribute`.
    #[must_use]
    pub fn flags(&self) -> AssemblyFlags {
        self.flags
    }

    /// Signing key container.
    #[must_use]
    pub fn signature_key(&self) -> Option<&str> {
        self.signature_key.as_deref()
    }

    /// Resources, in command line order.
    #[must_use]
    pub fn resources(&self) -> &[ResourceDescription] {
        &self.resources
    }
}

/// Configuration of an [`crate::emit::AssemblyBuilder`]
///
/// The defaults match what the command line compiler uses. Limits are enforced as diagnostics,
/// never as errors: exceeding one still produces a complete model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Longest name, in UTF-8 bytes, accepted for the `#Strings` heap (default: 1023)
    /// Longer file names report `MetadataNameTooLong`
    pub max_metadata_name_length: usize,

    /// Read linked modules in parallel when harvesting their embedded resources
    /// Output order is the module order either way
    pub parallel_harvest: bool,

    /// Initial capacity of pooled scratch lists (default: 16)
    pub scratch_capacity: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            max_metadata_name_length: 1023,
            parallel_harvest: true,
            scratch_capacity: 16,
        }
    }
}

impl EmitOptions {
    /// Creates a configuration for deterministic, single-threaded emission
    ///
    /// Useful for reproducing diagnostics and in tests that count log events.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_harvest: false,
            ..Self::default()
        }
    }

    /// Creates a configuration for large multi-module builds
    #[must_use]
    pub fn large() -> Self {
        Self {
            scratch_capacity: 256,
            ..Self::default()
        }
    }
}

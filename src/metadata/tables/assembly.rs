use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Flags of the Assembly and AssemblyRef tables, §II.23.1.2
    pub struct AssemblyFlags: u32 {
        /// The assembly reference holds the full (unhashed) public key
        const PUBLIC_KEY = 0x0001;
        /// The implementation of this assembly used at runtime is not expected to match the version seen at compile time
        const RETARGETABLE = 0x0100;
        /// Content type: Windows Runtime metadata
        const WINDOWS_RUNTIME = 0x0200;
        /// Reserved: the JIT should not optimize the assembly
        const DISABLE_JIT_COMPILE_OPTIMIZER = 0x4000;
        /// Reserved: the JIT should track the assembly
        const ENABLE_JIT_COMPILE_TRACKING = 0x8000;
    }
}

impl AssemblyFlags {
    /// Bits that encode the content type
    pub const CONTENT_TYPE_MASK: u32 = 0x0E00;
}

#[allow(non_snake_case)]
/// Identifiers of the hash algorithms an assembly can declare in its `HashAlgId` column
pub mod AssemblyHashAlgorithm {
    /// No hash, file hashes are empty
    pub const NONE: u32 = 0x0000;
    /// MD5
    pub const MD5: u32 = 0x8003;
    /// SHA-1, the default
    pub const SHA1: u32 = 0x8004;
    /// SHA-256
    pub const SHA256: u32 = 0x800C;
    /// SHA-384
    pub const SHA384: u32 = 0x800D;
    /// SHA-512
    pub const SHA512: u32 = 0x800E;
}

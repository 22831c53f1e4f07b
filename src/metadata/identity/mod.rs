//! Assembly identity and strong-name hashing.
//!
//! # ECMA-335 References
//!
//! - **Section II.6.2.1.3**: PublicKeyToken - defines public key token computation
//! - **Section II.22.2**: Assembly table - defines the columns an identity is projected into
//! - **Section II.22.19**: File table - defines the hash stored for each linked file
//!
//! # Key Components
//!
//! - [`AssemblyIdentity`] - Name, version, culture, strong name, content type
//! - [`AssemblyVersion`] - Four-part version numbering with parsing
//! - [`hash_data`] - File hashing with the assembly's declared algorithm
//! - [`public_key_token`] - SHA-1 based token derivation
//!
//! # Examples
//!
//! ```rust
//! use dotemit::metadata::{
//!     identity::{hash_data, AssemblyIdentity, AssemblyVersion},
//!     tables::{AssemblyFlags, AssemblyHashAlgorithm},
//! };
//!
//! let identity = AssemblyIdentity::new("Contoso", AssemblyVersion::new(1, 0, 0, 0))
//!     .with_public_key(vec![0x00, 0x24, 0x00, 0x00]);
//! assert!(identity.flags().contains(AssemblyFlags::PUBLIC_KEY));
//!
//! let hash = hash_data(AssemblyHashAlgorithm::SHA256, b"module bytes")?;
//! assert_eq!(hash.len(), 32);
//! # Ok::<(), dotemit::Error>(())
//! ```

mod assembly;
mod cryptographic;

pub use assembly::{AssemblyContentType, AssemblyIdentity, AssemblyVersion};
pub use cryptographic::{hash_data, is_supported_algorithm, public_key_token, PUBLIC_KEY_TOKEN_SIZE};

//! Hashing for strong names and the File table.
//!
//! Two hashes show up in an assembly manifest. The public key token is always derived with
//! SHA-1, independent of the assembly's declared algorithm (§II.6.2.1.3). File hashes of linked
//! modules and resource files use the algorithm declared in the Assembly table's `HashAlgId`.

use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

use crate::{metadata::tables::AssemblyHashAlgorithm, Error, Result};

/// Size of a public key token in bytes
pub const PUBLIC_KEY_TOKEN_SIZE: usize = 8;

/// Returns `true` for the algorithms the emitter can compute file hashes with.
///
/// `NONE` counts as supported: the hashes are simply empty.
#[must_use]
pub fn is_supported_algorithm(algorithm: u32) -> bool {
    matches!(
        algorithm,
        AssemblyHashAlgorithm::NONE
            | AssemblyHashAlgorithm::MD5
            | AssemblyHashAlgorithm::SHA1
            | AssemblyHashAlgorithm::SHA256
            | AssemblyHashAlgorithm::SHA384
            | AssemblyHashAlgorithm::SHA512
    )
}

/// Hashes `data` with the `AssemblyHashAlgorithm` identified by `algorithm`.
///
/// # Errors
/// Returns [`Error::UnsupportedHashAlgorithm`] if the identifier isn't one of the known
/// algorithms.
pub fn hash_data(algorithm: u32, data: &[u8]) -> Result<Vec<u8>> {
    Ok(match algorithm {
        AssemblyHashAlgorithm::NONE => Vec::new(),
        AssemblyHashAlgorithm::MD5 => Md5::digest(data).to_vec(),
        AssemblyHashAlgorithm::SHA1 => Sha1::digest(data).to_vec(),
        AssemblyHashAlgorithm::SHA256 => Sha256::digest(data).to_vec(),
        AssemblyHashAlgorithm::SHA384 => Sha384::digest(data).to_vec(),
        AssemblyHashAlgorithm::SHA512 => Sha512::digest(data).to_vec(),
        _ => return Err(Error::UnsupportedHashAlgorithm(algorithm)),
    })
}

/// Computes the public key token: the last 8 bytes of the SHA-1 of the key, in reverse order.
///
/// An empty key has no token and yields an empty vector.
#[must_use]
pub fn public_key_token(public_key: &[u8]) -> Vec<u8> {
    if public_key.is_empty() {
        return Vec::new();
    }

    let digest = Sha1::digest(public_key);
    digest[digest.len() - PUBLIC_KEY_TOKEN_SIZE..]
        .iter()
        .rev()
        .copied()
        .collect()
}

/// Lowercase hex rendering used in display names.
pub(crate) fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;

    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, byte| {
        let _ = write!(out, "{byte:02x}");
        out
    })
}

/// Parses a hex string with an even number of digits.
pub(crate) fn from_hex(value: &str) -> Result<Vec<u8>> {
    if value.len() % 2 != 0 || !value.is_ascii() {
        return Err(malformed_error!("Invalid hex string '{}'", value));
    }

    (0..value.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&value[i..i + 2], 16)
                .map_err(|_| malformed_error!("Invalid hex string '{}'", value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The ECMA standard public key
    const ECMA_KEY: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0];

    #[test]
    fn known_digests() {
        assert_eq!(
            to_hex(&hash_data(AssemblyHashAlgorithm::MD5, b"abc").unwrap()),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            to_hex(&hash_data(AssemblyHashAlgorithm::SHA1, b"abc").unwrap()),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            to_hex(&hash_data(AssemblyHashAlgorithm::SHA256, b"abc").unwrap()),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            hash_data(AssemblyHashAlgorithm::SHA384, b"abc").unwrap().len(),
            48
        );
        assert_eq!(
            hash_data(AssemblyHashAlgorithm::SHA512, b"abc").unwrap().len(),
            64
        );
        assert!(hash_data(AssemblyHashAlgorithm::NONE, b"abc")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn unsupported_algorithm() {
        assert!(!is_supported_algorithm(0x8001));
        assert!(matches!(
            hash_data(0x8001, b"abc"),
            Err(Error::UnsupportedHashAlgorithm(0x8001))
        ));
    }

    #[test]
    fn supported_algorithms() {
        for algorithm in [
            AssemblyHashAlgorithm::NONE,
            AssemblyHashAlgorithm::MD5,
            AssemblyHashAlgorithm::SHA1,
            AssemblyHashAlgorithm::SHA256,
            AssemblyHashAlgorithm::SHA384,
            AssemblyHashAlgorithm::SHA512,
        ] {
            assert!(is_supported_algorithm(algorithm));
            assert!(hash_data(algorithm, b"").is_ok());
        }
    }

    #[test]
    fn ecma_token() {
        let token = public_key_token(&ECMA_KEY);
        assert_eq!(token.len(), PUBLIC_KEY_TOKEN_SIZE);
        assert_eq!(to_hex(&token), "b77a5c561934e089");
    }

    #[test]
    fn empty_key_has_no_token() {
        assert!(public_key_token(&[]).is_empty());
    }

    #[test]
    fn hex() {
        assert_eq!(from_hex("b77a5c561934e089").unwrap(), public_key_token(&ECMA_KEY));
        assert_eq!(from_hex("").unwrap(), Vec::<u8>::new());
        assert!(from_hex("abc").is_err());
        assert!(from_hex("zz").is_err());
    }
}

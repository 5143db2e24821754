//! HKDF (RFC 5869) over the SHA-2 family.

use hkdf::Hkdf;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use zeroize::Zeroize;

use crate::error::{HybridKemError, Result};
use crate::params::{validate_output_len, HashType};
use crate::types::SymmetricKey;

/// HKDF-Extract with `salt` over `ikm`, then HKDF-Expand with `info` to
/// `output_len` bytes.
pub fn derive(
    hash: HashType,
    salt: &[u8],
    ikm: &[u8],
    info: &[u8],
    output_len: usize,
) -> Result<SymmetricKey> {
    validate_output_len(hash, output_len)?;

    let mut okm = vec![0u8; output_len];
    let expanded = match hash {
        HashType::Sha224 => Hkdf::<Sha224>::new(Some(salt), ikm).expand(info, &mut okm),
        HashType::Sha256 => Hkdf::<Sha256>::new(Some(salt), ikm).expand(info, &mut okm),
        HashType::Sha384 => Hkdf::<Sha384>::new(Some(salt), ikm).expand(info, &mut okm),
        HashType::Sha512 => Hkdf::<Sha512>::new(Some(salt), ikm).expand(info, &mut okm),
        HashType::UnknownHash => {
            return Err(HybridKemError::UnsupportedAlgorithm(format!(
                "hash {} is not supported",
                hash
            )))
        }
    };

    if expanded.is_err() {
        okm.zeroize();
        return Err(HybridKemError::Internal(format!(
            "HKDF-{} expansion to {} bytes failed",
            hash, output_len
        )));
    }

    Ok(SymmetricKey::new(okm))
}

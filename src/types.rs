//! Key material and wire types shared by sender and recipient.
//!
//! Wire layout of an encapsulated message (no length prefix, no delimiter):
//!
//! ```text
//! [ classical public encoding ][ lattice ciphertext ]
//! ```

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{ensure_len, HybridKemError, Result};

/// Derived symmetric key, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    bytes: Vec<u8>,
}

impl SymmetricKey {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for SymmetricKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for SymmetricKey {}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymmetricKey([REDACTED; {}])", self.bytes.len())
    }
}

/// `classical public encoding ‖ lattice ciphertext`, as sent to the recipient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncapsulatedMessage {
    bytes: Vec<u8>,
    classical_len: usize,
}

impl EncapsulatedMessage {
    pub(crate) fn from_parts(classical: &[u8], lattice_ciphertext: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(classical.len() + lattice_ciphertext.len());
        bytes.extend_from_slice(classical);
        bytes.extend_from_slice(lattice_ciphertext);
        Self {
            bytes,
            classical_len: classical.len(),
        }
    }

    /// Wrap received bytes, checking the fixed total length.
    pub fn from_bytes(bytes: &[u8], classical_len: usize, lattice_ciphertext_len: usize) -> Result<Self> {
        let expected = classical_len.checked_add(lattice_ciphertext_len).ok_or_else(|| {
            HybridKemError::InvalidArgument(format!(
                "component lengths {} + {} overflow",
                classical_len, lattice_ciphertext_len
            ))
        })?;
        ensure_len("encapsulated message", bytes, expected)?;
        Ok(Self {
            bytes: bytes.to_vec(),
            classical_len,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Split into (classical public encoding, lattice ciphertext).
    pub fn split(&self) -> (&[u8], &[u8]) {
        self.bytes.split_at(self.classical_len)
    }
}

impl AsRef<[u8]> for EncapsulatedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Result of sender-side encapsulation.
#[derive(Debug)]
pub struct KemKey {
    kem_bytes: EncapsulatedMessage,
    symmetric_key: SymmetricKey,
}

impl KemKey {
    pub(crate) fn new(kem_bytes: EncapsulatedMessage, symmetric_key: SymmetricKey) -> Self {
        Self {
            kem_bytes,
            symmetric_key,
        }
    }

    pub fn kem_bytes(&self) -> &EncapsulatedMessage {
        &self.kem_bytes
    }

    pub fn symmetric_key(&self) -> &SymmetricKey {
        &self.symmetric_key
    }

    pub fn into_parts(self) -> (EncapsulatedMessage, SymmetricKey) {
        (self.kem_bytes, self.symmetric_key)
    }
}

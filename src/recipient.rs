//! Recipient side of the hybrid KEM.
//!
//! The only message-dependent failure is an encapsulated message of the wrong
//! length. A message of the right length always produces a key; if either
//! component was modified in transit that key simply differs from the
//! sender's. Nothing here reports or logs whether the lattice ciphertext was
//! valid. Other errors come from the KDF parameters or from a fault inside a
//! primitive.

use zeroize::Zeroizing;

use crate::error::{ensure_len, Result};
use crate::keypair::ensure_supported_curve;
use crate::params::{validate_output_len, EcPointFormat, EllipticCurveType, HashType, KdfParams};
use crate::primitives::{kdf, CurvePrimitive, LatticePrimitive, MlKem1024, X25519};
use crate::types::SymmetricKey;

/// Owns the recipient's private halves; both are wiped when it is dropped.
pub struct HybridRecipientKem<C: CurvePrimitive, L: LatticePrimitive> {
    classical_private: C::PrivateKey,
    lattice_private: L::PrivateKey,
}

/// X25519 + ML-KEM-1024 recipient.
pub type RecipientKem = HybridRecipientKem<X25519, MlKem1024>;

impl<C: CurvePrimitive, L: LatticePrimitive> HybridRecipientKem<C, L> {
    pub fn new(
        curve: EllipticCurveType,
        classical_private: C::PrivateKey,
        lattice_private: L::PrivateKey,
    ) -> Result<Self> {
        ensure_supported_curve::<C>(curve)?;

        log::debug!("Constructed {} + {} recipient KEM", C::NAME, L::NAME);

        Ok(Self {
            classical_private,
            lattice_private,
        })
    }

    /// Expected length of an encapsulated message.
    pub fn kem_bytes_len(&self) -> usize {
        C::PUBLIC_KEY_LEN + L::CIPHERTEXT_LEN
    }

    /// `point_format` is accepted for interface uniformity; the supported
    /// curve has a single encoding.
    pub fn generate_key(
        &self,
        kem_bytes: &[u8],
        hash: HashType,
        salt: &[u8],
        info: &[u8],
        output_len: usize,
        _point_format: EcPointFormat,
    ) -> Result<SymmetricKey> {
        ensure_len("encapsulated message", kem_bytes, self.kem_bytes_len())?;
        validate_output_len(hash, output_len)?;

        let (peer_encoding, lattice_ciphertext) = kem_bytes.split_at(C::PUBLIC_KEY_LEN);
        let peer_public = C::decode_point(peer_encoding)?;
        let lattice_ciphertext = L::parse_ciphertext(lattice_ciphertext)?;

        let ec_secret = C::scalar_multiply(&self.classical_private, &peer_public);
        let lattice_secret = L::decapsulate(&self.lattice_private, &lattice_ciphertext)?;

        let mut ikm = Zeroizing::new(Vec::with_capacity(
            ec_secret.as_ref().len() + lattice_secret.as_ref().len(),
        ));
        ikm.extend_from_slice(ec_secret.as_ref());
        ikm.extend_from_slice(lattice_secret.as_ref());

        kdf::derive(hash, salt, &ikm, info, output_len)
    }

    pub fn generate_key_with_params(&self, kem_bytes: &[u8], params: &KdfParams) -> Result<SymmetricKey> {
        self.generate_key(
            kem_bytes,
            params.hash,
            &params.salt,
            &params.info,
            params.output_len,
            params.point_format,
        )
    }
}

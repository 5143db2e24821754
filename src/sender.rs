//! Sender side of the hybrid KEM.
//!
//! Each call to `generate_key` draws a fresh ephemeral classical key pair and
//! fresh lattice encapsulation randomness, then derives
//! `HKDF(salt, ecdh_secret ‖ lattice_secret, info)`.

use rand::rngs::OsRng;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::error::Result;
use crate::keypair::ensure_supported_curve;
use crate::params::{validate_output_len, EcPointFormat, EllipticCurveType, HashType, KdfParams};
use crate::primitives::{kdf, CurvePrimitive, LatticePrimitive, MlKem1024, X25519};
use crate::types::{EncapsulatedMessage, KemKey};

/// Holds a recipient's public halves.
pub struct HybridSenderKem<C: CurvePrimitive, L: LatticePrimitive> {
    peer_classical: C::PublicKey,
    peer_lattice: L::PublicKey,
}

/// X25519 + ML-KEM-1024 sender.
pub type SenderKem = HybridSenderKem<X25519, MlKem1024>;

impl<C: CurvePrimitive, L: LatticePrimitive> HybridSenderKem<C, L> {
    /// `public_y` is accepted for interface stability and ignored: the
    /// supported curve encodes its public key as a single coordinate.
    pub fn new(
        curve: EllipticCurveType,
        public_x: &[u8],
        _public_y: &[u8],
        lattice_public: &[u8],
    ) -> Result<Self> {
        ensure_supported_curve::<C>(curve)?;
        let peer_classical = C::decode_point(public_x)?;
        let peer_lattice = L::parse_public_key(lattice_public)?;

        log::debug!("Constructed {} + {} sender KEM", C::NAME, L::NAME);

        Ok(Self {
            peer_classical,
            peer_lattice,
        })
    }

    /// Length of every encapsulated message this sender produces.
    pub fn kem_bytes_len(&self) -> usize {
        C::PUBLIC_KEY_LEN + L::CIPHERTEXT_LEN
    }

    pub fn generate_key(
        &self,
        hash: HashType,
        salt: &[u8],
        info: &[u8],
        output_len: usize,
        point_format: EcPointFormat,
    ) -> Result<KemKey> {
        self.generate_key_with_rng(&mut OsRng, hash, salt, info, output_len, point_format)
    }

    pub fn generate_key_with_params(&self, params: &KdfParams) -> Result<KemKey> {
        self.generate_key(
            params.hash,
            &params.salt,
            &params.info,
            params.output_len,
            params.point_format,
        )
    }

    /// Encapsulate using `rng` for both the ephemeral key and the lattice
    /// encapsulation.
    pub fn generate_key_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        hash: HashType,
        salt: &[u8],
        info: &[u8],
        output_len: usize,
        point_format: EcPointFormat,
    ) -> Result<KemKey> {
        validate_output_len(hash, output_len)?;

        let (ephemeral_public, ephemeral_private) = C::generate_keypair(rng);
        let ec_secret = C::scalar_multiply(&ephemeral_private, &self.peer_classical);
        let ephemeral_encoding = C::encode_point(&ephemeral_public, point_format);

        let (lattice_ciphertext, lattice_secret) = L::encapsulate(&self.peer_lattice, rng)?;

        // Classical secret first, always.
        let mut ikm = Zeroizing::new(Vec::with_capacity(
            ec_secret.as_ref().len() + lattice_secret.as_ref().len(),
        ));
        ikm.extend_from_slice(ec_secret.as_ref());
        ikm.extend_from_slice(lattice_secret.as_ref());

        let symmetric_key = kdf::derive(hash, salt, &ikm, info, output_len)?;
        let kem_bytes = EncapsulatedMessage::from_parts(&ephemeral_encoding, lattice_ciphertext.as_ref());

        Ok(KemKey::new(kem_bytes, symmetric_key))
    }
}

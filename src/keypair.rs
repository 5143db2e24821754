//! Hybrid key pair generation: one classical key pair plus one lattice key
//! pair, generated independently.

use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::error::{HybridKemError, Result};
use crate::params::EllipticCurveType;
use crate::primitives::{CurvePrimitive, LatticePrimitive, MlKem1024, X25519};

/// Classical + lattice key pair.
///
/// The private halves are meant to be moved into a recipient KEM; the public
/// halves are what a sender is constructed from.
pub struct HybridKeyPair<C: CurvePrimitive, L: LatticePrimitive> {
    /// Encoded classical public point.
    pub classical_public: C::PublicKey,
    /// Second public coordinate. Always empty: X25519 keys have a single
    /// coordinate.
    pub classical_public_y: Vec<u8>,
    pub classical_private: C::PrivateKey,
    /// Canonical fixed-length encoding of the lattice public key.
    pub lattice_public_marshaled: Vec<u8>,
    pub lattice_private: L::PrivateKey,
}

/// X25519 + ML-KEM-1024 key pair.
pub type X25519MlKemKeyPair = HybridKeyPair<X25519, MlKem1024>;

pub(crate) fn ensure_supported_curve<C: CurvePrimitive>(curve: EllipticCurveType) -> Result<()> {
    if curve != C::CURVE_TYPE {
        log::warn!("Rejected curve {} (only {} is supported)", curve, C::CURVE_TYPE);
        return Err(HybridKemError::UnsupportedAlgorithm(format!(
            "curve {} is not supported, expected {}",
            curve,
            C::CURVE_TYPE
        )));
    }
    Ok(())
}

/// Generate a lattice key pair from caller-supplied entropy and marshal its
/// public key.
pub fn generate_lattice_keypair<L: LatticePrimitive>(entropy: &[u8]) -> Result<(Vec<u8>, L::PrivateKey)> {
    let (public, private) = L::generate_keypair(entropy)?;
    let marshaled = L::marshal_public_key(&public);
    if marshaled.len() != L::PUBLIC_KEY_LEN {
        return Err(HybridKemError::Internal(format!(
            "{} public key marshaled to {} bytes, expected {}",
            L::NAME,
            marshaled.len(),
            L::PUBLIC_KEY_LEN
        )));
    }
    Ok((marshaled, private))
}

/// Generate a hybrid key pair with randomness from `rng`.
pub fn generate_keypair_with_rng<C: CurvePrimitive, L: LatticePrimitive>(
    curve: EllipticCurveType,
    rng: &mut impl CryptoRngCore,
) -> Result<HybridKeyPair<C, L>> {
    ensure_supported_curve::<C>(curve)?;

    let (classical_public, classical_private) = C::generate_keypair(rng);

    let mut entropy = Zeroizing::new(vec![0u8; L::KEYGEN_ENTROPY_LEN]);
    rng.fill_bytes(&mut entropy);
    let (lattice_public_marshaled, lattice_private) = generate_lattice_keypair::<L>(&entropy)?;

    log::debug!("Generated hybrid {} + {} key pair", C::NAME, L::NAME);

    Ok(HybridKeyPair {
        classical_public,
        classical_public_y: Vec::new(),
        classical_private,
        lattice_public_marshaled,
        lattice_private,
    })
}

/// Generate an X25519 + ML-KEM-1024 key pair from the OS random source.
pub fn generate_hybrid_keypair(curve: EllipticCurveType) -> Result<X25519MlKemKeyPair> {
    generate_keypair_with_rng::<X25519, MlKem1024>(curve, &mut OsRng)
}

/// Same as [`generate_hybrid_keypair`] with a caller-supplied random source.
pub fn generate_hybrid_keypair_with_rng(
    curve: EllipticCurveType,
    rng: &mut impl CryptoRngCore,
) -> Result<X25519MlKemKeyPair> {
    generate_keypair_with_rng::<X25519, MlKem1024>(curve, rng)
}

/// Deterministic key pair from a 32-byte seed (ChaCha20 stream).
pub fn generate_hybrid_keypair_from_seed(
    curve: EllipticCurveType,
    seed: &[u8; 32],
) -> Result<X25519MlKemKeyPair> {
    let mut rng = ChaCha20Rng::from_seed(*seed);
    generate_keypair_with_rng::<X25519, MlKem1024>(curve, &mut rng)
}

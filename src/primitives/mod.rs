//! Narrow interfaces over the classical curve and the lattice KEM, plus the
//! HKDF key schedule.
//!
//! The hybrid sender and recipient only ever talk to these traits. In
//! particular [`LatticePrimitive::decapsulate`] must hand back a pseudorandom
//! secret for a tampered ciphertext; its error channel carries primitive
//! faults only, so callers cannot branch on ciphertext validity.

use rand_core::CryptoRngCore;
use zeroize::ZeroizeOnDrop;

use crate::error::Result;
use crate::params::{EcPointFormat, EllipticCurveType};

pub mod kdf;
pub mod mlkem;
pub mod x25519;

pub use self::mlkem::MlKem1024;
pub use self::x25519::X25519;

/// Classical Diffie-Hellman curve.
pub trait CurvePrimitive {
    /// The only curve type this implementation accepts.
    const CURVE_TYPE: EllipticCurveType;
    const NAME: &'static str;
    /// Length of the encoded public point.
    const PUBLIC_KEY_LEN: usize;

    type PublicKey: Clone + AsRef<[u8]> + Send + Sync;
    type PrivateKey: ZeroizeOnDrop + Send + Sync;
    type SharedSecret: AsRef<[u8]> + ZeroizeOnDrop;

    fn generate_keypair(rng: &mut impl CryptoRngCore) -> (Self::PublicKey, Self::PrivateKey);

    fn scalar_multiply(private: &Self::PrivateKey, peer_public: &Self::PublicKey) -> Self::SharedSecret;

    fn encode_point(public: &Self::PublicKey, format: EcPointFormat) -> Vec<u8>;

    fn decode_point(bytes: &[u8]) -> Result<Self::PublicKey>;
}

/// Post-quantum KEM with implicit rejection.
pub trait LatticePrimitive {
    const NAME: &'static str;
    /// Length of the marshaled public key.
    const PUBLIC_KEY_LEN: usize;
    const CIPHERTEXT_LEN: usize;
    /// Entropy consumed by key generation.
    const KEYGEN_ENTROPY_LEN: usize;

    type PublicKey: Clone + AsRef<[u8]> + Send + Sync;
    type PrivateKey: ZeroizeOnDrop + Send + Sync;
    type Ciphertext: AsRef<[u8]>;
    type SharedSecret: AsRef<[u8]> + ZeroizeOnDrop;

    fn generate_keypair(entropy: &[u8]) -> Result<(Self::PublicKey, Self::PrivateKey)>;

    fn marshal_public_key(public: &Self::PublicKey) -> Vec<u8> {
        public.as_ref().to_vec()
    }

    fn parse_public_key(bytes: &[u8]) -> Result<Self::PublicKey>;

    fn parse_ciphertext(bytes: &[u8]) -> Result<Self::Ciphertext>;

    fn encapsulate(
        public: &Self::PublicKey,
        rng: &mut impl CryptoRngCore,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Invalid ciphertexts yield a deterministic pseudorandom secret, never
    /// `Err`. `Err` is reserved for faults inside the primitive and maps to
    /// [`HybridKemError::Internal`](crate::HybridKemError::Internal).
    fn decapsulate(private: &Self::PrivateKey, ciphertext: &Self::Ciphertext) -> Result<Self::SharedSecret>;
}

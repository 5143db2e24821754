//! X25519 (RFC 7748) as the classical half of the hybrid KEM.
//!
//! Public keys are the 32-byte raw u-coordinate; there is no compressed or
//! uncompressed variant, so the point-format hint is ignored.

use rand_core::CryptoRngCore;
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::CurvePrimitive;
use crate::error::{ensure_len, Result};
use crate::params::{EcPointFormat, EllipticCurveType};

pub const X25519_PUBLIC_KEY_BYTES: usize = 32;
pub const X25519_PRIVATE_KEY_BYTES: usize = 32;
pub const X25519_SHARED_SECRET_BYTES: usize = 32;

pub struct X25519;

/// Not `Clone`: a recipient holds the only copy.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct X25519PrivateKey {
    bytes: [u8; X25519_PRIVATE_KEY_BYTES],
}

impl X25519PrivateKey {
    pub fn from_bytes(bytes: [u8; X25519_PRIVATE_KEY_BYTES]) -> Self {
        Self { bytes }
    }

    pub fn public_key(&self) -> [u8; X25519_PUBLIC_KEY_BYTES] {
        PublicKey::from(&StaticSecret::from(self.bytes)).to_bytes()
    }
}

#[derive(Zeroize, ZeroizeOnDrop)]
pub struct X25519SharedSecret([u8; X25519_SHARED_SECRET_BYTES]);

impl AsRef<[u8]> for X25519SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl CurvePrimitive for X25519 {
    const CURVE_TYPE: EllipticCurveType = EllipticCurveType::Curve25519;
    const NAME: &'static str = "X25519";
    const PUBLIC_KEY_LEN: usize = X25519_PUBLIC_KEY_BYTES;

    type PublicKey = [u8; X25519_PUBLIC_KEY_BYTES];
    type PrivateKey = X25519PrivateKey;
    type SharedSecret = X25519SharedSecret;

    fn generate_keypair(rng: &mut impl CryptoRngCore) -> (Self::PublicKey, Self::PrivateKey) {
        let secret = StaticSecret::random_from_rng(rng);
        let public = PublicKey::from(&secret);
        (
            public.to_bytes(),
            X25519PrivateKey {
                bytes: secret.to_bytes(),
            },
        )
    }

    fn scalar_multiply(private: &Self::PrivateKey, peer_public: &Self::PublicKey) -> Self::SharedSecret {
        let secret = StaticSecret::from(private.bytes);
        let shared = secret.diffie_hellman(&PublicKey::from(*peer_public));
        X25519SharedSecret(shared.to_bytes())
    }

    fn encode_point(public: &Self::PublicKey, _format: EcPointFormat) -> Vec<u8> {
        public.to_vec()
    }

    fn decode_point(bytes: &[u8]) -> Result<Self::PublicKey> {
        ensure_len("X25519 public key", bytes, X25519_PUBLIC_KEY_BYTES)?;
        let mut public = [0u8; X25519_PUBLIC_KEY_BYTES];
        public.copy_from_slice(bytes);
        Ok(public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HybridKemError;
    use hex_literal::hex;
    use rand::rngs::OsRng;

    #[test]
    fn test_rfc7748_vector() {
        // RFC 7748 section 6.1
        let alice = X25519PrivateKey::from_bytes(hex!(
            "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a"
        ));
        let bob = X25519PrivateKey::from_bytes(hex!(
            "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb"
        ));
        assert_eq!(
            alice.public_key(),
            hex!("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a")
        );
        assert_eq!(
            bob.public_key(),
            hex!("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f")
        );

        let shared = X25519::scalar_multiply(&alice, &bob.public_key());
        assert_eq!(
            shared.as_ref(),
            hex!("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742")
        );
    }

    #[test]
    fn test_generated_keypair_agrees() {
        let (pk1, sk1) = X25519::generate_keypair(&mut OsRng);
        let (pk2, sk2) = X25519::generate_keypair(&mut OsRng);
        assert_ne!(pk1, pk2);
        assert_eq!(sk1.public_key(), pk1);

        let ss1 = X25519::scalar_multiply(&sk1, &pk2);
        let ss2 = X25519::scalar_multiply(&sk2, &pk1);
        assert_eq!(ss1.as_ref(), ss2.as_ref());
    }

    #[test]
    fn test_encoding_ignores_point_format() {
        let (pk, _) = X25519::generate_keypair(&mut OsRng);
        let raw = X25519::encode_point(&pk, EcPointFormat::Uncompressed);
        assert_eq!(raw, X25519::encode_point(&pk, EcPointFormat::Compressed));
        assert_eq!(
            raw,
            X25519::encode_point(&pk, EcPointFormat::DoNotUseCryptoApiCompressed)
        );
        assert_eq!(X25519::decode_point(&raw).unwrap(), pk);
    }

    struct CloneCheck<T>(std::marker::PhantomData<T>);

    trait NotClone {
        fn is_clone(&self) -> bool {
            false
        }
    }

    impl<T> NotClone for CloneCheck<T> {}

    impl<T: Clone> CloneCheck<T> {
        fn is_clone(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_private_key_cannot_be_copied() {
        assert!(!CloneCheck::<X25519PrivateKey>(std::marker::PhantomData).is_clone());
        assert!(CloneCheck::<[u8; 32]>(std::marker::PhantomData).is_clone());

        fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}
        assert_zeroize_on_drop::<X25519PrivateKey>();

        // Rebuilding from the raw scalar is the only way to get a second key.
        let (pk, sk) = X25519::generate_keypair(&mut OsRng);
        let rebuilt = X25519PrivateKey::from_bytes(sk.bytes);
        assert_eq!(rebuilt.public_key(), pk);
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        assert!(matches!(
            X25519::decode_point(&[0u8; 31]),
            Err(HybridKemError::InvalidArgument(_))
        ));
        assert!(matches!(
            X25519::decode_point(&[0u8; 33]),
            Err(HybridKemError::InvalidArgument(_))
        ));
    }
}

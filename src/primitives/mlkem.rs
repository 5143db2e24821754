//! ML-KEM-1024 (NIST FIPS 203) as the post-quantum half of the hybrid KEM.
//!
//! Sizes:
//! - Encapsulation key (public):  1568 bytes
//! - Decapsulation key (secret):  3168 bytes
//! - Ciphertext:                  1568 bytes
//! - Shared secret:               32 bytes
//!
//! Decapsulation uses FIPS 203 implicit rejection: a modified ciphertext
//! produces a pseudorandom shared secret derived from the private key, never
//! an error.

use std::ops::DerefMut;

use ml_kem::kem::{Decapsulate, DecapsulationKey, Encapsulate, EncapsulationKey};
use ml_kem::{Encoded, EncodedSizeUser, KemCore, MlKem1024Params};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::LatticePrimitive;
use crate::error::{ensure_len, HybridKemError, Result};

/// ML-KEM-1024 encapsulation key (public) size in bytes
pub const MLKEM1024_EK_BYTES: usize = 1568;
/// ML-KEM-1024 ciphertext size in bytes
pub const MLKEM1024_CT_BYTES: usize = 1568;
/// ML-KEM-1024 decapsulation key (secret) size in bytes
pub const MLKEM1024_DK_BYTES: usize = 3168;
pub const MLKEM1024_SS_BYTES: usize = 32;
/// Seed for the ChaCha20 stream that drives key generation.
pub const MLKEM1024_KEYGEN_ENTROPY_BYTES: usize = 32;

pub struct MlKem1024;

type Ek = EncapsulationKey<MlKem1024Params>;
type Dk = DecapsulationKey<MlKem1024Params>;

/// Marshaled encapsulation key.
#[derive(Clone, PartialEq, Eq)]
pub struct MlKemPublicKey(Encoded<Ek>);

impl AsRef<[u8]> for MlKemPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl std::fmt::Debug for MlKemPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MlKemPublicKey({}...)", hex::encode(&self.0[..8]))
    }
}

/// Encoded decapsulation key, wiped on drop.
pub struct MlKemPrivateKey(Encoded<Dk>);

impl Drop for MlKemPrivateKey {
    fn drop(&mut self) {
        let bytes: &mut [u8] = &mut self.0;
        bytes.zeroize();
    }
}

impl ZeroizeOnDrop for MlKemPrivateKey {}

pub struct MlKemCiphertext(ml_kem::Ciphertext<ml_kem::MlKem1024>);

impl AsRef<[u8]> for MlKemCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MlKemSharedSecret([u8; MLKEM1024_SS_BYTES]);

impl MlKemSharedSecret {
    fn take<S: DerefMut<Target = [u8]>>(mut shared: S) -> Self {
        let mut secret = [0u8; MLKEM1024_SS_BYTES];
        secret.copy_from_slice(&shared[..]);
        shared.zeroize();
        Self(secret)
    }
}

impl AsRef<[u8]> for MlKemSharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl LatticePrimitive for MlKem1024 {
    const NAME: &'static str = "ML-KEM-1024";
    const PUBLIC_KEY_LEN: usize = MLKEM1024_EK_BYTES;
    const CIPHERTEXT_LEN: usize = MLKEM1024_CT_BYTES;
    const KEYGEN_ENTROPY_LEN: usize = MLKEM1024_KEYGEN_ENTROPY_BYTES;

    type PublicKey = MlKemPublicKey;
    type PrivateKey = MlKemPrivateKey;
    type Ciphertext = MlKemCiphertext;
    type SharedSecret = MlKemSharedSecret;

    fn generate_keypair(entropy: &[u8]) -> Result<(Self::PublicKey, Self::PrivateKey)> {
        ensure_len("ML-KEM key generation entropy", entropy, MLKEM1024_KEYGEN_ENTROPY_BYTES)?;
        let mut seed = [0u8; MLKEM1024_KEYGEN_ENTROPY_BYTES];
        seed.copy_from_slice(entropy);
        let mut rng = ChaCha20Rng::from_seed(seed);
        seed.zeroize();

        let (dk, ek) = ml_kem::MlKem1024::generate(&mut rng);
        Ok((MlKemPublicKey(ek.as_bytes()), MlKemPrivateKey(dk.as_bytes())))
    }

    fn parse_public_key(bytes: &[u8]) -> Result<Self::PublicKey> {
        ensure_len("ML-KEM-1024 public key", bytes, MLKEM1024_EK_BYTES)?;
        let encoded = Encoded::<Ek>::try_from(bytes)
            .map_err(|_| HybridKemError::InvalidArgument("malformed ML-KEM-1024 public key".to_string()))?;
        Ok(MlKemPublicKey(encoded))
    }

    fn parse_ciphertext(bytes: &[u8]) -> Result<Self::Ciphertext> {
        ensure_len("ML-KEM-1024 ciphertext", bytes, MLKEM1024_CT_BYTES)?;
        let ct = ml_kem::Ciphertext::<ml_kem::MlKem1024>::try_from(bytes)
            .map_err(|_| HybridKemError::InvalidArgument("malformed ML-KEM-1024 ciphertext".to_string()))?;
        Ok(MlKemCiphertext(ct))
    }

    fn encapsulate(
        public: &Self::PublicKey,
        rng: &mut impl CryptoRngCore,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)> {
        let ek = Ek::from_bytes(&public.0);
        let (ct, ss) = ek
            .encapsulate(rng)
            .map_err(|_| HybridKemError::Internal("ML-KEM encapsulation failed".to_string()))?;
        Ok((MlKemCiphertext(ct), MlKemSharedSecret::take(ss)))
    }

    fn decapsulate(private: &Self::PrivateKey, ciphertext: &Self::Ciphertext) -> Result<Self::SharedSecret> {
        let dk = Dk::from_bytes(&private.0);
        // ml-kem only reports Err for internal faults. A bad ciphertext still
        // decapsulates to the implicit-rejection secret.
        let ss = dk
            .decapsulate(&ciphertext.0)
            .map_err(|_| HybridKemError::Internal("ML-KEM decapsulation fault".to_string()))?;
        Ok(MlKemSharedSecret::take(ss))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;
    use rand::RngCore;

    fn random_keypair() -> (MlKemPublicKey, MlKemPrivateKey) {
        let mut entropy = [0u8; MLKEM1024_KEYGEN_ENTROPY_BYTES];
        OsRng.fill_bytes(&mut entropy);
        MlKem1024::generate_keypair(&entropy).unwrap()
    }

    #[test]
    fn test_keygen_is_deterministic_in_entropy() {
        let entropy = [7u8; MLKEM1024_KEYGEN_ENTROPY_BYTES];
        let (pk1, _) = MlKem1024::generate_keypair(&entropy).unwrap();
        let (pk2, _) = MlKem1024::generate_keypair(&entropy).unwrap();
        assert_eq!(pk1, pk2);

        let (pk3, _) = MlKem1024::generate_keypair(&[8u8; MLKEM1024_KEYGEN_ENTROPY_BYTES]).unwrap();
        assert_ne!(pk1, pk3);
        assert_eq!(MlKem1024::marshal_public_key(&pk1).len(), MLKEM1024_EK_BYTES);
    }

    #[test]
    fn test_keygen_rejects_bad_entropy_length() {
        assert!(matches!(
            MlKem1024::generate_keypair(&[0u8; 16]),
            Err(HybridKemError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_encapsulate_decapsulate() {
        let (pk, sk) = random_keypair();
        let (ct, ss) = MlKem1024::encapsulate(&pk, &mut OsRng).unwrap();
        assert_eq!(ct.as_ref().len(), MLKEM1024_CT_BYTES);

        let recovered = MlKem1024::decapsulate(&sk, &ct).unwrap();
        assert_eq!(ss.as_ref(), recovered.as_ref());
    }

    #[test]
    fn test_implicit_rejection() {
        let (pk, sk) = random_keypair();
        let (ct, ss) = MlKem1024::encapsulate(&pk, &mut OsRng).unwrap();

        let mut tampered = ct.as_ref().to_vec();
        tampered[0] ^= 0x01;
        let tampered = MlKem1024::parse_ciphertext(&tampered).unwrap();

        let rejected = MlKem1024::decapsulate(&sk, &tampered).expect("tampering is not an error");
        assert_ne!(ss.as_ref(), rejected.as_ref());

        // Rejection output is a deterministic function of key and ciphertext.
        let again = MlKem1024::decapsulate(&sk, &tampered).unwrap();
        assert_eq!(rejected.as_ref(), again.as_ref());
    }

    #[test]
    fn test_garbage_ciphertext_decapsulates() {
        let (_, sk) = random_keypair();
        for fill in [0x00u8, b'a', 0xff] {
            let ct = MlKem1024::parse_ciphertext(&[fill; MLKEM1024_CT_BYTES]).unwrap();
            let ss = MlKem1024::decapsulate(&sk, &ct).expect("implicit rejection");
            assert_eq!(ss.as_ref().len(), MLKEM1024_SS_BYTES);
        }
    }

    #[test]
    fn test_private_keys_wiped_on_drop() {
        fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}
        assert_zeroize_on_drop::<Dk>();
        assert_zeroize_on_drop::<MlKemPrivateKey>();
    }

    #[test]
    fn test_public_key_debug_is_short_ascii() {
        let (pk, _) = MlKem1024::generate_keypair(&[1u8; MLKEM1024_KEYGEN_ENTROPY_BYTES]).unwrap();
        let dbg = format!("{:?}", pk);
        assert!(dbg.is_ascii());
        assert!(dbg.starts_with("MlKemPublicKey("));
        assert!(dbg.ends_with("...)"));
        assert_eq!(dbg.len(), "MlKemPublicKey(...)".len() + 16);
    }

    #[test]
    fn test_parse_lengths() {
        assert!(MlKem1024::parse_public_key(&[0u8; MLKEM1024_EK_BYTES]).is_ok());
        assert!(matches!(
            MlKem1024::parse_public_key(&[0u8; MLKEM1024_EK_BYTES - 1]),
            Err(HybridKemError::InvalidArgument(_))
        ));
        assert!(matches!(
            MlKem1024::parse_ciphertext(&[0u8; MLKEM1024_CT_BYTES + 1]),
            Err(HybridKemError::InvalidArgument(_))
        ));
    }
}

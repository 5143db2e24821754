//! # Hybrid KEM
//!
//! **X25519 + ML-KEM-1024 hybrid key encapsulation with HKDF key derivation.**
//!
//! A sender holding a recipient's public keys produces an encapsulated
//! message and a symmetric key. The recipient recovers the same key from the
//! message with its private keys. An attacker has to break *both* X25519 and
//! ML-KEM-1024 to learn the key.
//!
//! - **Classical half**: ephemeral-static X25519 Diffie-Hellman
//! - **Post-quantum half**: ML-KEM-1024 (NIST FIPS 203) encapsulation
//! - **Key schedule**: `HKDF(salt, x25519_ss ‖ mlkem_ss, info, len)` over SHA-2
//! - **No decryption oracle**: a tampered message yields a different key,
//!   never an error
//!
//! ## Quick Start
//!
//! ```rust
//! use hybrid_kem::{
//!     generate_hybrid_keypair, EcPointFormat, EllipticCurveType, HashType, RecipientKem, SenderKem,
//! };
//!
//! let kp = generate_hybrid_keypair(EllipticCurveType::Curve25519).unwrap();
//!
//! let sender = SenderKem::new(
//!     EllipticCurveType::Curve25519,
//!     &kp.classical_public,
//!     &kp.classical_public_y,
//!     &kp.lattice_public_marshaled,
//! )
//! .unwrap();
//! let kem_key = sender
//!     .generate_key(HashType::Sha256, b"salt", b"info", 32, EcPointFormat::Uncompressed)
//!     .unwrap();
//!
//! let recipient =
//!     RecipientKem::new(EllipticCurveType::Curve25519, kp.classical_private, kp.lattice_private).unwrap();
//! let key = recipient
//!     .generate_key(
//!         kem_key.kem_bytes().as_bytes(),
//!         HashType::Sha256,
//!         b"salt",
//!         b"info",
//!         32,
//!         EcPointFormat::Uncompressed,
//!     )
//!     .unwrap();
//!
//! assert_eq!(&key, kem_key.symmetric_key());
//! ```
//!
//! ## Architecture
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`keypair`] | Hybrid key pair generation |
//! | [`sender`] | Encapsulation against a recipient's public keys |
//! | [`recipient`] | Decapsulation with the recipient's private keys |
//! | [`primitives`] | Curve / lattice interfaces, X25519, ML-KEM-1024, HKDF |
//! | [`params`] | Curve, hash and point-format identifiers, KDF parameters |
//! | [`types`] | Symmetric key, encapsulated message, sender result |
//! | [`error`] | Error taxonomy |
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Standard library support |
//! | `wasm` | No | WebAssembly support (`getrandom/js`) |

#![allow(clippy::too_many_arguments)]

// ── Public modules ──────────────────────────────────────────────────────────

pub mod error;

/// Curve, hash and point-format identifiers; KDF parameters.
pub mod params;

/// Curve and lattice interfaces with their X25519 / ML-KEM-1024
/// implementations, and the HKDF key schedule.
pub mod primitives;

pub mod types;

/// Hybrid key pair generation.
pub mod keypair;

pub mod sender;

pub mod recipient;

// ── Re-exports for convenience ──────────────────────────────────────────────

pub use error::{HybridKemError, Result};

pub use keypair::{
    generate_hybrid_keypair, generate_hybrid_keypair_from_seed, generate_hybrid_keypair_with_rng,
    generate_lattice_keypair, HybridKeyPair, X25519MlKemKeyPair,
};

pub use params::{EcPointFormat, EllipticCurveType, HashType, KdfParams};

pub use primitives::{CurvePrimitive, LatticePrimitive, MlKem1024, X25519};

pub use recipient::{HybridRecipientKem, RecipientKem};

pub use sender::{HybridSenderKem, SenderKem};

pub use types::{EncapsulatedMessage, KemKey, SymmetricKey};

/// Length of the X25519 + ML-KEM-1024 encapsulated message:
/// 32-byte ephemeral public key followed by the 1568-byte ciphertext.
pub const KEM_BYTES_LEN: usize =
    primitives::x25519::X25519_PUBLIC_KEY_BYTES + primitives::mlkem::MLKEM1024_CT_BYTES;

const _: () = assert!(KEM_BYTES_LEN == 1600);
const _: () = assert!(<X25519 as CurvePrimitive>::PUBLIC_KEY_LEN == primitives::x25519::X25519_PUBLIC_KEY_BYTES);
const _: () = assert!(<MlKem1024 as LatticePrimitive>::CIPHERTEXT_LEN == primitives::mlkem::MLKEM1024_CT_BYTES);
const _: () = assert!(<MlKem1024 as LatticePrimitive>::PUBLIC_KEY_LEN == primitives::mlkem::MLKEM1024_EK_BYTES);

// ── Library metadata ────────────────────────────────────────────────────────

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> &'static str {
    VERSION
}

// ── Tests ───────────────────────────────────────────────────────────────────

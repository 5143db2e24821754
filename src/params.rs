//! Algorithm identifiers and KDF parameters.
//!
//! Callers typically load [`KdfParams`] from their own configuration via
//! serde; salt and info are carried as hex strings in that form.

use serde::{Deserialize, Serialize};

use crate::error::{HybridKemError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EllipticCurveType {
    #[default]
    UnknownCurve,
    NistP256,
    NistP384,
    NistP521,
    Curve25519,
}

impl EllipticCurveType {
    pub fn from_string(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "NIST_P256" => EllipticCurveType::NistP256,
            "NIST_P384" => EllipticCurveType::NistP384,
            "NIST_P521" => EllipticCurveType::NistP521,
            "CURVE25519" => EllipticCurveType::Curve25519,
            _ => EllipticCurveType::UnknownCurve,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EllipticCurveType::UnknownCurve => "UNKNOWN_CURVE",
            EllipticCurveType::NistP256 => "NIST_P256",
            EllipticCurveType::NistP384 => "NIST_P384",
            EllipticCurveType::NistP521 => "NIST_P521",
            EllipticCurveType::Curve25519 => "CURVE25519",
        }
    }
}

impl std::fmt::Display for EllipticCurveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hash function driving HKDF extract and expand.
///
/// `UnknownHash` is what unrecognized or unsupported names (including SHA-1)
/// parse to; every KDF entry point rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HashType {
    UnknownHash,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl HashType {
    pub fn from_string(s: &str) -> Self {
        match s.to_uppercase().replace('-', "").as_str() {
            "SHA224" => HashType::Sha224,
            "SHA256" => HashType::Sha256,
            "SHA384" => HashType::Sha384,
            "SHA512" => HashType::Sha512,
            _ => HashType::UnknownHash,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashType::UnknownHash => "UNKNOWN_HASH",
            HashType::Sha224 => "SHA224",
            HashType::Sha256 => "SHA256",
            HashType::Sha384 => "SHA384",
            HashType::Sha512 => "SHA512",
        }
    }

    pub fn is_supported(&self) -> bool {
        *self != HashType::UnknownHash
    }

    /// Digest size in bytes; zero for `UnknownHash`.
    pub fn digest_len(&self) -> usize {
        match self {
            HashType::UnknownHash => 0,
            HashType::Sha224 => 28,
            HashType::Sha256 => 32,
            HashType::Sha384 => 48,
            HashType::Sha512 => 64,
        }
    }

    /// Largest output HKDF-Expand can produce: 255 blocks of the digest.
    pub fn max_output_len(&self) -> usize {
        255 * self.digest_len()
    }
}

impl std::fmt::Display for HashType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoding hint for the classical public point. X25519 has a single raw
/// encoding, so every value behaves the same for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EcPointFormat {
    #[default]
    Uncompressed,
    Compressed,
    DoNotUseCryptoApiCompressed,
}

impl EcPointFormat {
    pub fn from_string(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "COMPRESSED" => EcPointFormat::Compressed,
            "DO_NOT_USE_CRYPTO_API_COMPRESSED" => EcPointFormat::DoNotUseCryptoApiCompressed,
            _ => EcPointFormat::Uncompressed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EcPointFormat::Uncompressed => "UNCOMPRESSED",
            EcPointFormat::Compressed => "COMPRESSED",
            EcPointFormat::DoNotUseCryptoApiCompressed => "DO_NOT_USE_CRYPTO_API_COMPRESSED",
        }
    }
}

impl std::fmt::Display for EcPointFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything both parties must agree on to derive the same symmetric key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    pub hash: HashType,
    #[serde(with = "hex")]
    pub salt: Vec<u8>,
    #[serde(with = "hex")]
    pub info: Vec<u8>,
    pub output_len: usize,
    #[serde(default)]
    pub point_format: EcPointFormat,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            hash: HashType::Sha256,
            salt: Vec::new(),
            info: Vec::new(),
            output_len: 32,
            point_format: EcPointFormat::Uncompressed,
        }
    }
}

impl KdfParams {
    pub fn new(hash: HashType, salt: &[u8], info: &[u8], output_len: usize) -> Self {
        Self {
            hash,
            salt: salt.to_vec(),
            info: info.to_vec(),
            output_len,
            point_format: EcPointFormat::default(),
        }
    }

    /// Build parameters from hex-encoded salt and info.
    pub fn from_hex(hash: HashType, salt_hex: &str, info_hex: &str, output_len: usize) -> Result<Self> {
        let salt = hex::decode(salt_hex)
            .map_err(|e| HybridKemError::InvalidArgument(format!("salt is not valid hex: {}", e)))?;
        let info = hex::decode(info_hex)
            .map_err(|e| HybridKemError::InvalidArgument(format!("info is not valid hex: {}", e)))?;
        Ok(Self {
            hash,
            salt,
            info,
            output_len,
            point_format: EcPointFormat::default(),
        })
    }

    pub fn with_point_format(mut self, point_format: EcPointFormat) -> Self {
        self.point_format = point_format;
        self
    }

    /// Check the hash is supported and the requested output length is within
    /// its expansion bound.
    pub fn validate(&self) -> Result<()> {
        validate_output_len(self.hash, self.output_len)
    }
}

pub(crate) fn validate_output_len(hash: HashType, output_len: usize) -> Result<()> {
    if !hash.is_supported() {
        log::warn!("Rejected KDF request for unsupported hash {}", hash);
        return Err(HybridKemError::UnsupportedAlgorithm(format!(
            "hash {} is not supported",
            hash
        )));
    }
    if output_len == 0 {
        log::warn!("Rejected KDF request for zero-length output");
        return Err(HybridKemError::InvalidArgument(
            "output length must be positive".to_string(),
        ));
    }
    if output_len > hash.max_output_len() {
        log::warn!(
            "Rejected KDF request for {} bytes (max {} for {})",
            output_len,
            hash.max_output_len(),
            hash
        );
        return Err(HybridKemError::InvalidArgument(format!(
            "output length {} exceeds HKDF-{} maximum of {}",
            output_len,
            hash,
            hash.max_output_len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_from_string() {
        assert_eq!(EllipticCurveType::from_string("curve25519"), EllipticCurveType::Curve25519);
        assert_eq!(EllipticCurveType::from_string("NIST_P384"), EllipticCurveType::NistP384);
        assert_eq!(EllipticCurveType::from_string("ed448"), EllipticCurveType::UnknownCurve);
        assert_eq!(EllipticCurveType::Curve25519.to_string(), "CURVE25519");
    }

    #[test]
    fn test_hash_bounds() {
        assert_eq!(HashType::Sha256.max_output_len(), 255 * 32);
        assert_eq!(HashType::Sha512.max_output_len(), 255 * 64);
        assert_eq!(HashType::from_string("sha-384"), HashType::Sha384);
        assert_eq!(HashType::from_string("SHA256"), HashType::Sha256);
        assert_eq!(HashType::UnknownHash.max_output_len(), 0);
    }

    #[test]
    fn test_unknown_hash_names_rejected() {
        for name in ["SHA1", "SHA-1", "SHA-265", "md5", ""] {
            let hash = HashType::from_string(name);
            assert_eq!(hash, HashType::UnknownHash, "{:?}", name);
            assert!(matches!(
                KdfParams::new(hash, b"", b"", 32).validate(),
                Err(HybridKemError::UnsupportedAlgorithm(_))
            ));
        }

        let params: KdfParams =
            serde_json::from_str(r#"{"hash":"UNKNOWN_HASH","salt":"","info":"","output_len":32}"#).unwrap();
        assert!(matches!(params.validate(), Err(HybridKemError::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn test_point_format_from_string() {
        assert_eq!(EcPointFormat::from_string("compressed"), EcPointFormat::Compressed);
        assert_eq!(EcPointFormat::from_string("bogus"), EcPointFormat::Uncompressed);
    }

    #[test]
    fn test_validate_output_len() {
        assert!(KdfParams::new(HashType::Sha256, b"", b"", 1).validate().is_ok());
        assert!(KdfParams::new(HashType::Sha256, b"", b"", 255 * 32).validate().is_ok());
        assert!(matches!(
            KdfParams::new(HashType::Sha256, b"", b"", 0).validate(),
            Err(HybridKemError::InvalidArgument(_))
        ));
        assert!(matches!(
            KdfParams::new(HashType::Sha256, b"", b"", 255 * 32 + 1).validate(),
            Err(HybridKemError::InvalidArgument(_))
        ));
        // Same length is fine for a wider hash.
        assert!(KdfParams::new(HashType::Sha512, b"", b"", 255 * 32 + 1).validate().is_ok());
    }

    #[test]
    fn test_from_hex() {
        let params = KdfParams::from_hex(HashType::Sha256, "0b0b0b0b", "0b0b0b0b0b0b0b0b", 32).unwrap();
        assert_eq!(params.salt, vec![0x0b; 4]);
        assert_eq!(params.info, vec![0x0b; 8]);

        assert!(matches!(
            KdfParams::from_hex(HashType::Sha256, "0b0", "", 32),
            Err(HybridKemError::InvalidArgument(_))
        ));
        assert!(matches!(
            KdfParams::from_hex(HashType::Sha256, "", "zz", 32),
            Err(HybridKemError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_kdf_params_json() {
        let json = r#"{
            "hash": "SHA384",
            "salt": "0b0b0b0b",
            "info": "cafe",
            "output_len": 48
        }"#;
        let params: KdfParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.hash, HashType::Sha384);
        assert_eq!(params.salt, vec![0x0b; 4]);
        assert_eq!(params.info, vec![0xca, 0xfe]);
        assert_eq!(params.point_format, EcPointFormat::Uncompressed);

        let encoded = serde_json::to_string(&params.clone().with_point_format(EcPointFormat::Compressed)).unwrap();
        assert!(encoded.contains("\"COMPRESSED\""));
        let decoded: KdfParams = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.point_format, EcPointFormat::Compressed);
        assert_eq!(decoded.salt, params.salt);
    }

    #[test]
    fn test_curve_serde_names() {
        let s = serde_json::to_string(&EllipticCurveType::NistP256).unwrap();
        assert_eq!(s, "\"NIST_P256\"");
        let c: EllipticCurveType = serde_json::from_str("\"UNKNOWN_CURVE\"").unwrap();
        assert_eq!(c, EllipticCurveType::UnknownCurve);
    }
}

#![no_main]
use arbitrary::Arbitrary;
use hybrid_kem::{EcPointFormat, EllipticCurveType, HashType, SenderKem};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct SenderInput {
    curve: u8,
    public_x: Vec<u8>,
    public_y: Vec<u8>,
    lattice_public: Vec<u8>,
    hash: u8,
    salt: Vec<u8>,
    info: Vec<u8>,
    output_len: u16,
}

fuzz_target!(|input: SenderInput| {
    let curve = match input.curve % 5 {
        0 => EllipticCurveType::UnknownCurve,
        1 => EllipticCurveType::NistP256,
        2 => EllipticCurveType::NistP384,
        3 => EllipticCurveType::NistP521,
        _ => EllipticCurveType::Curve25519,
    };
    let hash = match input.hash % 5 {
        0 => HashType::UnknownHash,
        1 => HashType::Sha224,
        2 => HashType::Sha256,
        3 => HashType::Sha384,
        _ => HashType::Sha512,
    };

    // Construction with arbitrary keys must not panic
    let Ok(sender) = SenderKem::new(curve, &input.public_x, &input.public_y, &input.lattice_public)
    else {
        return;
    };

    let output_len = input.output_len as usize;
    match sender.generate_key(hash, &input.salt, &input.info, output_len, EcPointFormat::Uncompressed) {
        Ok(kem_key) => {
            assert_eq!(kem_key.symmetric_key().len(), output_len);
            assert_eq!(kem_key.kem_bytes().len(), sender.kem_bytes_len());
        }
        Err(_) => assert!(!hash.is_supported() || output_len == 0 || output_len > hash.max_output_len()),
    }
});

#![no_main]
use std::sync::OnceLock;

use hybrid_kem::{
    generate_hybrid_keypair_from_seed, EllipticCurveType, KdfParams, RecipientKem, SenderKem,
    KEM_BYTES_LEN,
};
use libfuzzer_sys::fuzz_target;

fn kems() -> &'static (SenderKem, RecipientKem) {
    static KEMS: OnceLock<(SenderKem, RecipientKem)> = OnceLock::new();
    KEMS.get_or_init(|| {
        let kp = generate_hybrid_keypair_from_seed(EllipticCurveType::Curve25519, &[0x5a; 32])
            .expect("keypair");
        let sender = SenderKem::new(
            EllipticCurveType::Curve25519,
            &kp.classical_public,
            &kp.classical_public_y,
            &kp.lattice_public_marshaled,
        )
        .expect("sender");
        let recipient =
            RecipientKem::new(EllipticCurveType::Curve25519, kp.classical_private, kp.lattice_private)
                .expect("recipient");
        (sender, recipient)
    })
}

fuzz_target!(|data: &[u8]| {
    let (sender, recipient) = kems();
    let params = KdfParams::default();

    // Arbitrary bytes: wrong length is an error, right length is always a key.
    let result = recipient.generate_key_with_params(data, &params);
    if data.len() == KEM_BYTES_LEN {
        let key = result.expect("full-length message must decapsulate");
        assert_eq!(key.len(), params.output_len);
    } else {
        assert!(result.is_err());
    }

    // Splice fuzz input into a genuine message: must never error.
    let kem_key = sender.generate_key_with_params(&params).expect("encapsulate");
    let mut spliced = kem_key.kem_bytes().as_bytes().to_vec();
    for (dst, src) in spliced.iter_mut().zip(data.iter()) {
        *dst = *src;
    }
    let key = recipient
        .generate_key_with_params(&spliced, &params)
        .expect("tampered message must still yield a key");
    if spliced == kem_key.kem_bytes().as_bytes() {
        assert_eq!(&key, kem_key.symmetric_key(), "Shared secret mismatch");
    }
});

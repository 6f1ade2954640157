use {
    super::{digest, test},
    crate::HashId,
};

/// BLAKE2b test vectors from RFC 7693 and the reference test corpus.
#[test]
fn blake2b() {
    test(
        HashId::Blake2b512,
        b"",
        "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419\
         d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce",
    );
    test(
        HashId::Blake2b512,
        b"abc",
        "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
         7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923",
    );
    test(
        HashId::Blake2b256,
        b"abc",
        "bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319",
    );
    test(
        HashId::Blake2b384,
        b"abc",
        "6f56a82c8e7ef526dfe182eb5212f7db9df1317e57815dbda46083fc30f54ee6\
         c66ba83be64b302d7cba6ce15bb556f4",
    );
}

/// BLAKE2s test vectors.
#[test]
fn blake2s() {
    test(
        HashId::Blake2s256,
        b"",
        "69217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9",
    );
    test(
        HashId::Blake2s256,
        b"abc",
        "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982",
    );
}

/// The declared output length is bound into the parameter word, so a
/// shorter variant is a different function, not a truncation: every
/// output byte changes.
#[test]
fn output_length_is_not_truncation() {
    let d224 = digest(HashId::Blake2b224, b"abc");
    let d256 = digest(HashId::Blake2b256, b"abc");
    let d384 = digest(HashId::Blake2b384, b"abc");
    let d512 = digest(HashId::Blake2b512, b"abc");
    assert_eq!(d224.len(), 56);
    assert!(!d256.starts_with(&d224));
    assert!(!d384.starts_with(&d224));
    assert!(!d512.starts_with(&d256));

    let s224 = digest(HashId::Blake2s224, b"abc");
    let s256 = digest(HashId::Blake2s256, b"abc");
    assert_eq!(s224.len(), 56);
    assert!(!s256.starts_with(&s224));
}

/// The 224-bit variants emit all 28 bytes.
#[test]
fn blake2_224_output_is_28_bytes() {
    assert_eq!(digest(HashId::Blake2b224, b"").len(), 2 * 28);
    assert_eq!(digest(HashId::Blake2s224, b"").len(), 2 * 28);
}

use {
    super::{million_a, test, TWO_BLOCKS_448},
    crate::HashId,
};

/// SHA-1 test vectors from FIPS 180-2 and its appendices.
#[test]
fn sha1() {
    test(
        HashId::Sha1,
        b"",
        "da39a3ee5e6b4b0d3255bfef95601890afd80709",
    );
    test(
        HashId::Sha1,
        b"abc",
        "a9993e364706816aba3e25717850c26c9cd0d89d",
    );
    test(
        HashId::Sha1,
        TWO_BLOCKS_448,
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    );
}

#[test]
fn sha1_million_a() {
    test(
        HashId::Sha1,
        &million_a(),
        "34aa973cd4c4daa4f61eeb2bdbad27316534016f",
    );
}

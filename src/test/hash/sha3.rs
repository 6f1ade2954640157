use {
    super::{million_a, test, TWO_BLOCKS_448},
    crate::{shake128, shake256, HashId},
};

/// SHA3-224 test vectors.
#[test]
fn sha3_224() {
    test(
        HashId::Sha3_224,
        b"",
        "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
    );
    test(
        HashId::Sha3_224,
        b"abc",
        "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
    );
}

/// SHA3-256 test vectors.
#[test]
fn sha3_256() {
    test(
        HashId::Sha3_256,
        b"",
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
    );
    test(
        HashId::Sha3_256,
        b"abc",
        "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
    );
    test(
        HashId::Sha3_256,
        TWO_BLOCKS_448,
        "41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376",
    );
}

#[test]
fn sha3_256_million_a() {
    test(
        HashId::Sha3_256,
        &million_a(),
        "5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1",
    );
}

/// SHA3-384 test vectors.
#[test]
fn sha3_384() {
    test(
        HashId::Sha3_384,
        b"",
        "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2a\
         c3713831264adb47fb6bd1e058d5f004",
    );
    test(
        HashId::Sha3_384,
        b"abc",
        "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b2\
         98d88cea927ac7f539f1edf228376d25",
    );
}

/// SHA3-512 test vectors.
#[test]
fn sha3_512() {
    test(
        HashId::Sha3_512,
        b"",
        "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6\
         15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
    );
    test(
        HashId::Sha3_512,
        b"abc",
        "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
         10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
    );
}

/// SHAKE128 known answer for the empty message.
#[test]
fn shake128_empty() {
    let mut md = [0; 32];
    shake128(&mut md, b"");
    assert_eq!(
        hex::encode(md),
        "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
    );
}

/// SHAKE256 known answer for the empty message.
#[test]
fn shake256_empty() {
    let mut md = [0; 64];
    shake256(&mut md, b"");
    assert_eq!(
        hex::encode(md),
        "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f\
         d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be",
    );
}

/// A longer SHAKE request is an extension of a shorter one, and output
/// beyond one rate exercises the re-permutation path (168 bytes for
/// SHAKE128, 136 for SHAKE256).
#[test]
fn shake_extension() {
    let msg = b"extendable output";

    let mut short = [0; 32];
    let mut long = [0; 400];
    shake128(&mut short, msg);
    shake128(&mut long, msg);
    assert_eq!(short, long[..32]);

    let mut short = [0; 64];
    let mut long = [0; 400];
    shake256(&mut short, msg);
    shake256(&mut long, msg);
    assert_eq!(short, long[..64]);
}

use {
    super::{mac, test},
    crate::{Hash, HashId, Mac, MacId},
};

/// RFC 2202 test vectors for HMAC-SHA-1.
#[test]
fn hmac_sha1() {
    test(
        MacId::HmacSha1,
        &[0x0b; 20],
        b"Hi There",
        "b617318655057264e28bc0b6fb378c8ef146be00",
    );
    test(
        MacId::HmacSha1,
        b"Jefe",
        b"what do ya want for nothing?",
        "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79",
    );
}

/// RFC 4231 test case 1: 20-byte 0x0b key, "Hi There".
#[test]
fn hmac_sha2_short_key() {
    test(
        MacId::HmacSha224,
        &[0x0b; 20],
        b"Hi There",
        "896fb1128abbdf196832107cd49df33f47b4b1169912ba4f53684b22",
    );
    test(
        MacId::HmacSha256,
        &[0x0b; 20],
        b"Hi There",
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
    );
    test(
        MacId::HmacSha384,
        &[0x0b; 20],
        b"Hi There",
        "afd03944d84895626b0825f4ab46907f15f9dabbe4101ec682aa034c7cebc59c\
         faea9ea9076ede7f4af152e8b2fa9cb6",
    );
    test(
        MacId::HmacSha512,
        &[0x0b; 20],
        b"Hi There",
        "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
         daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
    );
}

/// RFC 4231 test case 2: the "Jefe" key.
#[test]
fn hmac_sha2_jefe() {
    test(
        MacId::HmacSha224,
        b"Jefe",
        b"what do ya want for nothing?",
        "a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44",
    );
    test(
        MacId::HmacSha256,
        b"Jefe",
        b"what do ya want for nothing?",
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
    );
    test(
        MacId::HmacSha384,
        b"Jefe",
        b"what do ya want for nothing?",
        "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e\
         8e2240ca5e69e2c78b3239ecfab21649",
    );
    test(
        MacId::HmacSha512,
        b"Jefe",
        b"what do ya want for nothing?",
        "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
         9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
    );
}

/// RFC 4231 test case 6: a 131-byte key exercises the hash-key-first
/// branch.
#[test]
fn hmac_sha2_long_key() {
    let key = [0xaa; 131];
    let msg: &[u8] = b"Test Using Larger Than Block-Size Key - Hash Key First";
    test(
        MacId::HmacSha256,
        &key,
        msg,
        "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
    );
    test(
        MacId::HmacSha512,
        &key,
        msg,
        "80b24263c7c1a3ebb71493c1dd7be8b49b46d1f41b4aeec1121b013783f8f352\
         6b56d037e05f2598bd0fd2215d6a1e5295e64f73f63f0aec8b915a985d786598",
    );
}

/// HMAC over a key longer than the block equals HMAC over that key's
/// digest, by construction.
#[test]
fn long_key_equals_hashed_key() {
    let pairs = [
        (MacId::HmacSha1, HashId::Sha1, 64),
        (MacId::HmacSha224, HashId::Sha224, 64),
        (MacId::HmacSha256, HashId::Sha256, 64),
        (MacId::HmacSha384, HashId::Sha384, 128),
        (MacId::HmacSha512, HashId::Sha512, 128),
        (MacId::HmacSha512_224, HashId::Sha512_224, 128),
        (MacId::HmacSha512_256, HashId::Sha512_256, 128),
    ];
    for (mac_id, hash_id, block) in pairs {
        let key: Vec<u8> = (0..block as u8 + 7).collect();
        let mut hash = Hash::new(hash_id, 0).unwrap();
        let mut hashed_key = vec![0; hash.output_len()];
        hash.init().unwrap();
        hash.update(&key).unwrap();
        hash.finish(&mut hashed_key).unwrap();

        assert_eq!(
            mac(mac_id, &key, b"key preprocessing"),
            mac(mac_id, &hashed_key, b"key preprocessing"),
            "hash-key-first branch disagrees for {mac_id:?}",
        );
    }
}

/// Cross-check every HMAC method against the construction spelled out
/// with plain digest handles, for keys below, at, and above the block
/// size.
#[test]
fn agrees_with_reference_construction() {
    let pairs = [
        (MacId::HmacSha1, HashId::Sha1, 64),
        (MacId::HmacSha224, HashId::Sha224, 64),
        (MacId::HmacSha256, HashId::Sha256, 64),
        (MacId::HmacSha384, HashId::Sha384, 128),
        (MacId::HmacSha512, HashId::Sha512, 128),
        (MacId::HmacSha512_224, HashId::Sha512_224, 128),
        (MacId::HmacSha512_256, HashId::Sha512_256, 128),
    ];
    let msg = b"The quick brown fox jumps over the lazy dog";
    for (mac_id, hash_id, block) in pairs {
        for key_len in [11, block, block + 25] {
            let key: Vec<u8> = (0..key_len as u8).map(|b| b.wrapping_mul(17)).collect();
            assert_eq!(
                mac(mac_id, &key, msg),
                hmac_reference(hash_id, block, &key, msg),
                "HMAC disagrees with reference for {mac_id:?}, key length {key_len}",
            );
        }
    }
}

/// RFC 2104 spelled out with two digest handles.
fn hmac_reference(id: HashId, block: usize, key: &[u8], msg: &[u8]) -> String {
    let one_shot = |parts: &[&[u8]]| {
        let mut hash = Hash::new(id, 0).unwrap();
        let mut md = vec![0; hash.output_len()];
        hash.init().unwrap();
        for part in parts {
            hash.update(part).unwrap();
        }
        hash.finish(&mut md).unwrap();
        md
    };

    let mut k = vec![0; block];
    if key.len() > block {
        let digest = one_shot(&[key]);
        k[..digest.len()].copy_from_slice(&digest);
    } else {
        k[..key.len()].copy_from_slice(key);
    }

    let ipad: Vec<u8> = k.iter().map(|b| b ^ 0x36).collect();
    let opad: Vec<u8> = k.iter().map(|b| b ^ 0x5c).collect();
    let inner = one_shot(&[&ipad, msg]);
    hex::encode(one_shot(&[&opad, &inner]))
}

/// The truncated SHA-512 HMAC variants produce tags of their own
/// declared lengths.
#[test]
fn truncated_variants() {
    assert_eq!(Mac::meth_len(MacId::HmacSha512_224).unwrap(), 28);
    assert_eq!(Mac::meth_len(MacId::HmacSha512_256).unwrap(), 32);
    assert_eq!(mac(MacId::HmacSha512_224, b"key", b"msg").len(), 2 * 28);
    assert_eq!(mac(MacId::HmacSha512_256, b"key", b"msg").len(), 2 * 32);
}

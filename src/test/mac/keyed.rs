use {
    super::{mac, test},
    crate::{Error, Hash, HashId, Mac, MacId},
};

/// Keyed BLAKE2b vectors from the reference test corpus: incrementing
/// 64-byte key over the empty and one-byte messages.
#[test]
fn blake2b_keyed() {
    let key: Vec<u8> = (0..64).collect();
    test(
        MacId::Blake2b512,
        &key,
        b"",
        "10ebb67700b1868efb4417987acf4690ae9d972fb7a590c2f02871799aaa4786\
         b5e996e8f0f4eb981fc214b005f42d2ff4233499391653df7aefcbc13fc51568",
    );
    test(
        MacId::Blake2b512,
        &key,
        &[0x00],
        "961f6dd1e4dd30f63901690c512e78e4b45e4742ed197c3c5e45c549fd25f2e4\
         187b0bc9fe30492b16b0d0bc4ef9b0f34c7003fac09a5ef1532e69430234cebd",
    );
}

/// Keyed BLAKE2s vectors: incrementing 32-byte key.
#[test]
fn blake2s_keyed() {
    let key: Vec<u8> = (0..32).collect();
    test(
        MacId::Blake2s256,
        &key,
        b"",
        "48a8997da407876b3d79c0d92325ad3b89cbb754d86ab71aee047ad345fd2c49",
    );
    test(
        MacId::Blake2s256,
        &key,
        &[0x00],
        "40d15fee7c328830166ac3f918650f807e7e01e177258cdc0a39b11f598066f1",
    );
}

/// An empty key degenerates to the unkeyed digest.
#[test]
fn blake2_empty_key_equals_digest() {
    let pairs = [
        (MacId::Blake2b224, HashId::Blake2b224),
        (MacId::Blake2b256, HashId::Blake2b256),
        (MacId::Blake2b384, HashId::Blake2b384),
        (MacId::Blake2b512, HashId::Blake2b512),
        (MacId::Blake2s224, HashId::Blake2s224),
        (MacId::Blake2s256, HashId::Blake2s256),
    ];
    let msg: &[u8] = b"some message";
    for (mac_id, hash_id) in pairs {
        assert_eq!(
            mac(mac_id, b"", msg),
            digest(hash_id, &[msg]),
            "keyless MAC differs from digest for {mac_id:?}",
        );
    }
}

/// Keys over the BLAKE2 maximum (64 bytes for BLAKE2b, 32 for BLAKE2s)
/// are rejected with `BadLen`, and the handle stays un-initialized.
#[test]
fn blake2_key_too_long() {
    let mut mac = Mac::new(MacId::Blake2b512, 0).unwrap();
    assert_eq!(mac.sign_init(&[0; 65]), Err(Error::BadLen));
    assert_eq!(mac.sign_update(b"x"), Err(Error::NotInitialized));

    let mut mac = Mac::new(MacId::Blake2s256, 0).unwrap();
    assert_eq!(mac.sign_init(&[0; 33]), Err(Error::BadLen));
    assert_eq!(mac.sign_update(b"x"), Err(Error::NotInitialized));

    // The boundary lengths are accepted.
    let mut mac = Mac::new(MacId::Blake2b512, 0).unwrap();
    assert_eq!(mac.sign_init(&[0; 64]), Ok(()));
    let mut mac = Mac::new(MacId::Blake2s256, 0).unwrap();
    assert_eq!(mac.sign_init(&[0; 32]), Ok(()));
}

/// The keyed sponge is a prefix MAC: the tag is the digest of the key
/// followed by the message.
#[test]
fn sha3_mac_is_prefix_mac() {
    let pairs = [
        (MacId::Sha3_224, HashId::Sha3_224),
        (MacId::Sha3_256, HashId::Sha3_256),
        (MacId::Sha3_384, HashId::Sha3_384),
        (MacId::Sha3_512, HashId::Sha3_512),
    ];
    let key: &[u8] = b"a secret key";
    let msg: &[u8] = b"and a public message";
    for (mac_id, hash_id) in pairs {
        assert_eq!(
            mac(mac_id, key, msg),
            digest(hash_id, &[key, msg]),
            "keyed sponge differs from prefixed digest for {mac_id:?}",
        );
    }
}

/// Digest of concatenated parts, as lowercase hex.
fn digest(id: HashId, parts: &[&[u8]]) -> String {
    let mut hash = Hash::new(id, 0).unwrap();
    let mut md = vec![0; hash.output_len()];
    hash.init().unwrap();
    for part in parts {
        hash.update(part).unwrap();
    }
    hash.finish(&mut md).unwrap();
    hex::encode(md)
}

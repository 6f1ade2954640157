use {
    super::{million_a, test, TWO_BLOCKS_448},
    crate::HashId,
};

/// SHA-224 test vectors.
#[test]
fn sha224() {
    test(
        HashId::Sha224,
        b"",
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
    );
    test(
        HashId::Sha224,
        b"abc",
        "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
    );
    test(
        HashId::Sha224,
        TWO_BLOCKS_448,
        "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525",
    );
}

#[test]
fn sha224_million_a() {
    test(
        HashId::Sha224,
        &million_a(),
        "20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67",
    );
}

/// SHA-256 test vectors.
#[test]
fn sha256() {
    test(
        HashId::Sha256,
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
    test(
        HashId::Sha256,
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
    test(
        HashId::Sha256,
        TWO_BLOCKS_448,
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn sha256_million_a() {
    test(
        HashId::Sha256,
        &million_a(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

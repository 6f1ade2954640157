//! HMAC is the hash-based message authentication code of [RFC
//! 2104](https://www.rfc-editor.org/rfc/rfc2104):
//! `H((K ⊕ opad) ‖ H((K ⊕ ipad) ‖ M))`.
//!
//! The construction is generic over any block-based digest engine. A
//! key longer than the block is first hashed down to the digest length;
//! the key is then zero-padded to one block, and two digest states are
//! primed — the inner with the ipad-masked key, the outer with the
//! opad-masked key. Updates feed the inner state only; finalization
//! completes the inner digest, feeds it to the outer state, and emits
//! the outer digest.

use {
    crate::hash::Engine,
    zeroize::Zeroize,
};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Largest block size of any wrapped digest (the SHA-512 family).
const BLOCK_MAX: usize = 128;
/// Largest digest size of any wrapped digest.
const DIGEST_MAX: usize = 64;

/// An HMAC computation over the digest engine `E`: the inner and outer
/// states primed with the masked key.
#[derive(Clone, Zeroize)]
pub(crate) struct Hmac<E: Engine + Zeroize> {
    inner: E,
    outer: E,
}

impl<E: Engine + Zeroize> Hmac<E> {
    pub fn new() -> Self {
        Self {
            inner: E::new(),
            outer: E::new(),
        }
    }

    /// Prime both states from `key`. Any key length is accepted.
    pub fn init(&mut self, key: &[u8]) {
        let block = E::BLOCK_LEN;
        let mut k = [0u8; BLOCK_MAX];

        if key.len() > block {
            // Oversized keys are replaced by their digest.
            self.inner.init();
            self.inner.update(key);
            let mut digest = [0u8; DIGEST_MAX];
            self.inner.finish(&mut digest[..E::DIGEST_LEN]);
            k[..E::DIGEST_LEN].copy_from_slice(&digest[..E::DIGEST_LEN]);
            digest.zeroize();
        } else {
            k[..key.len()].copy_from_slice(key);
        }

        for byte in k[..block].iter_mut() {
            *byte ^= IPAD;
        }
        self.inner.init();
        self.inner.update(&k[..block]);

        for byte in k[..block].iter_mut() {
            *byte ^= IPAD ^ OPAD;
        }
        self.outer.init();
        self.outer.update(&k[..block]);

        k.zeroize();
    }

    pub fn update(&mut self, msg: &[u8]) {
        self.inner.update(msg);
    }

    /// Complete the inner digest, chain it through the outer state, and
    /// write the tag. `md.len()` must equal the engine digest length.
    pub fn finish(&mut self, md: &mut [u8]) {
        let mut digest = [0u8; DIGEST_MAX];
        self.inner.finish(&mut digest[..E::DIGEST_LEN]);
        self.outer.update(&digest[..E::DIGEST_LEN]);
        self.outer.finish(md);
        digest.zeroize();
    }
}

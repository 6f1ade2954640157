//! BLAKE2s is the 32-bit member of the BLAKE2 hash family, specified by
//! [RFC 7693](https://www.rfc-editor.org/rfc/rfc7693).
//!
//! Structurally the twin of [`blake2b`](super::blake2b) at half width:
//! 64-byte blocks, eight 32-bit chaining words, a 64-bit byte counter,
//! ten G-function rounds, keys up to 32 bytes and output up to 32 bytes.

use {
    super::{blake2b::SIGMA, Engine},
    crate::{
        bytes::{read_u32v_le, write_u32v_le},
        error::{Error, Result},
    },
    zeroize::Zeroize,
};

const BLOCK_BYTES: usize = 64;
const KEY_MAX: usize = 32;

/// The BLAKE2s IV: identical to the SHA-256 initial chaining values.
const IV: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

#[derive(Clone, Zeroize)]
pub(crate) struct Blake2s {
    h: [u32; 8],
    block: [u8; BLOCK_BYTES],
    count: [u32; 2],
    off: usize,
}

impl Blake2s {
    fn new() -> Self {
        Self {
            h: [0; 8],
            block: [0; BLOCK_BYTES],
            count: [0; 2],
            off: 0,
        }
    }

    fn init(&mut self, outlen: usize) {
        self.h = IV;
        self.h[0] ^= 0x01010000 ^ outlen as u32;
        self.count = [0; 2];
        self.off = 0;
    }

    fn init_keyed(&mut self, outlen: usize, key: &[u8]) -> Result<()> {
        if key.len() > KEY_MAX {
            return Err(Error::BadLen);
        }
        self.h = IV;
        self.h[0] ^= 0x01010000 ^ ((key.len() as u32) << 8) ^ outlen as u32;
        self.count = [0; 2];
        self.off = 0;
        if !key.is_empty() {
            self.block = [0; BLOCK_BYTES];
            self.block[..key.len()].copy_from_slice(key);
            self.off = BLOCK_BYTES;
        }
        Ok(())
    }

    fn update(&mut self, data: &[u8]) {
        let mut data = data;

        if self.off > 0 {
            let take = (BLOCK_BYTES - self.off).min(data.len());
            self.block[self.off..self.off + take].copy_from_slice(&data[..take]);
            self.off += take;
            data = &data[take..];
            // Keep a full pending block around until it is known not to
            // be the final one.
            if self.off == BLOCK_BYTES && !data.is_empty() {
                bump(&mut self.count, BLOCK_BYTES as u32);
                Self::compress(&mut self.h, &self.count, &self.block, false);
                self.off = 0;
            }
        }
        while data.len() > BLOCK_BYTES {
            bump(&mut self.count, BLOCK_BYTES as u32);
            Self::compress(&mut self.h, &self.count, &data[..BLOCK_BYTES], false);
            data = &data[BLOCK_BYTES..];
        }
        self.block[..data.len()].copy_from_slice(data);
        self.off += data.len();
    }

    fn finish(&mut self, md: &mut [u8]) {
        bump(&mut self.count, self.off as u32);
        self.block[self.off..].fill(0);
        Self::compress(&mut self.h, &self.count, &self.block, true);
        write_u32v_le(md, &self.h);
    }

    fn compress(h: &mut [u32; 8], count: &[u32; 2], block: &[u8], last: bool) {
        let mut m = [0u32; 16];
        read_u32v_le(&mut m, block);

        let mut v = [0u32; 16];
        v[..8].copy_from_slice(h);
        v[8..].copy_from_slice(&IV);
        v[12] ^= count[0];
        v[13] ^= count[1];
        if last {
            v[14] = !v[14];
        }

        for s in &SIGMA {
            g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
            g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
            g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
            g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);
            g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
            g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
            g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
            g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
        }

        for i in 0..8 {
            h[i] ^= v[i] ^ v[i + 8];
        }
    }
}

/// Advance the 64-bit byte counter, carrying into the high limb.
fn bump(count: &mut [u32; 2], n: u32) {
    count[0] = count[0].wrapping_add(n);
    if count[0] < n {
        count[1] += 1;
    }
}

#[allow(clippy::too_many_arguments)]
fn g(v: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize, x: u32, y: u32) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(12);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(8);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(7);
}

macro_rules! blake2s_variant {
    ($(#[$doc:meta])* $name:ident, $digest_len:expr) => {
        $(#[$doc])*
        #[derive(Clone, Zeroize)]
        pub(crate) struct $name {
            engine: Blake2s,
        }

        impl $name {
            /// Start a keyed MAC computation; keys longer than 32 bytes
            /// are rejected with `BadLen`.
            pub(crate) fn init_keyed(&mut self, key: &[u8]) -> Result<()> {
                self.engine.init_keyed($digest_len, key)
            }
        }

        impl Engine for $name {
            const BLOCK_LEN: usize = BLOCK_BYTES;
            const DIGEST_LEN: usize = $digest_len;

            fn new() -> Self {
                Self {
                    engine: Blake2s::new(),
                }
            }

            fn init(&mut self) {
                self.engine.init($digest_len);
            }

            fn update(&mut self, data: &[u8]) {
                self.engine.update(data);
            }

            fn finish(&mut self, md: &mut [u8]) {
                self.engine.finish(md);
            }
        }
    };
}

blake2s_variant!(
    /// BLAKE2s with 28 bytes of output.
    Blake2s224, 28
);
blake2s_variant!(
    /// BLAKE2s with 32 bytes of output.
    Blake2s256, 32
);

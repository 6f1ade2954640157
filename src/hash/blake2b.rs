//! BLAKE2b is the 64-bit member of the BLAKE2 hash family, specified by
//! [RFC 7693](https://www.rfc-editor.org/rfc/rfc7693).
//!
//! The engine compresses 128-byte blocks into eight 64-bit chaining
//! words with a twelve-round G-function schedule, carries a 128-bit byte
//! counter, and supports an optional key of up to 64 bytes which is
//! absorbed as a zero-padded first block. Output is little-endian and
//! may be any length up to 64 bytes; the requested length is bound into
//! the parameter word at `init`, so different output lengths produce
//! unrelated digests rather than truncations of one another.
//!
//! The final block must be compressed with a flag set, so an update that
//! ends exactly on a block boundary leaves the block pending; it is only
//! compressed once more data arrives or the stream is finished.

use {
    super::Engine,
    crate::{
        bytes::{read_u64v_le, write_u64v_le},
        error::{Error, Result},
    },
    zeroize::Zeroize,
};

const BLOCK_BYTES: usize = 128;
const KEY_MAX: usize = 64;

/// The message word schedule from RFC 7693, section 2.7. BLAKE2b rounds
/// ten and eleven reuse rows zero and one; BLAKE2s uses only the ten.
pub(crate) const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// The BLAKE2b IV: identical to the SHA-512 initial chaining values.
const IV: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

#[derive(Clone, Zeroize)]
pub(crate) struct Blake2b {
    h: [u64; 8],
    block: [u8; BLOCK_BYTES],
    count: [u64; 2],
    off: usize,
}

impl Blake2b {
    fn new() -> Self {
        Self {
            h: [0; 8],
            block: [0; BLOCK_BYTES],
            count: [0; 2],
            off: 0,
        }
    }

    /// Start an unkeyed digest producing `outlen` bytes.
    fn init(&mut self, outlen: usize) {
        self.h = IV;
        self.h[0] ^= 0x01010000 ^ outlen as u64;
        self.count = [0; 2];
        self.off = 0;
    }

    /// Start a keyed digest. The key becomes the first compressed block,
    /// right-padded with zeros; an empty key degenerates to the unkeyed
    /// digest.
    fn init_keyed(&mut self, outlen: usize, key: &[u8]) -> Result<()> {
        if key.len() > KEY_MAX {
            return Err(Error::BadLen);
        }
        self.h = IV;
        self.h[0] ^= 0x01010000 ^ ((key.len() as u64) << 8) ^ outlen as u64;
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
            // A full pending block is compressed only when more input
            // follows; otherwise it may be the final block.
            if self.off == BLOCK_BYTES && !data.is_empty() {
                bump(&mut self.count, BLOCK_BYTES as u64);
                Self::compress(&mut self.h, &self.count, &self.block, false);
                self.off = 0;
            }
        }
        while data.len() > BLOCK_BYTES {
            bump(&mut self.count, BLOCK_BYTES as u64);
            Self::compress(&mut self.h, &self.count, &data[..BLOCK_BYTES], false);
            data = &data[BLOCK_BYTES..];
        }
        self.block[..data.len()].copy_from_slice(data);
        self.off += data.len();
    }

    fn finish(&mut self, md: &mut [u8]) {
        bump(&mut self.count, self.off as u64);
        self.block[self.off..].fill(0);
        Self::compress(&mut self.h, &self.count, &self.block, true);
        write_u64v_le(md, &self.h);
    }

    fn compress(h: &mut [u64; 8], count: &[u64; 2], block: &[u8], last: bool) {
        let mut m = [0u64; 16];
        read_u64v_le(&mut m, block);

        let mut v = [0u64; 16];
        v[..8].copy_from_slice(h);
        v[8..].copy_from_slice(&IV);
        v[12] ^= count[0];
        v[13] ^= count[1];
        if last {
            v[14] = !v[14];
        }

        for round in 0..12 {
            let s = &SIGMA[round % 10];
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

/// Advance the 128-bit byte counter, carrying into the high limb.
fn bump(count: &mut [u64; 2], n: u64) {
    count[0] = count[0].wrapping_add(n);
    if count[0] < n {
        count[1] += 1;
    }
}

#[allow(clippy::too_many_arguments)]
fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

macro_rules! blake2b_variant {
    ($(#[$doc:meta])* $name:ident, $digest_len:expr) => {
        $(#[$doc])*
        #[derive(Clone, Zeroize)]
        pub(crate) struct $name {
            engine: Blake2b,
        }

        impl $name {
            /// Start a keyed MAC computation; keys longer than 64 bytes
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
                    engine: Blake2b::new(),
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

blake2b_variant!(
    /// BLAKE2b with 28 bytes of output.
    Blake2b224, 28
);
blake2b_variant!(
    /// BLAKE2b with 32 bytes of output.
    Blake2b256, 32
);
blake2b_variant!(
    /// BLAKE2b with 48 bytes of output.
    Blake2b384, 48
);
blake2b_variant!(
    /// BLAKE2b with 64 bytes of output.
    Blake2b512, 64
);

//! SHA-1 is a hash function specified by [FIPS
//! 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf).
//!
//! It is a weak algorithm with known collision attacks and is kept only
//! because HMAC-SHA-1 remains in deployed protocols. The engine is the
//! same Merkle-Damgard streaming machine as SHA-2: a 64-byte pending
//! block, a 64-bit byte counter, and five 32-bit chaining words mixed by
//! an 80-round compression.

use {
    super::Engine,
    crate::bytes::{read_u32v_be, write_u32v_be},
    zeroize::Zeroize,
};

const BLOCK_BYTES: usize = 64;

/// The initial chaining values from FIPS 180-4, section 5.3.1.
const H: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

#[derive(Clone, Zeroize)]
pub(crate) struct Sha1 {
    h: [u32; 5],
    block: [u8; BLOCK_BYTES],
    off: usize,
    len: u64,
}

impl Engine for Sha1 {
    const BLOCK_LEN: usize = BLOCK_BYTES;
    const DIGEST_LEN: usize = 20;

    fn new() -> Self {
        Self {
            h: [0; 5],
            block: [0; BLOCK_BYTES],
            off: 0,
            len: 0,
        }
    }

    fn init(&mut self) {
        self.h = H;
        self.off = 0;
        self.len = 0;
    }

    fn update(&mut self, data: &[u8]) {
        let mut data = data;
        self.len = self.len.wrapping_add(data.len() as u64);

        // Drain the pending partial block first.
        if self.off > 0 {
            let take = (BLOCK_BYTES - self.off).min(data.len());
            self.block[self.off..self.off + take].copy_from_slice(&data[..take]);
            self.off += take;
            data = &data[take..];
            if self.off == BLOCK_BYTES {
                Self::compress(&mut self.h, &self.block);
                self.off = 0;
            }
        }
        // Full blocks straight from the caller's buffer.
        while data.len() >= BLOCK_BYTES {
            Self::compress(&mut self.h, &data[..BLOCK_BYTES]);
            data = &data[BLOCK_BYTES..];
        }
        // Keep the tail pending.
        self.block[..data.len()].copy_from_slice(data);
        self.off += data.len();
    }

    fn finish(&mut self, md: &mut [u8]) {
        self.pad();
        write_u32v_be(md, &self.h);
    }
}

impl Sha1 {
    /// Append the 0x80 marker, zero-fill, and close with the bit length
    /// as a big-endian 64-bit integer, spilling into an extra block when
    /// fewer than eight bytes remain.
    fn pad(&mut self) {
        let bits = self.len << 3;
        let mut off = self.off;

        self.block[off] = 0x80;
        off += 1;
        if off > BLOCK_BYTES - 8 {
            self.block[off..].fill(0);
            Self::compress(&mut self.h, &self.block);
            off = 0;
        }
        self.block[off..BLOCK_BYTES - 8].fill(0);
        self.block[BLOCK_BYTES - 8..].copy_from_slice(&bits.to_be_bytes());
        Self::compress(&mut self.h, &self.block);
        self.off = 0;
    }

    fn compress(h: &mut [u32; 5], block: &[u8]) {
        // The message schedule is a rolling window of 16 words.
        let mut w = [0u32; 16];
        read_u32v_be(&mut w, block);

        let [mut a, mut b, mut c, mut d, mut e] = *h;
        for t in 0..80 {
            let ft = match t {
                0..=19 => (b & c) ^ ((!b) & d),
                40..=59 => (b & c) ^ (b & d) ^ (c & d),
                _ => b ^ c ^ d,
            };
            let kt: u32 = match t {
                0..=19 => 0x5a827999,
                20..=39 => 0x6ed9eba1,
                40..=59 => 0x8f1bbcdc,
                _ => 0xca62c1d6,
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(ft)
                .wrapping_add(e)
                .wrapping_add(kt)
                .wrapping_add(w[0]);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;

            let next = (w[13] ^ w[8] ^ w[2] ^ w[0]).rotate_left(1);
            w.rotate_left(1);
            w[15] = next;
        }

        h[0] = h[0].wrapping_add(a);
        h[1] = h[1].wrapping_add(b);
        h[2] = h[2].wrapping_add(c);
        h[3] = h[3].wrapping_add(d);
        h[4] = h[4].wrapping_add(e);
    }
}

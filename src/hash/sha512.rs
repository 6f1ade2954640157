//! The SHA-512 family: SHA-384, SHA-512, SHA-512/224 and SHA-512/256,
//! specified by [FIPS
//! 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf).
//!
//! One 64-bit engine serves all four variants. They differ only in their
//! initial chaining values (the truncated variants have their own IVs,
//! generated by the "SHA-512/t IV generation function" of FIPS 180-4 —
//! they are NOT a truncation of SHA-512 state) and in how many bytes of
//! the final chaining value are emitted.
//!
//! The length counter is 128 bits, kept as two 64-bit limbs that carry
//! on update. Finalization converts it from bytes to bits by shifting
//! the whole 128-bit value left by three, with the high limb absorbing
//! the top three bits of the low limb.

use {
    super::Engine,
    crate::bytes::{read_u64v_be, write_u64v_be},
    zeroize::Zeroize,
};

const BLOCK_BYTES: usize = 128;

/// The K constants from FIPS 180-4, section 4.2.3.
const K: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

/// Initial chaining values for SHA-384 (FIPS 180-4, section 5.3.4).
const H384: [u64; 8] = [
    0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
    0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
];

/// Initial chaining values for SHA-512 (FIPS 180-4, section 5.3.5).
const H512: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

/// Initial chaining values for SHA-512/224 (FIPS 180-4, section 5.3.6.1).
const H512_224: [u64; 8] = [
    0x8c3d37c819544da2, 0x73e1996689dcd4d6, 0x1dfab7ae32ff9c82, 0x679dd514582f9fcf,
    0x0f6d2b697bd44da8, 0x77e36f7304c48942, 0x3f9d85a86a1d36c8, 0x1112e6ad91d692a1,
];

/// Initial chaining values for SHA-512/256 (FIPS 180-4, section 5.3.6.2).
const H512_256: [u64; 8] = [
    0x22312194fc2bf72c, 0x9f555fa3c84c64c2, 0x2393b86b6f53b151, 0x963877195940eabd,
    0x96283ee2a88effe3, 0xbe5e1e2553863992, 0x2b0199fc2c85b8aa, 0x0eb72ddc81c52ca2,
];

/// The shared 64-bit engine. Variants pick an IV at `init` and a
/// truncation at `finish`.
#[derive(Clone, Zeroize)]
struct Engine512 {
    h: [u64; 8],
    block: [u8; BLOCK_BYTES],
    off: usize,
    len_lo: u64,
    len_hi: u64,
}

impl Engine512 {
    fn new() -> Self {
        Self {
            h: [0; 8],
            block: [0; BLOCK_BYTES],
            off: 0,
            len_lo: 0,
            len_hi: 0,
        }
    }

    fn init(&mut self, iv: &[u64; 8]) {
        self.h = *iv;
        self.off = 0;
        self.len_lo = 0;
        self.len_hi = 0;
    }

    fn update(&mut self, data: &[u8]) {
        let mut data = data;
        // 128-bit byte counter: carry from the low limb into the high.
        self.len_lo = self.len_lo.wrapping_add(data.len() as u64);
        if self.len_lo < data.len() as u64 {
            self.len_hi += 1;
        }

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
        while data.len() >= BLOCK_BYTES {
            Self::compress(&mut self.h, &data[..BLOCK_BYTES]);
            data = &data[BLOCK_BYTES..];
        }
        self.block[..data.len()].copy_from_slice(data);
        self.off += data.len();
    }

    /// Close the stream and emit `md.len()` bytes of the big-endian
    /// serialized chaining value.
    fn finish(&mut self, md: &mut [u8]) {
        // Bytes to bits across the two limbs.
        let bits_lo = self.len_lo << 3;
        let bits_hi = (self.len_hi << 3) | (self.len_lo >> 61);
        let mut off = self.off;

        self.block[off] = 0x80;
        off += 1;
        if off > BLOCK_BYTES - 16 {
            self.block[off..].fill(0);
            Self::compress(&mut self.h, &self.block);
            off = 0;
        }
        self.block[off..BLOCK_BYTES - 16].fill(0);
        self.block[BLOCK_BYTES - 16..BLOCK_BYTES - 8].copy_from_slice(&bits_hi.to_be_bytes());
        self.block[BLOCK_BYTES - 8..].copy_from_slice(&bits_lo.to_be_bytes());
        Self::compress(&mut self.h, &self.block);
        self.off = 0;

        write_u64v_be(md, &self.h);
    }

    fn compress(h: &mut [u64; 8], block: &[u8]) {
        let mut w = [0u64; 80];
        read_u64v_be(&mut w[..16], block);
        for t in 16..80 {
            w[t] = small_sigma1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(small_sigma0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut hh] = *h;
        for t in 0..80 {
            let temp1 = hh
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K[t])
                .wrapping_add(w[t]);
            let temp2 = big_sigma0(a).wrapping_add(maj(a, b, c));
            hh = g;
            g = f;
            f = e;
            e = d.wrapping_add(temp1);
            d = c;
            c = b;
            b = a;
            a = temp1.wrapping_add(temp2);
        }

        h[0] = h[0].wrapping_add(a);
        h[1] = h[1].wrapping_add(b);
        h[2] = h[2].wrapping_add(c);
        h[3] = h[3].wrapping_add(d);
        h[4] = h[4].wrapping_add(e);
        h[5] = h[5].wrapping_add(f);
        h[6] = h[6].wrapping_add(g);
        h[7] = h[7].wrapping_add(hh);
    }
}

fn ch(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ ((!x) & z)
}

fn maj(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

macro_rules! sha512_variant {
    ($(#[$doc:meta])* $name:ident, $iv:ident, $digest_len:expr) => {
        $(#[$doc])*
        #[derive(Clone, Zeroize)]
        pub(crate) struct $name {
            engine: Engine512,
        }

        impl Engine for $name {
            const BLOCK_LEN: usize = BLOCK_BYTES;
            const DIGEST_LEN: usize = $digest_len;

            fn new() -> Self {
                Self {
                    engine: Engine512::new(),
                }
            }

            fn init(&mut self) {
                self.engine.init(&$iv);
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

sha512_variant!(
    /// SHA-384: 48-byte output with its own IV.
    Sha384, H384, 48
);
sha512_variant!(
    /// SHA-512: the full-width variant.
    Sha512, H512, 64
);
sha512_variant!(
    /// SHA-512/224: 28-byte output, IV per FIPS 180-4 section 5.3.6.1.
    Sha512_224, H512_224, 28
);
sha512_variant!(
    /// SHA-512/256: 32-byte output, IV per FIPS 180-4 section 5.3.6.2.
    Sha512_256, H512_256, 32
);

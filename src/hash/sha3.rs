//! SHA-3 is the sponge-based hash function specified by [FIPS
//! 202](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf).
//!
//! All variants share the `Keccak-f[1600]` permutation over 25 64-bit
//! lanes and differ only in their rate: incoming bytes are buffered up
//! to the rate, XORed into the leading lanes as little-endian words, and
//! the permutation is run. Finalization writes the domain-separation
//! byte (`0x06` for fixed-output SHA-3, `0x1F` for SHAKE) at the current
//! offset, XORs `0x80` into the last byte of the rate, and absorbs the
//! padded tail. Output is squeezed from the leading lanes, running the
//! permutation again whenever more than one rate of output is requested.

use {
    super::Engine,
    crate::bytes::{read_u64v_le, write_u64v_le},
    zeroize::Zeroize,
};

const NUM_ROUNDS: usize = 24;

/// Round constants XORed into lane 0 after each χ step.
const RC: [u64; NUM_ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Lane visit order for the combined ρ/π step.
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Rotation offsets matching [`PI`].
const ROT: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Domain-separation byte for fixed-output SHA-3.
const PAD_SHA3: u8 = 0x06;
/// Domain-separation byte for the SHAKE extendable-output functions.
const PAD_SHAKE: u8 = 0x1f;

fn keccak_f(s: &mut [u64; 25]) {
    for rc in RC {
        // θ: mix the XOR of each column into the neighbouring columns.
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = s[x] ^ s[x + 5] ^ s[x + 10] ^ s[x + 15] ^ s[x + 20];
        }
        for x in 0..5 {
            let t = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                s[5 * y + x] ^= t;
            }
        }

        // ρ and π: rotate each lane and move it to its new position,
        // chasing a single displaced value around the state.
        let mut t = s[1];
        for i in 0..24 {
            let next = s[PI[i]];
            s[PI[i]] = t.rotate_left(ROT[i]);
            t = next;
        }

        // χ: the only non-linear step, applied row by row.
        for y in 0..5 {
            let row = [s[5 * y], s[5 * y + 1], s[5 * y + 2], s[5 * y + 3], s[5 * y + 4]];
            for x in 0..5 {
                s[5 * y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // ι.
        s[0] ^= rc;
    }
}

/// The sponge state shared by every SHA-3 and SHAKE variant.
///
/// `rate` is fixed at `init`; the buffer holds bytes that have not yet
/// been absorbed.
#[derive(Clone, Zeroize)]
pub(crate) struct Sha3 {
    s: [u64; 25],
    buf: [u8; 200],
    off: usize,
    rate: usize,
}

impl Sha3 {
    fn new() -> Self {
        Self {
            s: [0; 25],
            buf: [0; 200],
            off: 0,
            rate: 0,
        }
    }

    fn init(&mut self, rate: usize) {
        self.s = [0; 25];
        self.off = 0;
        self.rate = rate;
    }

    fn update(&mut self, data: &[u8]) {
        let rate = self.rate;
        let mut data = data;

        if self.off > 0 {
            let take = (rate - self.off).min(data.len());
            self.buf[self.off..self.off + take].copy_from_slice(&data[..take]);
            self.off += take;
            data = &data[take..];
            if self.off == rate {
                Self::absorb(&mut self.s, &self.buf[..rate]);
                self.off = 0;
            }
        }
        while data.len() >= rate {
            Self::absorb(&mut self.s, &data[..rate]);
            data = &data[rate..];
        }
        self.buf[..data.len()].copy_from_slice(data);
        self.off += data.len();
    }

    /// XOR one rate-sized block into the leading lanes and permute.
    fn absorb(s: &mut [u64; 25], block: &[u8]) {
        let mut words = [0u64; 25];
        read_u64v_le(&mut words[..block.len() / 8], block);
        for (lane, word) in s.iter_mut().zip(words.iter().take(block.len() / 8)) {
            *lane ^= *word;
        }
        keccak_f(s);
    }

    /// Pad with the domain-separation byte, absorb the tail, and squeeze
    /// `md.len()` bytes.
    fn finish_with(&mut self, pad: u8, md: &mut [u8]) {
        let rate = self.rate;
        self.buf[self.off..rate].fill(0);
        self.buf[self.off] = pad;
        self.buf[rate - 1] |= 0x80;
        Self::absorb(&mut self.s, &self.buf[..rate]);
        self.off = 0;

        let mut written = 0;
        while written < md.len() {
            if written > 0 {
                keccak_f(&mut self.s);
            }
            let take = (md.len() - written).min(rate);
            write_u64v_le(&mut md[written..written + take], &self.s);
            written += take;
        }
    }
}

macro_rules! sha3_variant {
    ($(#[$doc:meta])* $name:ident, $rate:expr, $digest_len:expr) => {
        $(#[$doc])*
        #[derive(Clone, Zeroize)]
        pub(crate) struct $name {
            sponge: Sha3,
        }

        impl Engine for $name {
            const BLOCK_LEN: usize = $rate;
            const DIGEST_LEN: usize = $digest_len;

            fn new() -> Self {
                Self {
                    sponge: Sha3::new(),
                }
            }

            fn init(&mut self) {
                self.sponge.init($rate);
            }

            fn update(&mut self, data: &[u8]) {
                self.sponge.update(data);
            }

            fn finish(&mut self, md: &mut [u8]) {
                self.sponge.finish_with(PAD_SHA3, md);
            }
        }
    };
}

sha3_variant!(
    /// SHA3-224: rate 144, capacity 56.
    Sha3_224, 144, 28
);
sha3_variant!(
    /// SHA3-256: rate 136, capacity 64.
    Sha3_256, 136, 32
);
sha3_variant!(
    /// SHA3-384: rate 104, capacity 96.
    Sha3_384, 104, 48
);
sha3_variant!(
    /// SHA3-512: rate 72, capacity 128.
    Sha3_512, 72, 64
);

/// Single-shot SHAKE128: fill `md` with output squeezed from `msg`.
///
/// Any output length is allowed; the permutation reruns for every
/// further 168 bytes requested.
pub fn shake128(md: &mut [u8], msg: &[u8]) {
    shake(168, md, msg);
}

/// Single-shot SHAKE256: fill `md` with output squeezed from `msg`.
pub fn shake256(md: &mut [u8], msg: &[u8]) {
    shake(136, md, msg);
}

fn shake(rate: usize, md: &mut [u8], msg: &[u8]) {
    let mut sponge = Sha3::new();
    sponge.init(rate);
    sponge.update(msg);
    sponge.finish_with(PAD_SHAKE, md);
}

//! Message digest algorithms behind a uniform method registry.
//!
//! Every engine implements the same streaming protocol — `init` writes
//! the algorithm's initial values, `update` absorbs message bytes,
//! `finish` pads and emits the digest — and the registry maps a stable
//! [`HashId`] plus an implementation-flag mask to the first matching
//! entry of a statically ordered method table. A [`Hash`] handle owns
//! the method reference and the engine state, tracks the lifecycle
//! phase, and wipes the state on drop.

pub(crate) mod blake2b;
pub(crate) mod blake2s;
pub(crate) mod sha1;
pub(crate) mod sha2;
pub(crate) mod sha3;
pub(crate) mod sha512;

pub use sha3::{shake128, shake256};

use {
    crate::error::{Error, Result},
    zeroize::Zeroize,
};

/// Restrict a method lookup to internal implementations: entries backed
/// by this crate's own code rather than an external library. The
/// remaining bits are reserved.
pub const METH_FLAG_INTERNAL: u8 = 0x01;

/// Hash algorithm identifiers.
///
/// The discriminants are part of the external ABI and stable across
/// versions.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashId {
    Sha1 = 0,
    Sha224 = 1,
    Sha256 = 2,
    Sha384 = 3,
    Sha512 = 4,
    Sha512_224 = 5,
    Sha512_256 = 6,
    Sha3_224 = 7,
    Sha3_256 = 8,
    Sha3_384 = 9,
    Sha3_512 = 10,
    Blake2b224 = 11,
    Blake2b256 = 12,
    Blake2b384 = 13,
    Blake2b512 = 14,
    Blake2s224 = 15,
    Blake2s256 = 16,
}

/// The streaming protocol every digest engine implements.
///
/// `finish` writes exactly `md.len()` bytes, which callers keep at or
/// below [`Engine::DIGEST_LEN`]; the truncated SHA variants rely on this
/// to emit partial chaining words. None of the operations allocate.
pub(crate) trait Engine: Clone {
    /// Input block size in bytes (the sponge rate for SHA-3).
    const BLOCK_LEN: usize;
    /// Digest output size in bytes.
    const DIGEST_LEN: usize;

    /// A zeroed state; chaining values are not yet meaningful.
    fn new() -> Self;
    /// Write the algorithm's initial values and clear all counters.
    fn init(&mut self);
    /// Absorb message bytes; an empty slice is a no-op.
    fn update(&mut self, data: &[u8]);
    /// Pad, run the last compression, and serialize the digest.
    fn finish(&mut self, md: &mut [u8]);
}

/// Lifecycle of a handle between public calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Allocated, chaining values not yet written.
    Fresh,
    /// Initialized, no message bytes absorbed yet.
    Initialized,
    /// At least one `update` has been accepted.
    Absorbing,
    /// Finalized; the handle must be re-initialized before reuse.
    Finalized,
}

/// Concrete engine state, one variant per registered algorithm.
///
/// This is the typed replacement for the original's opaque context
/// pointer: dispatch is an exhaustive match, and no state is ever
/// reinterpreted as another algorithm's.
#[derive(Clone, Zeroize)]
pub(crate) enum State {
    Sha1(sha1::Sha1),
    Sha224(sha2::Sha224),
    Sha256(sha2::Sha256),
    Sha384(sha512::Sha384),
    Sha512(sha512::Sha512),
    Sha512_224(sha512::Sha512_224),
    Sha512_256(sha512::Sha512_256),
    Sha3_224(sha3::Sha3_224),
    Sha3_256(sha3::Sha3_256),
    Sha3_384(sha3::Sha3_384),
    Sha3_512(sha3::Sha3_512),
    Blake2b224(blake2b::Blake2b224),
    Blake2b256(blake2b::Blake2b256),
    Blake2b384(blake2b::Blake2b384),
    Blake2b512(blake2b::Blake2b512),
    Blake2s224(blake2s::Blake2s224),
    Blake2s256(blake2s::Blake2s256),
}

/// Apply one expression to the engine inside any [`State`] variant.
macro_rules! with_engine {
    ($state:expr, $engine:ident => $body:expr) => {
        match $state {
            State::Sha1($engine) => $body,
            State::Sha224($engine) => $body,
            State::Sha256($engine) => $body,
            State::Sha384($engine) => $body,
            State::Sha512($engine) => $body,
            State::Sha512_224($engine) => $body,
            State::Sha512_256($engine) => $body,
            State::Sha3_224($engine) => $body,
            State::Sha3_256($engine) => $body,
            State::Sha3_384($engine) => $body,
            State::Sha3_512($engine) => $body,
            State::Blake2b224($engine) => $body,
            State::Blake2b256($engine) => $body,
            State::Blake2b384($engine) => $body,
            State::Blake2b512($engine) => $body,
            State::Blake2s224($engine) => $body,
            State::Blake2s256($engine) => $body,
        }
    };
}

impl State {
    fn init(&mut self) {
        with_engine!(self, e => e.init())
    }

    fn update(&mut self, data: &[u8]) {
        with_engine!(self, e => e.update(data))
    }

    fn finish(&mut self, md: &mut [u8]) {
        with_engine!(self, e => e.finish(md))
    }
}

/// Constructor functions referenced by the method table.
macro_rules! state_ctor {
    ($fn_name:ident, $variant:ident) => {
        fn $fn_name() -> State {
            State::$variant(Engine::new())
        }
    };
}

state_ctor!(sha1_state, Sha1);
state_ctor!(sha224_state, Sha224);
state_ctor!(sha256_state, Sha256);
state_ctor!(sha384_state, Sha384);
state_ctor!(sha512_state, Sha512);
state_ctor!(sha512_224_state, Sha512_224);
state_ctor!(sha512_256_state, Sha512_256);
state_ctor!(sha3_224_state, Sha3_224);
state_ctor!(sha3_256_state, Sha3_256);
state_ctor!(sha3_384_state, Sha3_384);
state_ctor!(sha3_512_state, Sha3_512);
state_ctor!(blake2b_224_state, Blake2b224);
state_ctor!(blake2b_256_state, Blake2b256);
state_ctor!(blake2b_384_state, Blake2b384);
state_ctor!(blake2b_512_state, Blake2b512);
state_ctor!(blake2s_224_state, Blake2s224);
state_ctor!(blake2s_256_state, Blake2s256);

/// A registered hash implementation.
pub(crate) struct HashMeth {
    /// Human-readable implementation name.
    pub name: &'static str,
    /// Implementation flags; a lookup mask must be covered by these.
    pub flags: u8,
    /// The algorithm this entry implements.
    pub id: HashId,
    /// Digest output length in bytes.
    pub len: usize,
    /// Build a fresh, zeroed state for this algorithm.
    pub state: fn() -> State,
}

/// The hash method table. The first entry whose id matches and whose
/// flags cover the requested mask wins, so the order here IS the
/// preference policy; do not sort it.
static HASH_METHS: [HashMeth; 17] = [
    HashMeth {
        name: "SHA-1 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Sha1,
        len: 20,
        state: sha1_state,
    },
    HashMeth {
        name: "SHA-224 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Sha224,
        len: 28,
        state: sha224_state,
    },
    HashMeth {
        name: "SHA-256 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Sha256,
        len: 32,
        state: sha256_state,
    },
    HashMeth {
        name: "SHA-384 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Sha384,
        len: 48,
        state: sha384_state,
    },
    HashMeth {
        name: "SHA-512 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Sha512,
        len: 64,
        state: sha512_state,
    },
    HashMeth {
        name: "SHA-512_224 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Sha512_224,
        len: 28,
        state: sha512_224_state,
    },
    HashMeth {
        name: "SHA-512_256 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Sha512_256,
        len: 32,
        state: sha512_256_state,
    },
    HashMeth {
        name: "SHA-3_224 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Sha3_224,
        len: 28,
        state: sha3_224_state,
    },
    HashMeth {
        name: "SHA-3_256 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Sha3_256,
        len: 32,
        state: sha3_256_state,
    },
    HashMeth {
        name: "SHA-3_384 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Sha3_384,
        len: 48,
        state: sha3_384_state,
    },
    HashMeth {
        name: "SHA-3_512 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Sha3_512,
        len: 64,
        state: sha3_512_state,
    },
    HashMeth {
        name: "BLAKE2b_224 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Blake2b224,
        len: 28,
        state: blake2b_224_state,
    },
    HashMeth {
        name: "BLAKE2b_256 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Blake2b256,
        len: 32,
        state: blake2b_256_state,
    },
    HashMeth {
        name: "BLAKE2b_384 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Blake2b384,
        len: 48,
        state: blake2b_384_state,
    },
    HashMeth {
        name: "BLAKE2b_512 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Blake2b512,
        len: 64,
        state: blake2b_512_state,
    },
    HashMeth {
        name: "BLAKE2s_224 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Blake2s224,
        len: 28,
        state: blake2s_224_state,
    },
    HashMeth {
        name: "BLAKE2s_256 internal",
        flags: METH_FLAG_INTERNAL,
        id: HashId::Blake2s256,
        len: 32,
        state: blake2s_256_state,
    },
];

/// First method whose id matches and whose flags cover `flags`.
fn meth_get(id: HashId, flags: u8) -> Result<&'static HashMeth> {
    HASH_METHS
        .iter()
        .find(|m| m.id == id && (m.flags & flags) == flags)
        .ok_or(Error::NotFound)
}

/// A streaming hash computation.
///
/// The handle is single-owner and deliberately neither `Clone` nor
/// shareable; distinct handles carry no shared state and may be used
/// from distinct threads without coordination. Dropping the handle
/// zeroizes the engine state.
pub struct Hash {
    meth: &'static HashMeth,
    state: State,
    phase: Phase,
}

impl Hash {
    /// Digest length in bytes of the algorithm `id`, without
    /// constructing a handle.
    pub fn meth_len(id: HashId) -> Result<usize> {
        HASH_METHS
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.len)
            .ok_or(Error::NotFound)
    }

    /// Look up the first implementation of `id` covering `flags` and
    /// allocate its zeroed state.
    pub fn new(id: HashId, flags: u8) -> Result<Self> {
        let meth = meth_get(id, flags)?;
        Ok(Self {
            meth,
            state: (meth.state)(),
            phase: Phase::Fresh,
        })
    }

    /// Begin a digest computation.
    ///
    /// Accepted in every phase: a handle may be re-initialized at any
    /// point, which discards all absorbed data.
    pub fn init(&mut self) -> Result<()> {
        self.state.init();
        self.phase = Phase::Initialized;
        Ok(())
    }

    /// Absorb message bytes. `update(&[])` is a successful no-op.
    pub fn update(&mut self, msg: &[u8]) -> Result<()> {
        match self.phase {
            Phase::Initialized | Phase::Absorbing => {
                self.state.update(msg);
                self.phase = Phase::Absorbing;
                Ok(())
            }
            Phase::Fresh | Phase::Finalized => Err(Error::NotInitialized),
        }
    }

    /// Finalize and write the digest into the front of `md`.
    ///
    /// `md` must hold at least [`output_len`](Self::output_len) bytes;
    /// exactly that many are written. The handle is consumed logically:
    /// further `update` or `finish` calls fail with `NotInitialized`
    /// until [`init`](Self::init) is called again.
    pub fn finish(&mut self, md: &mut [u8]) -> Result<()> {
        match self.phase {
            Phase::Initialized | Phase::Absorbing => {
                if md.len() < self.meth.len {
                    return Err(Error::BadLen);
                }
                self.state.finish(&mut md[..self.meth.len]);
                self.phase = Phase::Finalized;
                Ok(())
            }
            Phase::Fresh | Phase::Finalized => Err(Error::NotInitialized),
        }
    }

    /// Digest length in bytes; constant over the life of the handle.
    pub fn output_len(&self) -> usize {
        self.meth.len
    }

    /// Name of the implementation backing this handle.
    pub fn impl_name(&self) -> &'static str {
        self.meth.name
    }
}

impl Drop for Hash {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

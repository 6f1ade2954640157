//! Message authentication codes behind the same method-registry shape
//! as [`hash`](crate::hash).
//!
//! Three keying constructions are registered: [HMAC](hmac) over SHA-1
//! and the SHA-2 family, the native keyed sponge of SHA-3 (the key is
//! absorbed ahead of the message — a sponge is not subject to the
//! length-extension attacks HMAC exists to prevent), and the native
//! keyed mode of BLAKE2 (the key is compressed as a zero-padded first
//! block). Signing and verification share the same state flow;
//! verification finalizes into a scratch buffer and compares against
//! the expected tag in constant time.

mod hmac;

use {
    crate::{
        bytes,
        error::{Error, Result},
        hash::{
            blake2b::{Blake2b224, Blake2b256, Blake2b384, Blake2b512},
            blake2s::{Blake2s224, Blake2s256},
            sha1::Sha1,
            sha2::{Sha224, Sha256},
            sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512},
            sha512::{Sha384, Sha512, Sha512_224, Sha512_256},
            Engine, Phase, METH_FLAG_INTERNAL,
        },
    },
    hmac::Hmac,
    zeroize::Zeroize,
};

/// MAC algorithm identifiers.
///
/// The discriminants are part of the external ABI and stable across
/// versions. They parallel [`HashId`](crate::HashId): slots 0–6 are the
/// HMAC constructions, the rest are the native keyed modes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacId {
    HmacSha1 = 0,
    HmacSha224 = 1,
    HmacSha256 = 2,
    HmacSha384 = 3,
    HmacSha512 = 4,
    HmacSha512_224 = 5,
    HmacSha512_256 = 6,
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

/// Concrete MAC state, one variant per registered algorithm. HMAC
/// variants hold the inner/outer pair; the keyed sponge and BLAKE2
/// variants reuse the digest engines directly.
#[derive(Clone, Zeroize)]
enum State {
    HmacSha1(Hmac<Sha1>),
    HmacSha224(Hmac<Sha224>),
    HmacSha256(Hmac<Sha256>),
    HmacSha384(Hmac<Sha384>),
    HmacSha512(Hmac<Sha512>),
    HmacSha512_224(Hmac<Sha512_224>),
    HmacSha512_256(Hmac<Sha512_256>),
    Sha3_224(Sha3_224),
    Sha3_256(Sha3_256),
    Sha3_384(Sha3_384),
    Sha3_512(Sha3_512),
    Blake2b224(Blake2b224),
    Blake2b256(Blake2b256),
    Blake2b384(Blake2b384),
    Blake2b512(Blake2b512),
    Blake2s224(Blake2s224),
    Blake2s256(Blake2s256),
}

/// Apply one expression to the computation inside any [`State`]
/// variant. HMAC states and raw engines expose the same
/// `update`/`finish` surface, so everything after keying dispatches
/// uniformly.
macro_rules! with_state {
    ($state:expr, $mac:ident => $body:expr) => {
        match $state {
            State::HmacSha1($mac) => $body,
            State::HmacSha224($mac) => $body,
            State::HmacSha256($mac) => $body,
            State::HmacSha384($mac) => $body,
            State::HmacSha512($mac) => $body,
            State::HmacSha512_224($mac) => $body,
            State::HmacSha512_256($mac) => $body,
            State::Sha3_224($mac) => $body,
            State::Sha3_256($mac) => $body,
            State::Sha3_384($mac) => $body,
            State::Sha3_512($mac) => $body,
            State::Blake2b224($mac) => $body,
            State::Blake2b256($mac) => $body,
            State::Blake2b384($mac) => $body,
            State::Blake2b512($mac) => $body,
            State::Blake2s224($mac) => $body,
            State::Blake2s256($mac) => $body,
        }
    };
}

impl State {
    /// Key the computation. Only BLAKE2 restricts the key length.
    fn init(&mut self, key: &[u8]) -> Result<()> {
        match self {
            State::HmacSha1(mac) => mac.init(key),
            State::HmacSha224(mac) => mac.init(key),
            State::HmacSha256(mac) => mac.init(key),
            State::HmacSha384(mac) => mac.init(key),
            State::HmacSha512(mac) => mac.init(key),
            State::HmacSha512_224(mac) => mac.init(key),
            State::HmacSha512_256(mac) => mac.init(key),
            // Keyed sponge: absorb the key ahead of the message.
            State::Sha3_224(engine) => {
                engine.init();
                engine.update(key);
            }
            State::Sha3_256(engine) => {
                engine.init();
                engine.update(key);
            }
            State::Sha3_384(engine) => {
                engine.init();
                engine.update(key);
            }
            State::Sha3_512(engine) => {
                engine.init();
                engine.update(key);
            }
            State::Blake2b224(engine) => return engine.init_keyed(key),
            State::Blake2b256(engine) => return engine.init_keyed(key),
            State::Blake2b384(engine) => return engine.init_keyed(key),
            State::Blake2b512(engine) => return engine.init_keyed(key),
            State::Blake2s224(engine) => return engine.init_keyed(key),
            State::Blake2s256(engine) => return engine.init_keyed(key),
        }
        Ok(())
    }

    fn update(&mut self, msg: &[u8]) {
        with_state!(self, mac => mac.update(msg))
    }

    fn finish(&mut self, md: &mut [u8]) {
        with_state!(self, mac => mac.finish(md))
    }
}

/// Constructor functions referenced by the method table.
macro_rules! hmac_ctor {
    ($fn_name:ident, $variant:ident) => {
        fn $fn_name() -> State {
            State::$variant(Hmac::new())
        }
    };
}

macro_rules! keyed_ctor {
    ($fn_name:ident, $variant:ident) => {
        fn $fn_name() -> State {
            State::$variant(Engine::new())
        }
    };
}

hmac_ctor!(hmac_sha1_state, HmacSha1);
hmac_ctor!(hmac_sha224_state, HmacSha224);
hmac_ctor!(hmac_sha256_state, HmacSha256);
hmac_ctor!(hmac_sha384_state, HmacSha384);
hmac_ctor!(hmac_sha512_state, HmacSha512);
hmac_ctor!(hmac_sha512_224_state, HmacSha512_224);
hmac_ctor!(hmac_sha512_256_state, HmacSha512_256);
keyed_ctor!(sha3_224_state, Sha3_224);
keyed_ctor!(sha3_256_state, Sha3_256);
keyed_ctor!(sha3_384_state, Sha3_384);
keyed_ctor!(sha3_512_state, Sha3_512);
keyed_ctor!(blake2b_224_state, Blake2b224);
keyed_ctor!(blake2b_256_state, Blake2b256);
keyed_ctor!(blake2b_384_state, Blake2b384);
keyed_ctor!(blake2b_512_state, Blake2b512);
keyed_ctor!(blake2s_224_state, Blake2s224);
keyed_ctor!(blake2s_256_state, Blake2s256);

/// A registered MAC implementation.
struct MacMeth {
    name: &'static str,
    flags: u8,
    id: MacId,
    len: usize,
    state: fn() -> State,
}

/// The MAC method table. As on the hash side, the first entry whose id
/// matches and whose flags cover the requested mask wins; the order IS
/// the preference policy.
static MAC_METHS: [MacMeth; 17] = [
    MacMeth {
        name: "HMAC-SHA-1 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::HmacSha1,
        len: 20,
        state: hmac_sha1_state,
    },
    MacMeth {
        name: "HMAC-SHA-224 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::HmacSha224,
        len: 28,
        state: hmac_sha224_state,
    },
    MacMeth {
        name: "HMAC-SHA-256 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::HmacSha256,
        len: 32,
        state: hmac_sha256_state,
    },
    MacMeth {
        name: "HMAC-SHA-384 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::HmacSha384,
        len: 48,
        state: hmac_sha384_state,
    },
    MacMeth {
        name: "HMAC-SHA-512 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::HmacSha512,
        len: 64,
        state: hmac_sha512_state,
    },
    MacMeth {
        name: "HMAC-SHA-512_224 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::HmacSha512_224,
        len: 28,
        state: hmac_sha512_224_state,
    },
    MacMeth {
        name: "HMAC-SHA-512_256 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::HmacSha512_256,
        len: 32,
        state: hmac_sha512_256_state,
    },
    MacMeth {
        name: "SHA-3_224 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::Sha3_224,
        len: 28,
        state: sha3_224_state,
    },
    MacMeth {
        name: "SHA-3_256 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::Sha3_256,
        len: 32,
        state: sha3_256_state,
    },
    MacMeth {
        name: "SHA-3_384 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::Sha3_384,
        len: 48,
        state: sha3_384_state,
    },
    MacMeth {
        name: "SHA-3_512 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::Sha3_512,
        len: 64,
        state: sha3_512_state,
    },
    MacMeth {
        name: "BLAKE2b_224 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::Blake2b224,
        len: 28,
        state: blake2b_224_state,
    },
    MacMeth {
        name: "BLAKE2b_256 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::Blake2b256,
        len: 32,
        state: blake2b_256_state,
    },
    MacMeth {
        name: "BLAKE2b_384 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::Blake2b384,
        len: 48,
        state: blake2b_384_state,
    },
    MacMeth {
        name: "BLAKE2b_512 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::Blake2b512,
        len: 64,
        state: blake2b_512_state,
    },
    MacMeth {
        name: "BLAKE2s_224 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::Blake2s224,
        len: 28,
        state: blake2s_224_state,
    },
    MacMeth {
        name: "BLAKE2s_256 internal",
        flags: METH_FLAG_INTERNAL,
        id: MacId::Blake2s256,
        len: 32,
        state: blake2s_256_state,
    },
];

/// Largest MAC output of any registered method; sizes the verification
/// scratch buffer.
const TAG_MAX: usize = 64;

fn meth_get(id: MacId, flags: u8) -> Result<&'static MacMeth> {
    MAC_METHS
        .iter()
        .find(|m| m.id == id && (m.flags & flags) == flags)
        .ok_or(Error::NotFound)
}

/// A streaming MAC computation.
///
/// Like [`Hash`](crate::Hash), the handle is single-owner and carries no
/// shared state; dropping it zeroizes the engine state, which matters
/// here because the state is derived from the key.
pub struct Mac {
    meth: &'static MacMeth,
    state: State,
    phase: Phase,
}

impl Mac {
    /// Tag length in bytes of the algorithm `id`, without constructing a
    /// handle.
    pub fn meth_len(id: MacId) -> Result<usize> {
        MAC_METHS
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.len)
            .ok_or(Error::NotFound)
    }

    /// Look up the first implementation of `id` covering `flags` and
    /// allocate its zeroed state.
    pub fn new(id: MacId, flags: u8) -> Result<Self> {
        let meth = meth_get(id, flags)?;
        Ok(Self {
            meth,
            state: (meth.state)(),
            phase: Phase::Fresh,
        })
    }

    /// Begin a signing computation with `key`.
    ///
    /// Accepted in every phase. BLAKE2 keys longer than the algorithm
    /// maximum (64 bytes for BLAKE2b, 32 for BLAKE2s) fail with
    /// `BadLen` and leave the handle un-initialized.
    pub fn sign_init(&mut self, key: &[u8]) -> Result<()> {
        self.key_init(key)
    }

    /// Absorb message bytes into the signing computation.
    pub fn sign_update(&mut self, msg: &[u8]) -> Result<()> {
        self.absorb(msg)
    }

    /// Finalize and write the tag into the front of `md`.
    ///
    /// `md` must hold at least [`output_len`](Self::output_len) bytes;
    /// exactly that many are written.
    pub fn sign_finish(&mut self, md: &mut [u8]) -> Result<()> {
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

    /// Begin a verification computation with `key`. Identical to
    /// [`sign_init`](Self::sign_init); the flows differ only at
    /// finalization.
    pub fn verify_init(&mut self, key: &[u8]) -> Result<()> {
        self.key_init(key)
    }

    /// Absorb message bytes into the verification computation.
    pub fn verify_update(&mut self, msg: &[u8]) -> Result<()> {
        self.absorb(msg)
    }

    /// Finalize and compare against `tag`, which must hold at least
    /// [`output_len`](Self::output_len) bytes.
    ///
    /// Returns `Ok(false)` on mismatch — an unauthentic message is a
    /// result, not an error. The comparison covers exactly the tag
    /// length and runs in constant time.
    pub fn verify_finish(&mut self, tag: &[u8]) -> Result<bool> {
        match self.phase {
            Phase::Initialized | Phase::Absorbing => {
                if tag.len() < self.meth.len {
                    return Err(Error::BadLen);
                }
                let mut computed = [0u8; TAG_MAX];
                self.state.finish(&mut computed[..self.meth.len]);
                self.phase = Phase::Finalized;
                let verified = bytes::ct_eq(&computed[..self.meth.len], &tag[..self.meth.len]);
                computed.zeroize();
                Ok(verified)
            }
            Phase::Fresh | Phase::Finalized => Err(Error::NotInitialized),
        }
    }

    /// Tag length in bytes; constant over the life of the handle.
    pub fn output_len(&self) -> usize {
        self.meth.len
    }

    /// Name of the implementation backing this handle.
    pub fn impl_name(&self) -> &'static str {
        self.meth.name
    }

    fn key_init(&mut self, key: &[u8]) -> Result<()> {
        match self.state.init(key) {
            Ok(()) => {
                self.phase = Phase::Initialized;
                Ok(())
            }
            Err(err) => {
                self.phase = Phase::Fresh;
                Err(err)
            }
        }
    }

    fn absorb(&mut self, msg: &[u8]) -> Result<()> {
        match self.phase {
            Phase::Initialized | Phase::Absorbing => {
                self.state.update(msg);
                self.phase = Phase::Absorbing;
                Ok(())
            }
            Phase::Fresh | Phase::Finalized => Err(Error::NotInitialized),
        }
    }
}

impl Drop for Mac {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

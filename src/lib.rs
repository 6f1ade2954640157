//! Streaming message digest and MAC primitives behind a uniform method
//! registry.
//!
//! Five algorithm families are implemented from their published
//! standards: SHA-1 and SHA-2 ([FIPS
//! 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf)),
//! SHA-3 ([FIPS
//! 202](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf)),
//! BLAKE2b and BLAKE2s ([RFC
//! 7693](https://www.rfc-editor.org/rfc/rfc7693)), plus HMAC ([RFC
//! 2104](https://www.rfc-editor.org/rfc/rfc2104)) over SHA-1/SHA-2 and
//! the native keyed modes of SHA-3 and BLAKE2.
//!
//! A [`Hash`] or [`Mac`] handle is obtained by algorithm identifier from
//! a statically ordered method table and drives the usual
//! init/update/final streaming protocol:
//!
//! ```
//! use hashmac::{Hash, HashId};
//!
//! let mut hash = Hash::new(HashId::Sha256, 0)?;
//! let mut digest = [0; 32];
//! hash.init()?;
//! hash.update(b"abc")?;
//! hash.finish(&mut digest)?;
//! assert_eq!(
//!     hex::encode(digest),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
//! );
//! # Ok::<(), hashmac::Error>(())
//! ```


mod bytes;
mod error;
mod hash;
mod mac;

pub use {
    error::{Error, Result},
    hash::{shake128, shake256, Hash, HashId, METH_FLAG_INTERNAL},
    mac::{Mac, MacId},
};

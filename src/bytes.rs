//! Byte/word conversion helpers shared by the hash engines.
//!
//! Every engine serializes its chaining words explicitly through these
//! functions; no engine reinterprets a byte buffer as a word array.

use subtle::ConstantTimeEq;

/// Read big-endian 32-bit words from `src` into `dst`.
///
/// `src` must hold exactly `4 * dst.len()` bytes.
pub(crate) fn read_u32v_be(dst: &mut [u32], src: &[u8]) {
    debug_assert_eq!(src.len(), 4 * dst.len());
    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(4)) {
        *word = u32::from_be_bytes(chunk.try_into().unwrap());
    }
}

/// Read big-endian 64-bit words from `src` into `dst`.
///
/// `src` must hold exactly `8 * dst.len()` bytes.
pub(crate) fn read_u64v_be(dst: &mut [u64], src: &[u8]) {
    debug_assert_eq!(src.len(), 8 * dst.len());
    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(8)) {
        *word = u64::from_be_bytes(chunk.try_into().unwrap());
    }
}

/// Read little-endian 64-bit words from `src` into `dst`.
///
/// `src` must hold exactly `8 * dst.len()` bytes.
pub(crate) fn read_u64v_le(dst: &mut [u64], src: &[u8]) {
    debug_assert_eq!(src.len(), 8 * dst.len());
    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(8)) {
        *word = u64::from_le_bytes(chunk.try_into().unwrap());
    }
}

/// Read little-endian 32-bit words from `src` into `dst`.
///
/// `src` must hold exactly `4 * dst.len()` bytes.
pub(crate) fn read_u32v_le(dst: &mut [u32], src: &[u8]) {
    debug_assert_eq!(src.len(), 4 * dst.len());
    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(4)) {
        *word = u32::from_le_bytes(chunk.try_into().unwrap());
    }
}

/// Write `src` as big-endian 32-bit words into `dst`, most significant
/// byte of each word first, stopping at the end of `dst`.
///
/// The final word is written partially when `dst.len()` is not a multiple
/// of four, which is how the truncated digest variants emit 28-byte
/// outputs from word-aligned state.
pub(crate) fn write_u32v_be(dst: &mut [u8], src: &[u32]) {
    for (chunk, word) in dst.chunks_mut(4).zip(src) {
        let n = chunk.len();
        chunk.copy_from_slice(&word.to_be_bytes()[..n]);
    }
}

/// Write `src` as big-endian 64-bit words into `dst`, stopping at the end
/// of `dst`. The final word may be written partially.
pub(crate) fn write_u64v_be(dst: &mut [u8], src: &[u64]) {
    for (chunk, word) in dst.chunks_mut(8).zip(src) {
        let n = chunk.len();
        chunk.copy_from_slice(&word.to_be_bytes()[..n]);
    }
}

/// Write `src` as little-endian 64-bit words into `dst`, stopping at the
/// end of `dst`. The final word may be written partially.
pub(crate) fn write_u64v_le(dst: &mut [u8], src: &[u64]) {
    for (chunk, word) in dst.chunks_mut(8).zip(src) {
        let n = chunk.len();
        chunk.copy_from_slice(&word.to_le_bytes()[..n]);
    }
}

/// Write `src` as little-endian 32-bit words into `dst`, stopping at the
/// end of `dst`. The final word may be written partially.
pub(crate) fn write_u32v_le(dst: &mut [u8], src: &[u32]) {
    for (chunk, word) in dst.chunks_mut(4).zip(src) {
        let n = chunk.len();
        chunk.copy_from_slice(&word.to_le_bytes()[..n]);
    }
}

/// Compare two equal-length byte slices in constant time.
///
/// Every byte is inspected regardless of where the first difference
/// occurs, so a MAC verification cannot leak the position of a mismatch
/// through timing.
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
